use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonOutcome {
    pub status: OutcomeStatus,
    pub message: String,
    pub http_status: Option<u16>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub enum OutcomeStatus {
    Success,
    Failure,
}

impl JsonOutcome {
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }

    pub fn is_failure(&self) -> bool {
        self.status == OutcomeStatus::Failure
    }
}
