use crate::util::CliError;
use serde::{Deserialize, Serialize};

/// When it comes to operation results there are two possible outputs:
pub enum Outcome<T> {
    SuccessWithMessage(String),
    SuccessWithData(T),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonOutcome {
    status: OutcomeStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    http_status: Option<u16>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum OutcomeStatus {
    Success,
    Failure,
}

impl JsonOutcome {
    pub fn success(message: String) -> JsonOutcome {
        JsonOutcome {
            status: OutcomeStatus::Success,
            message,
            http_status: None,
        }
    }

    pub fn failure(message: String, http_status: Option<u16>) -> JsonOutcome {
        JsonOutcome {
            status: OutcomeStatus::Failure,
            message,
            http_status,
        }
    }
}

impl From<&CliError> for JsonOutcome {
    fn from(error: &CliError) -> Self {
        JsonOutcome::failure(error.chain(), error.status())
    }
}
