use crate::sanitizer::SanitizeError;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("The operation was not completed because `{0}`")]
    InvalidInput(String),
    #[error("Error from the API server: {0}")]
    Service(String, u16),
    #[error("Cannot sanitize the response")]
    Sanitize(#[from] SanitizeError),
    #[error("Error sending the request")]
    Transport(#[from] reqwest::Error),
    #[error("There is an issue in mftrim configuration: {0}")]
    ConfigIssue(String),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::InvalidInput(format!("Cannot read input: {}", e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::InvalidInput(format!("Deserialization error: {}", e))
    }
}

impl CliError {
    pub fn status(&self) -> Option<u16> {
        if let CliError::Service(_, status) = self {
            Some(*status)
        } else {
            None
        }
    }

    /// The error message followed by all its causes.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        message
    }

    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self.status() {
            Some(403) => 4,
            Some(_) => 2,
            None => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Service("forbidden".into(), 403).exit_code(), 4);
        assert_eq!(CliError::Service("not found".into(), 404).exit_code(), 2);
        assert_eq!(CliError::Sanitize(SanitizeError::NilInput).exit_code(), 1);
    }

    #[test]
    fn chain_lists_every_cause() {
        let e = CliError::from(SanitizeError::ItemProcessingFailed {
            index: 2,
            source: Box::new(SanitizeError::MalformedMetadata {
                kind: "Pod".to_string(),
                name: "web".to_string(),
            }),
        });

        assert_eq!(
            e.chain(),
            "Cannot sanitize the response: Cannot process list item 2: \
            Metadata of Pod `web` is not an object"
        );
    }
}
