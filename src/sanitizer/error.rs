use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SanitizeError {
    #[error("No response to sanitize")]
    NilInput,
    #[error("Empty body in a {status} response (declared length: {content_length:?})")]
    UnexpectedEmptyBody {
        status: StatusCode,
        content_length: Option<u64>,
    },
    #[error("Response is not valid JSON (body starts with `{preview}`)")]
    MalformedJson {
        preview: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Resource list cannot be converted: item {index} is not an object")]
    ListConversionFailed { index: usize },
    #[error("Metadata of {kind} `{name}` is not an object")]
    MalformedMetadata { kind: String, name: String },
    #[error("Cannot process list item {index}")]
    ItemProcessingFailed {
        index: usize,
        #[source]
        source: Box<SanitizeError>,
    },
    #[error("Cannot encode the sanitized document: {0}")]
    Encode(#[from] serde_json::Error),
}
