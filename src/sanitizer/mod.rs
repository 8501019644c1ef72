//! Strips `metadata.managedFields` from cluster API responses.
//!
//! A response body is decoded into a JSON object, classified as a single
//! resource or a resource list, cleaned up resource by resource and encoded
//! again. Bodies that carry nothing to clean (empty, `{}`, `[]`) are handed
//! back untouched.

mod document;
mod error;
mod fields;
mod shape;

pub use document::Document;
pub use error::SanitizeError;
pub use fields::{remove_fields, REMOVED_FIELDS};
pub use shape::{classify, is_list, ResourceShape};

use reqwest::StatusCode;

/// How much of an undecodable body ends up in the error.
const PREVIEW_LEN: usize = 128;

/// What the transport hands over once the body has been read.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    /// The declared `Content-Length`, if any.
    pub content_length: Option<u64>,
    pub body: Option<Vec<u8>>,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        RawResponse {
            status,
            content_length: Some(body.len() as u64),
            body: Some(body),
        }
    }
}

pub fn sanitize_response(response: Option<RawResponse>) -> Result<Vec<u8>, SanitizeError> {
    let response = response.ok_or(SanitizeError::NilInput)?;

    let no_content =
        response.status == StatusCode::NO_CONTENT || response.content_length == Some(0);

    match response.body {
        Some(body) => sanitize(&body),
        None if no_content => Ok(Vec::new()),
        None => Err(SanitizeError::UnexpectedEmptyBody {
            status: response.status,
            content_length: response.content_length,
        }),
    }
}

/// Sanitizes an already read response body.
pub fn sanitize(raw: &[u8]) -> Result<Vec<u8>, SanitizeError> {
    if raw.is_empty() {
        log::debug!("Empty body, nothing to sanitize");
        return Ok(Vec::new());
    }

    let doc: Document = match serde_json::from_slice(raw) {
        Ok(doc) => doc,
        Err(_) if matches!(String::from_utf8_lossy(raw).trim(), "{}" | "[]") => {
            log::debug!("Trivial body, passing it through");
            return Ok(raw.to_vec());
        }
        Err(e) => {
            return Err(SanitizeError::MalformedJson {
                preview: preview(raw),
                source: e,
            })
        }
    };

    let shape = match classify(doc)? {
        ResourceShape::Empty => {
            log::debug!("No top level keys, passing the body through");
            return Ok(raw.to_vec());
        }
        ResourceShape::SingleResource(mut resource) => {
            remove_fields(&mut resource)?;
            ResourceShape::SingleResource(resource)
        }
        ResourceShape::ResourceList {
            mut items,
            envelope,
        } => {
            log::debug!("Sanitizing a list of {} items", items.len());
            for (index, item) in items.iter_mut().enumerate() {
                remove_fields(item).map_err(|e| SanitizeError::ItemProcessingFailed {
                    index,
                    source: Box::new(e),
                })?;
            }
            ResourceShape::ResourceList { items, envelope }
        }
    };

    Ok(serde_json::to_vec(&shape.into_document())?)
}

fn preview(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    match text.char_indices().nth(PREVIEW_LEN) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.into_owned(),
    }
}
