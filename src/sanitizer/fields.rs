use super::document::{self, Document};
use super::SanitizeError;

pub const METADATA: &str = "metadata";

/// Keys stripped from every resource's metadata section.
pub const REMOVED_FIELDS: &[&str] = &["managedFields"];

/// Strips [`REMOVED_FIELDS`] from the resource metadata, in place.
///
/// A resource without metadata is left untouched. Metadata that is present but
/// not an object fails with [`SanitizeError::MalformedMetadata`].
pub fn remove_fields(resource: &mut Document) -> Result<(), SanitizeError> {
    if resource.is_empty() {
        return Ok(());
    }

    for field in REMOVED_FIELDS {
        match document::remove_nested_field(resource, METADATA, field) {
            Ok(Some(_)) => log::debug!(
                "Removed {} from {} `{}`",
                field,
                document::str_field(resource, &["kind"]),
                document::str_field(resource, &[METADATA, "name"])
            ),
            Ok(None) => {}
            Err(mismatch) => {
                log::debug!("{} is a {}", mismatch.field, mismatch.found);
                return Err(malformed(resource));
            }
        }
    }

    Ok(())
}

fn malformed(resource: &Document) -> SanitizeError {
    SanitizeError::MalformedMetadata {
        kind: document::str_field(resource, &["kind"]).to_string(),
        name: document::str_field(resource, &[METADATA, "name"]).to_string(),
    }
}
