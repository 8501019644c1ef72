use super::document::Document;
use super::SanitizeError;
use serde_json::Value;

pub const ITEMS: &str = "items";

#[derive(Debug, PartialEq)]
pub enum ResourceShape {
    Empty,
    SingleResource(Document),
    ResourceList {
        items: Vec<Document>,
        /// Every top level field of the list except `items`.
        envelope: Document,
    },
}

/// A document is a list when it carries an `items` array.
pub fn is_list(doc: &Document) -> bool {
    matches!(doc.get(ITEMS), Some(Value::Array(_)))
}

pub fn classify(mut doc: Document) -> Result<ResourceShape, SanitizeError> {
    if doc.is_empty() {
        return Ok(ResourceShape::Empty);
    }

    let items = match doc.remove(ITEMS) {
        Some(Value::Array(items)) => items,
        other => {
            if let Some(items) = other {
                doc.insert(ITEMS.to_string(), items);
            }
            return Ok(ResourceShape::SingleResource(doc));
        }
    };

    let items = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(resource) => Ok(resource),
            other => {
                log::debug!("List item {} is not an object: {}", index, other);
                Err(SanitizeError::ListConversionFailed { index })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResourceShape::ResourceList {
        items,
        envelope: doc,
    })
}

impl ResourceShape {
    /// Puts a classified document back together.
    pub fn into_document(self) -> Document {
        match self {
            ResourceShape::Empty => Document::new(),
            ResourceShape::SingleResource(doc) => doc,
            ResourceShape::ResourceList {
                items,
                mut envelope,
            } => {
                let items = items.into_iter().map(Value::Object).collect();
                envelope.insert(ITEMS.to_string(), Value::Array(items));
                envelope
            }
        }
    }
}
