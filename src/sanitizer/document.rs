use serde_json::{Map, Value};

/// A decoded resource, or the envelope of a resource list.
pub type Document = Map<String, Value>;

/// The value found at a given key was not of the expected JSON type.
#[derive(Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    pub field: String,
    pub found: &'static str,
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Mutable access to the map stored under `field`.
///
/// `Ok(None)` when the key is absent. A present value that is not an object
/// (`null` included) is reported instead of being coerced.
pub fn nested_map<'a>(
    doc: &'a mut Document,
    field: &str,
) -> Result<Option<&'a mut Document>, TypeMismatch> {
    match doc.get_mut(field) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(TypeMismatch {
            field: field.to_string(),
            found: type_name(other),
        }),
    }
}

/// Removes `key` from the map under `field`, returning the removed value.
/// Absence of either level is not an error.
pub fn remove_nested_field(
    doc: &mut Document,
    field: &str,
    key: &str,
) -> Result<Option<Value>, TypeMismatch> {
    Ok(nested_map(doc, field)?.and_then(|map| map.remove(key)))
}

/// Best-effort string lookup, empty when missing or not a string.
pub fn str_field<'a>(doc: &'a Document, path: &[&str]) -> &'a str {
    let (last, parents) = match path.split_last() {
        Some(split) => split,
        None => return "",
    };

    let mut current = doc;
    for p in parents {
        match current.get(*p) {
            Some(Value::Object(map)) => current = map,
            _ => return "",
        }
    }

    current.get(*last).and_then(Value::as_str).unwrap_or_default()
}
