// Typed access to loosely shaped store records.
//
// Absent and null fields are treated alike. A field holding the wrong JSON type is an
// error rather than a default.

use crate::shared::infrastructure::document_store::Record;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {id}: missing field `{field}`")]
    MissingField { id: String, field: &'static str },

    #[error("record {id}: field `{field}` has an invalid value")]
    InvalidField { id: String, field: &'static str },
}

fn missing(id: &str, field: &'static str) -> RecordError {
    RecordError::MissingField {
        id: id.to_string(),
        field,
    }
}

fn invalid(id: &str, field: &'static str) -> RecordError {
    RecordError::InvalidField {
        id: id.to_string(),
        field,
    }
}

pub fn required_str(id: &str, fields: &Record, field: &'static str) -> Result<String, RecordError> {
    optional_str(id, fields, field)?
        .filter(|value| !value.is_empty())
        .ok_or_else(|| match fields.get(field) {
            Some(Value::String(_)) => invalid(id, field),
            _ => missing(id, field),
        })
}

pub fn optional_str(
    id: &str,
    fields: &Record,
    field: &'static str,
) -> Result<Option<String>, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(invalid(id, field)),
    }
}

pub fn required_f64(id: &str, fields: &Record, field: &'static str) -> Result<f64, RecordError> {
    optional_f64(id, fields, field)?.ok_or_else(|| missing(id, field))
}

pub fn optional_f64(
    id: &str,
    fields: &Record,
    field: &'static str,
) -> Result<Option<f64>, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number.as_f64().map(Some).ok_or_else(|| invalid(id, field)),
        Some(_) => Err(invalid(id, field)),
    }
}

pub fn optional_str_list(
    id: &str,
    fields: &Record,
    field: &'static str,
) -> Result<Option<Vec<String>>, RecordError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(|| invalid(id, field)))
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(invalid(id, field)),
    }
}
