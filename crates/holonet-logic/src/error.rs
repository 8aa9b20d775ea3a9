//! Errors raised while coercing records and building entities.

use thiserror::Error;

/// A record could not be turned into a typed value or entity.
///
/// Every variant is fatal for the record it came from; no partially
/// built entity is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// A raw string did not parse as its declared type.
    #[error("malformed field `{field}`: cannot parse {raw:?} as {expected}")]
    Malformed {
        field: String,
        raw: String,
        expected: &'static str,
    },

    /// A factory was handed a record without a mandatory key, or with a
    /// null where a value is required.
    #[error("{entity} record is missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A present field holds the wrong JSON type after coercion.
    #[error("{entity} field `{field}` should be {expected}")]
    WrongType {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// A payload that must be a JSON object was something else.
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A payload that must be a list of objects was something else.
    #[error("expected a JSON array of objects, found {found}")]
    NotAList { found: &'static str },

    /// Two different entities claimed the same identity URL.
    #[error("identity {url} already belongs to {existing:?}, cannot reassign to {incoming:?}")]
    DuplicateIdentity {
        url: String,
        existing: String,
        incoming: String,
    },
}

/// Short JSON type name for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
