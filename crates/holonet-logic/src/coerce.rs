//! Type coercion — raw string fields to typed JSON values.
//!
//! SWAPI and the Wookieepedia CSV exports deliver every attribute as a
//! string. [`coerce`] walks a record once and, per key:
//! - empty sentinels (`"n/a"`, `"none"`, `"unknown"`, `""`) become `null`
//! - float fields parse to JSON floats
//! - integer fields parse to JSON integers
//! - list fields split on `", "`
//! - everything else, and every non-string value, passes through
//!
//! Already-typed values are left alone, so coercion is idempotent.

use serde_json::{Number, Value};

use crate::error::RecordError;
use crate::fields::{is_empty_sentinel, FieldKind, LIST_DELIMITER};
use crate::record::Record;

/// Coerce every field of `record`, returning a new record.
///
/// The input is not modified. The first field that fails to parse aborts
/// the whole record.
pub fn coerce(record: &Record) -> Result<Record, RecordError> {
    let mut cleaned = Record::new();
    for (key, value) in record {
        cleaned.insert(key.clone(), coerce_field(key, value)?);
    }
    Ok(cleaned)
}

/// Coerce a single field value according to its key.
pub fn coerce_field(field: &str, value: &Value) -> Result<Value, RecordError> {
    let Value::String(raw) = value else {
        return Ok(value.clone());
    };

    if is_empty_sentinel(raw) {
        return Ok(Value::Null);
    }

    match FieldKind::of(field) {
        FieldKind::Float => parse_float(field, raw),
        FieldKind::Int => parse_int(field, raw),
        FieldKind::List => Ok(Value::Array(
            raw.split(LIST_DELIMITER)
                .map(|item| Value::String(item.to_string()))
                .collect(),
        )),
        FieldKind::Text => Ok(value.clone()),
    }
}

fn parse_float(field: &str, raw: &str) -> Result<Value, RecordError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| malformed(field, raw, FieldKind::Float))
}

fn parse_int(field: &str, raw: &str) -> Result<Value, RecordError> {
    raw.trim()
        .parse::<i64>()
        .map(Value::from)
        .map_err(|_| malformed(field, raw, FieldKind::Int))
}

fn malformed(field: &str, raw: &str, kind: FieldKind) -> RecordError {
    RecordError::Malformed {
        field: field.to_string(),
        raw: raw.to_string(),
        expected: kind.label(),
    }
}
