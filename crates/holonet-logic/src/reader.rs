//! Typed field access for entity factories.

use serde_json::Value;

use crate::error::RecordError;
use crate::record::Record;

/// Reads declared fields out of a coerced record on behalf of one entity
/// kind, turning absent keys and type mismatches into [`RecordError`]s.
pub(crate) struct FieldReader<'a> {
    entity: &'static str,
    record: &'a Record,
}

impl<'a> FieldReader<'a> {
    pub fn new(entity: &'static str, record: &'a Record) -> Self {
        Self { entity, record }
    }

    fn value(&self, field: &'static str) -> Result<&'a Value, RecordError> {
        self.record.get(field).ok_or(RecordError::MissingField {
            entity: self.entity,
            field,
        })
    }

    fn wrong_type(&self, field: &'static str, expected: &'static str) -> RecordError {
        RecordError::WrongType {
            entity: self.entity,
            field,
            expected,
        }
    }

    /// Non-null string.
    pub fn required_str(&self, field: &'static str) -> Result<String, RecordError> {
        match self.value(field)? {
            Value::String(s) => Ok(s.clone()),
            Value::Null => Err(RecordError::MissingField {
                entity: self.entity,
                field,
            }),
            _ => Err(self.wrong_type(field, "a string")),
        }
    }

    /// Descriptive text. Any other JSON type is refused rather than
    /// rendered, so serialized output keeps the record's value types.
    pub fn text(&self, field: &'static str) -> Result<Option<String>, RecordError> {
        match self.value(field)? {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.wrong_type(field, "a string or null")),
        }
    }

    pub fn float(&self, field: &'static str) -> Result<Option<f64>, RecordError> {
        match self.value(field)? {
            Value::Null => Ok(None),
            Value::Number(n) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.wrong_type(field, "a float or null")),
            _ => Err(self.wrong_type(field, "a float or null")),
        }
    }

    pub fn int(&self, field: &'static str) -> Result<Option<i64>, RecordError> {
        match self.value(field)? {
            Value::Null => Ok(None),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(Some(i));
                }
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(Some(f as i64)),
                    _ => Err(self.wrong_type(field, "an integer or null")),
                }
            }
            _ => Err(self.wrong_type(field, "an integer or null")),
        }
    }

    pub fn list(&self, field: &'static str) -> Result<Option<Vec<String>>, RecordError> {
        match self.value(field)? {
            Value::Null => Ok(None),
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| self.wrong_type(field, "a list of strings"))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            _ => Err(self.wrong_type(field, "a list of strings or null")),
        }
    }
}
