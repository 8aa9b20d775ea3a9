//! Capabilities shared by every node in the entity graph.

use std::fmt;

use serde_json::Value;

/// Produce a JSON-safe snapshot.
///
/// Implementations build a fresh [`Value`] on every call; mutating the
/// result never reaches back into the entity.
pub trait Jsonable {
    fn jsonable(&self) -> Value;
}

/// A typed record with an identity URL and a display name.
pub trait Entity: Jsonable + fmt::Display {
    /// Identity URL, unique within a run.
    fn url(&self) -> &str;
    fn name(&self) -> &str;
}

impl<T: Jsonable> Jsonable for Option<T> {
    fn jsonable(&self) -> Value {
        self.as_ref().map_or(Value::Null, Jsonable::jsonable)
    }
}
