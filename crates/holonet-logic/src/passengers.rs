//! Passenger manifests keyed by normalized occupant name.
//!
//! Keys are the lowercased name with spaces replaced by underscores
//! (`"Han Solo"` → `han_solo`). Two occupants with the same key collide:
//! the later one overwrites the earlier value in place, keeping the
//! original position. The collision is logged as a warning, never an error.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::entity::{Entity, Jsonable};
use crate::occupant::Occupant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passengers {
    occupants: IndexMap<String, Occupant>,
}

/// Manifest key for an occupant name.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

impl Passengers {
    pub fn new<I, O>(occupants: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Occupant>,
    {
        let mut passengers = Self::default();
        for occupant in occupants {
            passengers.board(occupant);
        }
        passengers
    }

    /// Add one occupant, overwriting any earlier occupant with the same key.
    pub fn board(&mut self, occupant: impl Into<Occupant>) {
        let occupant = occupant.into();
        let key = normalize_name(occupant.name());
        if let Some(previous) = self.occupants.insert(key, occupant) {
            log::warn!("passenger {} overwritten on manifest", previous.name());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Occupant> {
        self.occupants.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.occupants.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

/// Serializes as a list in boarding order, not as a keyed mapping.
impl Jsonable for Passengers {
    fn jsonable(&self) -> Value {
        Value::Array(self.occupants.values().map(Jsonable::jsonable).collect())
    }
}

impl fmt::Display for Passengers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, occupant) in self.occupants.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(occupant.name())?;
        }
        Ok(())
    }
}
