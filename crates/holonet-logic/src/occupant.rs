//! Anyone who can crew a ship or ride along: a person or a droid.

use std::fmt;

use serde_json::Value;

use crate::droid::Droid;
use crate::entity::{Entity, Jsonable};
use crate::person::Person;

#[derive(Debug, Clone, PartialEq)]
pub enum Occupant {
    Person(Person),
    Droid(Droid),
}

impl From<Person> for Occupant {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<Droid> for Occupant {
    fn from(droid: Droid) -> Self {
        Self::Droid(droid)
    }
}

impl Jsonable for Occupant {
    fn jsonable(&self) -> Value {
        match self {
            Self::Person(p) => p.jsonable(),
            Self::Droid(d) => d.jsonable(),
        }
    }
}

impl Entity for Occupant {
    fn url(&self) -> &str {
        match self {
            Self::Person(p) => p.url(),
            Self::Droid(d) => d.url(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Person(p) => p.name(),
            Self::Droid(d) => d.name(),
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
