//! Pure entity-graph logic for Holonet.
//!
//! This crate contains everything that turns loosely typed SWAPI and
//! Wookieepedia records into a linked, typed entity graph, independent of
//! any network transport or filesystem. Functions take plain records and
//! return entities or errors, making them unit-testable without fixtures.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`fields`] | Field-name classification (float / int / list) and empty sentinels |
//! | [`coerce`] | Raw string → typed value coercion over a whole record |
//! | [`record`] | `Record` alias, last-writer-wins merge, supplemental lookup |
//! | [`error`] | `RecordError` for malformed, missing and mistyped fields |
//! | [`entity`] | `Jsonable` / `Entity` capabilities shared by every node |
//! | [`planet`] | Planet entity and factory |
//! | [`species`] | Species entity and factory |
//! | [`person`] | Person entity, factory and homeworld/species references |
//! | [`droid`] | Droid entity with append-only instructions |
//! | [`starship`] | Starship entity with crew and passenger slots |
//! | [`occupant`] | Person-or-droid variant accepted by crews and passenger lists |
//! | [`crew`] | Role-keyed crew composite |
//! | [`passengers`] | Name-keyed, order-preserving passenger composite |
//! | [`registry`] | Run-scoped identity URL registry |

pub mod coerce;
pub mod crew;
pub mod droid;
pub mod entity;
pub mod error;
pub mod fields;
pub mod occupant;
pub mod passengers;
pub mod person;
pub mod planet;
pub mod record;
pub mod registry;
pub mod species;
pub mod starship;

mod reader;
#[cfg(test)]
mod test_support;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::coerce::coerce;
    pub use crate::crew::Crew;
    pub use crate::droid::Droid;
    pub use crate::entity::{Entity, Jsonable};
    pub use crate::error::RecordError;
    pub use crate::occupant::Occupant;
    pub use crate::passengers::Passengers;
    pub use crate::person::Person;
    pub use crate::planet::Planet;
    pub use crate::record::{merge, Record};
    pub use crate::species::Species;
    pub use crate::starship::Starship;
}
