//! Starships and their crew/passenger slots.
//!
//! `crew` and `passengers` are the ship's *rated* capacities from the data
//! sources. The people actually aboard live in `crew_members` and
//! `passengers_on_board`, both empty until a composition step fills them.

use std::fmt;

use serde_json::{json, Value};

use crate::crew::Crew;
use crate::entity::{Entity, Jsonable};
use crate::error::RecordError;
use crate::passengers::Passengers;
use crate::reader::FieldReader;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Starship {
    pub url: String,
    pub name: String,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    pub manufacturer: Option<String>,
    pub length: Option<f64>,
    pub max_atmosphering_speed: Option<i64>,
    pub hyperdrive_rating: Option<f64>,
    /// Megalights per hour.
    pub mglt: Option<i64>,
    pub armament: Option<Vec<String>>,
    pub crew: Option<i64>,
    pub passengers: Option<i64>,
    pub cargo_capacity: Option<i64>,
    pub consumables: Option<String>,
    crew_members: Option<Crew>,
    passengers_on_board: Option<Passengers>,
}

impl Starship {
    pub fn from_record(record: &Record) -> Result<Self, RecordError> {
        let r = FieldReader::new("Starship", record);
        Ok(Self {
            url: r.required_str("url")?,
            name: r.required_str("name")?,
            model: r.text("model")?,
            starship_class: r.text("starship_class")?,
            manufacturer: r.text("manufacturer")?,
            length: r.float("length")?,
            max_atmosphering_speed: r.int("max_atmosphering_speed")?,
            hyperdrive_rating: r.float("hyperdrive_rating")?,
            mglt: r.int("MGLT")?,
            armament: r.list("armament")?,
            crew: r.int("crew")?,
            passengers: r.int("passengers")?,
            cargo_capacity: r.int("cargo_capacity")?,
            consumables: r.text("consumables")?,
            crew_members: None,
            passengers_on_board: None,
        })
    }

    /// Put a crew aboard, replacing any previous crew.
    pub fn assign_crew_members(&mut self, crew: Crew) {
        self.crew_members = Some(crew);
    }

    /// Board passengers if the ship is rated to carry any.
    ///
    /// Returns `false` and leaves the ship unchanged when the rated
    /// passenger count is zero or unknown.
    pub fn add_passengers(&mut self, passengers: Passengers) -> bool {
        if self.passengers.unwrap_or(0) > 0 {
            self.passengers_on_board = Some(passengers);
            true
        } else {
            false
        }
    }

    pub fn crew_members(&self) -> Option<&Crew> {
        self.crew_members.as_ref()
    }

    pub fn passengers_on_board(&self) -> Option<&Passengers> {
        self.passengers_on_board.as_ref()
    }
}

impl Jsonable for Starship {
    fn jsonable(&self) -> Value {
        json!({
            "url": self.url,
            "name": self.name,
            "model": self.model,
            "starship_class": self.starship_class,
            "manufacturer": self.manufacturer,
            "length": self.length,
            "max_atmosphering_speed": self.max_atmosphering_speed,
            "hyperdrive_rating": self.hyperdrive_rating,
            "MGLT": self.mglt,
            "armament": self.armament,
            "crew": self.crew,
            "crew_members": self.crew_members.jsonable(),
            "passengers": self.passengers,
            "passengers_on_board": self.passengers_on_board.jsonable(),
            "cargo_capacity": self.cargo_capacity,
            "consumables": self.consumables,
        })
    }
}

impl Entity for Starship {
    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ships are referred to by model, falling back to name.
impl fmt::Display for Starship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model.as_deref().unwrap_or(&self.name))
    }
}
