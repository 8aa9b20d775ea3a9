//! People and their homeworld/species links.
//!
//! A person is built from its own record first; homeworld and species are
//! separate remote resources that the resolver fetches lazily and attaches
//! afterwards. [`homeworld_ref`] and [`species_ref`] expose what the record
//! points at so the resolver knows what to fetch.

use std::fmt;

use serde_json::{json, Value};

use crate::entity::{Entity, Jsonable};
use crate::error::RecordError;
use crate::planet::Planet;
use crate::reader::FieldReader;
use crate::record::Record;
use crate::species::Species;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub url: String,
    pub name: String,
    pub birth_year: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub homeworld: Option<Planet>,
    pub species: Option<Species>,
}

impl Person {
    /// Build an unlinked person from a merged, coerced record.
    pub fn from_record(record: &Record) -> Result<Self, RecordError> {
        let r = FieldReader::new("Person", record);
        Ok(Self {
            url: r.required_str("url")?,
            name: r.required_str("name")?,
            birth_year: r.text("birth_year")?,
            height: r.float("height")?,
            mass: r.float("mass")?,
            homeworld: None,
            species: None,
        })
    }

    pub fn set_homeworld(&mut self, planet: Planet) {
        self.homeworld = Some(planet);
    }

    pub fn set_species(&mut self, species: Species) {
        self.species = Some(species);
    }
}

/// Homeworld URL referenced by a person record, if any.
pub fn homeworld_ref(record: &Record) -> Option<&str> {
    record
        .get("homeworld")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
}

/// Species URL referenced by a person record, if any.
///
/// SWAPI lists species as an array; supplemental records sometimes carry a
/// single URL. Only the first entry is followed.
pub fn species_ref(record: &Record) -> Option<&str> {
    match record.get("species")? {
        Value::String(url) if !url.is_empty() => Some(url.as_str()),
        Value::Array(urls) => urls.first().and_then(Value::as_str),
        _ => None,
    }
}

impl Jsonable for Person {
    fn jsonable(&self) -> Value {
        json!({
            "url": self.url,
            "name": self.name,
            "birth_year": self.birth_year,
            "height": self.height,
            "mass": self.mass,
            "homeworld": self.homeworld.jsonable(),
            "species": self.species.jsonable(),
        })
    }
}

impl Entity for Person {
    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
