//! Planets — homeworlds and mission destinations.

use std::fmt;

use serde_json::{json, Value};

use crate::entity::{Entity, Jsonable};
use crate::error::RecordError;
use crate::reader::FieldReader;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub url: String,
    pub name: String,
    pub region: Option<String>,
    pub sector: Option<String>,
    pub suns: Option<i64>,
    pub moons: Option<i64>,
    pub orbital_period_days: Option<f64>,
    pub diameter_km: Option<i64>,
    pub gravity: Option<String>,
    pub climate: Option<Vec<String>>,
    pub terrain: Option<Vec<String>>,
    /// `None` when the population is unknown.
    pub population: Option<i64>,
}

impl Planet {
    /// Build a planet from a merged, coerced record.
    pub fn from_record(record: &Record) -> Result<Self, RecordError> {
        let r = FieldReader::new("Planet", record);
        Ok(Self {
            url: r.required_str("url")?,
            name: r.required_str("name")?,
            region: r.text("region")?,
            sector: r.text("sector")?,
            suns: r.int("suns")?,
            moons: r.int("moons")?,
            orbital_period_days: r.float("orbital_period_days")?,
            diameter_km: r.int("diameter_km")?,
            gravity: r.text("gravity")?,
            climate: r.list("climate")?,
            terrain: r.list("terrain")?,
            population: r.int("population")?,
        })
    }
}

impl Jsonable for Planet {
    fn jsonable(&self) -> Value {
        json!({
            "url": self.url,
            "name": self.name,
            "region": self.region,
            "sector": self.sector,
            "suns": self.suns,
            "moons": self.moons,
            "orbital_period_days": self.orbital_period_days,
            "diameter_km": self.diameter_km,
            "gravity": self.gravity,
            "climate": self.climate,
            "terrain": self.terrain,
            "population": self.population,
        })
    }
}

impl Entity for Planet {
    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
