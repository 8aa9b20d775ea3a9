//! Droids and their instruction log.
//!
//! Instructions are opaque JSON objects (flight plans, people to locate,
//! star maps) appended over the droid's lifetime. They are stored already
//! JSON-safe and serialized as-is.

use std::fmt;

use serde_json::{json, Value};

use crate::entity::{Entity, Jsonable};
use crate::error::RecordError;
use crate::reader::FieldReader;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Droid {
    pub url: String,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub create_year: Option<String>,
    pub height: Option<f64>,
    pub mass: Option<f64>,
    pub equipment: Option<Vec<String>>,
    instructions: Vec<Record>,
}

impl Droid {
    pub fn from_record(record: &Record) -> Result<Self, RecordError> {
        let r = FieldReader::new("Droid", record);
        Ok(Self {
            url: r.required_str("url")?,
            name: r.required_str("name")?,
            model: r.text("model")?,
            manufacturer: r.text("manufacturer")?,
            create_year: r.text("create_year")?,
            height: r.float("height")?,
            mass: r.float("mass")?,
            equipment: r.list("equipment")?,
            instructions: Vec::new(),
        })
    }

    /// Append an instruction payload. Earlier entries are never changed.
    pub fn store_instructions(&mut self, instructions: Record) {
        self.instructions.push(instructions);
    }

    pub fn instructions(&self) -> &[Record] {
        &self.instructions
    }
}

impl Jsonable for Droid {
    fn jsonable(&self) -> Value {
        let instructions: Vec<Value> = self
            .instructions
            .iter()
            .cloned()
            .map(Value::Object)
            .collect();
        json!({
            "url": self.url,
            "name": self.name,
            "model": self.model,
            "manufacturer": self.manufacturer,
            "create_year": self.create_year,
            "height": self.height,
            "mass": self.mass,
            "equipment": self.equipment,
            "instructions": instructions,
        })
    }
}

impl Entity for Droid {
    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Droid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
