//! Species — leaf entity referenced by people.

use std::fmt;

use serde_json::{json, Value};

use crate::entity::{Entity, Jsonable};
use crate::error::RecordError;
use crate::reader::FieldReader;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub url: String,
    pub name: String,
    pub classification: Option<String>,
    pub designation: Option<String>,
    pub language: Option<String>,
}

impl Species {
    pub fn from_record(record: &Record) -> Result<Self, RecordError> {
        let r = FieldReader::new("Species", record);
        Ok(Self {
            url: r.required_str("url")?,
            name: r.required_str("name")?,
            classification: r.text("classification")?,
            designation: r.text("designation")?,
            language: r.text("language")?,
        })
    }
}

impl Jsonable for Species {
    fn jsonable(&self) -> Value {
        json!({
            "url": self.url,
            "name": self.name,
            "classification": self.classification,
            "designation": self.designation,
            "language": self.language,
        })
    }
}

impl Entity for Species {
    fn url(&self) -> &str {
        &self.url
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
