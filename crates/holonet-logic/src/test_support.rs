//! Minimal entity builders shared by unit tests.

use crate::droid::Droid;
use crate::person::Person;
use crate::record::{into_record, Record};
use serde_json::json;

pub(crate) fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

pub(crate) fn person(name: &str) -> Person {
    Person::from_record(&person_record(name)).unwrap()
}

pub(crate) fn person_record(name: &str) -> Record {
    into_record(json!({
        "url": format!("https://swapi.py4e.com/api/people/{}/", slug(name)),
        "name": name,
        "birth_year": null,
        "height": 1.7,
        "mass": null,
    }))
    .unwrap()
}

pub(crate) fn droid(name: &str) -> Droid {
    Droid::from_record(
        &into_record(json!({
            "url": format!("https://swapi.py4e.com/api/people/{}/", slug(name)),
            "name": name,
            "model": "astromech",
            "manufacturer": null,
            "create_year": null,
            "height": 0.67,
            "mass": 18.0,
            "equipment": ["Arc welder"],
        }))
        .unwrap(),
    )
    .unwrap()
}
