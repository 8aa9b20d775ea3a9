//! Resource resolution — fetch, merge, coerce, build.
//!
//! The resolver owns a [`Fetch`] implementation and turns a remote
//! reference plus an optional supplemental record into a merged record,
//! a coerced record, or a finished entity. People are resolved
//! recursively: their homeworld and species are separate remote resources
//! that go through the same fetch → merge → coerce → build cycle before
//! being attached.
//!
//! Every step is sequential and blocking. Any failure aborts the step and
//! propagates to the caller; nothing partially built is returned.

use std::fmt;

use holonet_logic::coerce::coerce;
use holonet_logic::error::RecordError;
use holonet_logic::person::{homeworld_ref, species_ref, Person};
use holonet_logic::planet::Planet;
use holonet_logic::record::{into_record, match_supplement, merge, record_name, Record};
use holonet_logic::species::Species;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::fetch::Fetch;

/// Where a remote record lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a> {
    /// A resource URL, e.g. `https://swapi.py4e.com/api/planets/4/`.
    Url(&'a str),
    /// First hit of `?search=term` against a collection (`people`, `planets`, ...).
    Search { collection: &'a str, term: &'a str },
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Search { collection, term } => write!(f, "{collection}?search={term}"),
        }
    }
}

pub struct Resolver<F> {
    fetcher: F,
    base_url: String,
}

impl<F: Fetch> Resolver<F> {
    pub fn new(fetcher: F, config: &ClientConfig) -> Self {
        Self::with_base_url(fetcher, config.base_url())
    }

    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a collection under the configured endpoint.
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}/", self.base_url, collection)
    }

    /// Fetch a single resource by URL.
    pub fn get_resource(&self, url: &str) -> Result<Record, ClientError> {
        let body = self.fetcher.fetch(url, &[])?;
        into_record(body).map_err(|e| ClientError::UnexpectedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Search a collection and return the first result.
    pub fn search(&self, collection: &str, term: &str) -> Result<Record, ClientError> {
        let url = self.collection_url(collection);
        let body = self.fetcher.fetch(&url, &[("search", term)])?;

        let results = match body.get("results") {
            Some(Value::Array(results)) => results,
            _ => {
                return Err(ClientError::UnexpectedResponse {
                    url,
                    reason: "search response has no `results` list".to_string(),
                })
            }
        };
        let Some(first) = results.first() else {
            return Err(ClientError::NoResults {
                collection: collection.to_string(),
                query: term.to_string(),
            });
        };
        if results.len() > 1 {
            log::debug!(
                "{} results for {}?search={}, taking the first",
                results.len(),
                collection,
                term
            );
        }
        into_record(first.clone()).map_err(|e| ClientError::UnexpectedResponse {
            url,
            reason: e.to_string(),
        })
    }

    pub fn fetch_reference(&self, reference: Reference<'_>) -> Result<Record, ClientError> {
        match reference {
            Reference::Url(url) => self.get_resource(url),
            Reference::Search { collection, term } => self.search(collection, term),
        }
    }

    /// Fetch `reference` and lay `supplement` over it. Values stay raw.
    pub fn resolve(
        &self,
        reference: Reference<'_>,
        supplement: Option<&Record>,
    ) -> Result<Record, ClientError> {
        let remote = self.fetch_reference(reference)?;
        if supplement.is_some() {
            log::debug!("merging supplemental record into {}", reference);
        }
        Ok(merge(&remote, supplement))
    }

    /// [`resolve`](Self::resolve), then coerce.
    pub fn resolve_clean(
        &self,
        reference: Reference<'_>,
        supplement: Option<&Record>,
    ) -> Result<Record, ClientError> {
        let merged = self.resolve(reference, supplement)?;
        Ok(coerce(&merged)?)
    }

    /// Resolve, coerce and hand the record to an entity factory.
    pub fn build<T>(
        &self,
        reference: Reference<'_>,
        supplement: Option<&Record>,
        factory: impl FnOnce(&Record) -> Result<T, RecordError>,
    ) -> Result<T, ClientError> {
        let record = self.resolve_clean(reference, supplement)?;
        Ok(factory(&record)?)
    }

    /// Fetch `reference`, merge the record from `source` that shares its
    /// name, and coerce.
    ///
    /// The supplement is picked after the fetch, from the fetched name. No
    /// match means the remote record is used on its own.
    pub fn resolve_matched(
        &self,
        reference: Reference<'_>,
        source: &[Record],
    ) -> Result<Record, ClientError> {
        let remote = self.fetch_reference(reference)?;
        let supplement = match_supplement(&remote, source);
        match supplement {
            Some(_) => log::debug!("merging supplemental record into {}", reference),
            None => log::warn!(
                "no supplemental record for {}",
                record_name(&remote).unwrap_or("unnamed record")
            ),
        }
        Ok(coerce(&merge(&remote, supplement))?)
    }

    /// [`resolve_matched`](Self::resolve_matched), then build.
    pub fn build_matched<T>(
        &self,
        reference: Reference<'_>,
        source: &[Record],
        factory: impl FnOnce(&Record) -> Result<T, RecordError>,
    ) -> Result<T, ClientError> {
        let record = self.resolve_matched(reference, source)?;
        Ok(factory(&record)?)
    }

    /// Fetch a planet, merging the supplemental planet with the same name.
    pub fn resolve_planet(&self, url: &str, planets: &[Record]) -> Result<Planet, ClientError> {
        self.build_matched(Reference::Url(url), planets, Planet::from_record)
    }

    pub fn resolve_species(&self, url: &str) -> Result<Species, ClientError> {
        let record = coerce(&self.get_resource(url)?)?;
        Ok(Species::from_record(&record)?)
    }

    /// Build a person from a merged, coerced record and attach whatever
    /// homeworld and species it references.
    pub fn create_person(&self, record: &Record, planets: &[Record]) -> Result<Person, ClientError> {
        let mut person = Person::from_record(record)?;

        if let Some(url) = homeworld_ref(record) {
            person.set_homeworld(self.resolve_planet(url, planets)?);
        }
        if let Some(url) = species_ref(record) {
            person.set_species(self.resolve_species(url)?);
        }

        log::debug!(
            "built {} (homeworld: {}, species: {})",
            person.name,
            person.homeworld.as_ref().map_or("-", |p| p.name.as_str()),
            person.species.as_ref().map_or("-", |s| s.name.as_str()),
        );
        Ok(person)
    }

    /// Fetch a person, merge its supplemental record from `people`, then
    /// link homeworld and species.
    pub fn resolve_person(
        &self,
        reference: Reference<'_>,
        people: &[Record],
        planets: &[Record],
    ) -> Result<Person, ClientError> {
        let record = self.resolve_matched(reference, people)?;
        self.create_person(&record, planets)
    }
}
