//! Remote resource fetch.
//!
//! [`Fetch`] is the seam between the resolver and the network. The
//! production implementation, [`SwapiClient`], issues blocking HTTP GETs
//! with a bounded timeout and no retries. [`MemoryFetcher`] serves canned
//! responses for tests and offline runs.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Fetch one JSON document.
///
/// `query` is appended as URL query parameters; an empty slice means a
/// plain resource lookup.
pub trait Fetch {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, ClientError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        (**self).fetch(url, query)
    }
}

/// Blocking SWAPI client.
pub struct SwapiClient {
    http: reqwest::blocking::Client,
}

impl SwapiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("holonet/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl Fetch for SwapiClient {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        let url = with_trailing_slash(url);
        log::debug!("GET {} {:?}", url, query);

        let response = self.http.get(&url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url,
                status: status.as_u16(),
            });
        }
        Ok(response.json()?)
    }
}

/// SWAPI resource URLs end in `/`; requests without it get redirected.
fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

/// Canned responses keyed by URL (and search term).
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, Value>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for a plain lookup of `url`.
    pub fn with_resource(mut self, url: &str, body: Value) -> Self {
        self.responses.insert(Self::key(url, &[]), body);
        self
    }

    /// Serve `body` for `url?search=term`.
    pub fn with_search(mut self, url: &str, term: &str, body: Value) -> Self {
        self.responses
            .insert(Self::key(url, &[("search", term)]), body);
        self
    }

    fn key(url: &str, query: &[(&str, &str)]) -> String {
        let mut key = with_trailing_slash(url);
        for (i, (k, v)) in query.iter().enumerate() {
            key.push(if i == 0 { '?' } else { '&' });
            key.push_str(k);
            key.push('=');
            key.push_str(v);
        }
        key
    }
}

impl Fetch for MemoryFetcher {
    fn fetch(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, ClientError> {
        let key = Self::key(url, query);
        self.responses
            .get(&key)
            .cloned()
            .ok_or(ClientError::Status {
                url: key,
                status: 404,
            })
    }
}
