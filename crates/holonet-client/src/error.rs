//! Errors raised while fetching, reading and resolving records.

use std::path::PathBuf;

use holonet_logic::error::RecordError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connect, timeout, body decode).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A search query matched nothing.
    #[error("no {collection} found for search {query:?}")]
    NoResults { collection: String, query: String },

    /// The response body was JSON but not the expected shape.
    #[error("unexpected response from {url}: {reason}")]
    UnexpectedResponse { url: String, reason: String },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A fetched or local record could not be coerced or built.
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ConfigError>),
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
