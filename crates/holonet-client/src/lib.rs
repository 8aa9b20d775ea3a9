//! I/O side of Holonet.
//!
//! Everything here talks to the outside world on behalf of
//! `holonet-logic`: the SWAPI HTTP API, the local Wookieepedia CSV/JSON
//! supplements, and the JSON documents a run produces.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Endpoint, timeout and directory configuration |
//! | [`fetch`] | `Fetch` trait, blocking SWAPI client, in-memory fetcher |
//! | [`sources`] | CSV/JSON readers and the JSON document writer |
//! | [`resolver`] | Fetch → merge → coerce → build, recursive for people |
//! | [`error`] | `ClientError` |

pub mod config;
pub mod error;
pub mod fetch;
pub mod resolver;
pub mod sources;

pub use config::ClientConfig;
pub use error::ClientError;
pub use fetch::{Fetch, MemoryFetcher, SwapiClient};
pub use resolver::{Reference, Resolver};
