//! Run-scoped identity registry.
//!
//! Every composed entity registers its URL. The same record may show up in
//! several scenarios (BB-8 flies to Jakku, then escapes it), so registering
//! the same URL under the same name is fine; a URL claimed by a different
//! name means two sources disagree about identity.

use std::collections::HashMap;

use crate::entity::Entity;
use crate::error::RecordError;

#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    names: HashMap<String, String>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entity: &impl Entity) -> Result<(), RecordError> {
        self.register_url(entity.url(), entity.name())
    }

    pub fn register_url(&mut self, url: &str, name: &str) -> Result<(), RecordError> {
        match self.names.get(url) {
            Some(existing) if existing != name => Err(RecordError::DuplicateIdentity {
                url: url.to_string(),
                existing: existing.clone(),
                incoming: name.to_string(),
            }),
            Some(_) => Ok(()),
            None => {
                self.names.insert(url.to_string(), name.to_string());
                Ok(())
            }
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.names.contains_key(url)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
