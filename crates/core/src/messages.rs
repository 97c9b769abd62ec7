//! Injected message table for validation codes.
//!
//! Validation routines emit stable code keys; the table maps each key to the
//! text surfaced to the caller. The reference wiring is the identity mapping,
//! so a presentation shell can swap in a real localization source without
//! touching the services.

use std::collections::HashMap;
use std::sync::Arc;

/// Code-key to message mapping consumed by validation routines.
pub trait MessageTable: Send + Sync {
    fn resolve(&self, key: &str) -> String;
}

impl<M> MessageTable for Arc<M>
where
    M: MessageTable + ?Sized,
{
    fn resolve(&self, key: &str) -> String {
        (**self).resolve(key)
    }
}

/// Identity mapping: every code resolves to its own key.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityMessages;

impl MessageTable for IdentityMessages {
    fn resolve(&self, key: &str) -> String {
        key.to_owned()
    }
}

/// Map-backed table; unknown keys fall back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct MapMessages {
    entries: HashMap<String, String>,
}

impl MapMessages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries.insert(key.into(), message.into());
        self
    }
}

impl MessageTable for MapMessages {
    fn resolve(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}
