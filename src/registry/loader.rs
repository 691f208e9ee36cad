// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model registry
//!
//! An ordered key to record map built from a feed source. Feed order is
//! display order: the menu, `list`, and positional resolution all walk the
//! same `display_order` sequence, which is never sorted or reordered after
//! load.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::RegistryError;
use crate::registry::key::ModelKey;
use crate::registry::schema::ModelRecord;
use crate::registry::source::ModelSource;

/// Ordered map of model keys to validated records.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    entries: HashMap<ModelKey, ModelRecord>,
    order: Vec<ModelKey>,
    loaded: bool,
}

impl ModelRegistry {
    /// An empty, not-yet-loaded registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load entries from a source, in feed order.
    ///
    /// Idempotent: once a load has succeeded, further calls return without
    /// touching the source. Incomplete descriptors, entries whose key cannot
    /// be encoded, and duplicate keys are skipped with a warning; only a
    /// source failure aborts the load, leaving the registry unchanged and
    /// still unloaded.
    pub fn load(&mut self, source: &dyn ModelSource) -> Result<(), RegistryError> {
        if self.loaded {
            debug!("model registry already loaded, skipping reload");
            return Ok(());
        }

        let descriptors = source.descriptors()?;
        let total = descriptors.len();

        for descriptor in descriptors {
            let provider = descriptor.provider.clone();
            let model = descriptor.model.clone();
            let Some(record) = descriptor.into_record() else {
                warn!(
                    "skipping incomplete model feed entry (provider {:?}, model {:?})",
                    provider, model
                );
                continue;
            };
            let key = match ModelKey::encode(&record.provider, &record.model) {
                Ok(key) => key,
                Err(err) => {
                    warn!("skipping model feed entry: {err}");
                    continue;
                }
            };
            if self.entries.contains_key(&key) {
                warn!("skipping duplicate model feed entry {key}");
                continue;
            }
            self.order.push(key.clone());
            self.entries.insert(key, record);
        }

        self.loaded = true;
        debug!("loaded {} of {} model feed entries", self.order.len(), total);
        Ok(())
    }

    /// Drop all entries and the loaded flag so the next `load` re-reads.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.loaded = false;
    }

    /// Exact-match lookup. No normalization, no fuzzy fallback.
    pub fn lookup(&self, key: &ModelKey) -> Option<&ModelRecord> {
        self.entries.get(key)
    }

    /// Keys in feed order. Stable across calls until `reset`.
    pub fn display_order(&self) -> &[ModelKey] {
        &self.order
    }

    /// Entries in feed order.
    pub fn iter_display(&self) -> impl Iterator<Item = (&ModelKey, &ModelRecord)> {
        // every key in order has an entry, inserted together in load
        self.order.iter().filter_map(|k| Some((k, self.entries.get(k)?)))
    }

    /// Keys of one provider, in feed order.
    pub fn keys_for_provider(&self, provider: &str) -> Vec<&ModelKey> {
        self.order
            .iter()
            .filter(|k| k.provider() == provider)
            .collect()
    }

    /// Providers in first-seen feed order.
    pub fn providers(&self) -> Vec<&str> {
        let mut providers: Vec<&str> = Vec::new();
        for key in &self.order {
            if !providers.contains(&key.provider()) {
                providers.push(key.provider());
            }
        }
        providers
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
