// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Completion cache
//!
//! One JSON file per cached completion under `~/.shelp/cache/`, keyed by a
//! SHA-256 of the model and the input line. The shell glue checks here
//! before paying for an API call; entries never expire, `clear` is the only
//! removal.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::config::ConfigStore;
use crate::error::Result;

/// A cached completion with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub model: String,
    pub input: String,
    pub completion: String,
    pub created_at: DateTime<Utc>,
}

/// Cache summary for `shelp cache stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub total_bytes: u64,
}

/// File-per-entry completion cache.
pub struct CompletionCache {
    dir: PathBuf,
}

impl CompletionCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CompletionCache { dir: dir.into() }
    }

    /// The cache under the shelp home directory.
    pub fn open_default() -> Self {
        Self::new(ConfigStore::cache_dir())
    }

    /// Entry path for a (model, input) pair.
    ///
    /// The model is part of the hash: the same input against a different
    /// model is a different completion.
    fn entry_path(&self, model: &str, input: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(model.as_bytes());
        hasher.update(b"\n");
        hasher.update(input.as_bytes());
        self.dir.join(format!("{:x}.json", hasher.finalize()))
    }

    /// Look up a completion. Corrupt entries count as misses.
    pub fn get(&self, model: &str, input: &str) -> Result<Option<String>> {
        let path = self.entry_path(model, input);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str::<CacheEntry>(&content) {
            Ok(entry) => Ok(Some(entry.completion)),
            Err(err) => {
                warn!("ignoring corrupt cache entry {}: {err}", path.display());
                Ok(None)
            }
        }
    }

    /// Store a completion, overwriting any previous entry for the pair.
    pub fn put(&self, model: &str, input: &str, completion: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let entry = CacheEntry {
            model: model.to_string(),
            input: input.to_string(),
            completion: completion.to_string(),
            created_at: Utc::now(),
        };
        let path = self.entry_path(model, input);
        fs::write(&path, serde_json::to_string_pretty(&entry)?)?;
        Ok(())
    }

    /// Remove every entry, returning how many were deleted.
    pub fn clear(&self) -> Result<usize> {
        if !self.dir.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for dir_entry in fs::read_dir(&self.dir)? {
            let path = dir_entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Entry count and on-disk size.
    pub fn stats(&self) -> Result<CacheStats> {
        if !self.dir.exists() {
            return Ok(CacheStats {
                entries: 0,
                total_bytes: 0,
            });
        }

        let mut entries = 0;
        let mut total_bytes = 0;
        for dir_entry in fs::read_dir(&self.dir)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                entries += 1;
                total_bytes += dir_entry.metadata()?.len();
            }
        }
        Ok(CacheStats {
            entries,
            total_bytes,
        })
    }
}
