// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Configuration store
//!
//! A flat string-to-string store persisted as TOML at
//! `~/.shelp/config.toml`. The shell glue sources these values through
//! `shelp config get`, so everything is a string on both sides; the store
//! never interprets values.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Well-known configuration keys.
pub mod keys {
    /// Model name of the active completion model.
    pub const MODEL: &str = "model";
    /// Endpoint URL the shell glue posts completions to.
    pub const ENDPOINT: &str = "endpoint";
    /// Provider of the active model.
    pub const PROVIDER: &str = "provider";
    /// USD per prompt token, fixed-point with 8 decimals.
    pub const API_PROMPT_COST: &str = "api_prompt_cost";
    /// USD per completion token, fixed-point with 8 decimals.
    pub const API_COMPLETION_COST: &str = "api_completion_cost";
    /// Feed URL `shelp update` fetches when no --url is given.
    pub const MODELS_URL: &str = "models_url";
    /// RFC 3339 timestamp of the last successful feed update.
    pub const MODELS_UPDATED_AT: &str = "models_updated_at";
}

/// String key to string value store backed by a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    values: BTreeMap<String, String>,
    path: PathBuf,
}

impl ConfigStore {
    /// Get the shelp home directory (~/.shelp or $SHELP_HOME).
    pub fn shelp_home() -> PathBuf {
        if let Ok(home) = std::env::var("SHELP_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shelp")
    }

    /// Get the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::shelp_home().join("config.toml")
    }

    /// Get the models file path written by `shelp update`.
    pub fn models_path() -> PathBuf {
        Self::shelp_home().join("models.json")
    }

    /// Get the completion cache directory.
    pub fn cache_dir() -> PathBuf {
        Self::shelp_home().join("cache")
    }

    /// Ensure all required directories exist.
    pub fn ensure_directories() -> Result<()> {
        let mut dirs = vec![Self::shelp_home(), Self::cache_dir()];

        if let Some(parent) = Self::default_path().parent() {
            dirs.push(parent.to_path_buf());
        }

        for dir in dirs {
            if !dir.exists() {
                std::fs::create_dir_all(&dir)?;
            }
        }

        Ok(())
    }

    /// Load the store from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load the store from a specific path. A missing file is an empty store.
    pub fn load_from(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(ConfigStore {
            values,
            path: path.to_path_buf(),
        })
    }

    /// Write the store back to the path it was loaded from.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Entries in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
