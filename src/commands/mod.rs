// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Subcommand implementations
//!
//! One module per subcommand, each with an `execute` entry point. The
//! registry helper here decides which model feed a command sees; every
//! command that touches models goes through it so they all agree.

pub mod cache;
pub mod config;
pub mod list;
pub mod model;
pub mod update;

use std::path::Path;

use crate::config::ConfigStore;
use crate::error::Result;
use crate::registry::{builtin_source, FileSource, ModelRegistry};

/// Load the model registry from the first available feed.
///
/// An explicit path is authoritative: if it cannot be read, the command
/// fails instead of quietly showing other models. Without one, the
/// downloaded feed under the shelp home is used when present, and the
/// builtin catalog otherwise.
pub fn open_registry(models_file: Option<&Path>) -> Result<ModelRegistry> {
    let mut registry = ModelRegistry::new();

    if let Some(path) = models_file {
        registry.load(&FileSource::new(path))?;
        return Ok(registry);
    }

    let feed_path = ConfigStore::models_path();
    if feed_path.exists() {
        registry.load(&FileSource::new(&feed_path))?;
    } else {
        registry.load(&builtin_source())?;
    }

    Ok(registry)
}
