// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Feed sources the registry can load from

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RegistryError;
use crate::registry::schema::ModelDescriptor;

/// Anything that can produce raw feed descriptors.
///
/// Source failures are whole-load failures; per-entry problems are handled
/// later by the registry and never surface here.
pub trait ModelSource {
    fn descriptors(&self) -> Result<Vec<ModelDescriptor>, RegistryError>;
}

/// A JSON descriptor array on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModelSource for FileSource {
    fn descriptors(&self) -> Result<Vec<ModelDescriptor>, RegistryError> {
        let content =
            fs::read_to_string(&self.path).map_err(|source| RegistryError::SourceUnavailable {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|err| RegistryError::InvalidFeed {
            path: self.path.clone(),
            message: err.to_string(),
        })
    }
}

/// In-memory descriptors: the builtin feed and test fixtures.
pub struct StaticSource {
    descriptors: Vec<ModelDescriptor>,
}

impl StaticSource {
    pub fn new(descriptors: Vec<ModelDescriptor>) -> Self {
        StaticSource { descriptors }
    }
}

impl ModelSource for StaticSource {
    fn descriptors(&self) -> Result<Vec<ModelDescriptor>, RegistryError> {
        Ok(self.descriptors.clone())
    }
}
