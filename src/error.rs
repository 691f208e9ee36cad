// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Error types for shelp
//!
//! This module defines all error types used throughout the application.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for shelp operations
#[derive(Error, Debug)]
pub enum ShelpError {
    /// Model registry errors
    #[error("{0}")]
    Registry(#[from] RegistryError),

    /// Model key codec errors
    #[error("{0}")]
    Key(#[from] KeyError),

    /// Menu selector errors
    #[error("{0}")]
    Menu(#[from] MenuError),

    /// Selection resolver errors
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Model feed errors
    #[error("Feed error: {0}")]
    Feed(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors loading the model registry from a feed source
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The feed source could not be read at all
    #[error("model feed unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The feed was read but is not a valid descriptor array
    #[error("invalid model feed {}: {message}", path.display())]
    InvalidFeed { path: PathBuf, message: String },
}

/// Errors encoding or decoding model keys
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KeyError {
    /// Encode rejected an empty provider or model
    #[error("empty {field} in model key")]
    EmptyField { field: &'static str },

    /// Encode rejected a field that would collide with the key separator
    #[error("{field} {value:?} conflicts with the key separator")]
    ReservedSeparator { field: &'static str, value: String },

    /// Decode rejected a string no encode call could have produced
    #[error("malformed model key: {0:?}")]
    Malformed(String),
}

/// Errors running the interactive menu
#[derive(Error, Debug)]
pub enum MenuError {
    /// The menu was started with no entries
    #[error("menu has no entries")]
    Empty,

    /// A menu is already running in this process
    #[error("menu is already active")]
    AlreadyActive,

    /// Terminal setup, drawing, or input failed
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors resolving a model selection
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No registry entry matches the requested provider and model
    #[error("model not found: {provider}::{model}")]
    NotFound { provider: String, model: String },

    /// The user dismissed the menu without confirming
    #[error("selection cancelled")]
    Cancelled,

    /// The menu itself failed
    #[error("{0}")]
    Menu(#[from] MenuError),
}

/// Result type alias for shelp operations
pub type Result<T> = std::result::Result<T, ShelpError>;

impl From<toml::de::Error> for ShelpError {
    fn from(err: toml::de::Error) -> Self {
        ShelpError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ShelpError {
    fn from(err: toml::ser::Error) -> Self {
        ShelpError::Toml(err.to_string())
    }
}
