// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model registry system
//!
//! A registry of completion models keyed by encoded `provider::model` keys,
//! loaded from a JSON model feed and kept in feed order.
//!
//! ## Feed resolution
//!
//! Models are loaded from the first of:
//! 1. An explicit `--models-file` path
//! 2. `~/.shelp/models.json` (written by `shelp update`)
//! 3. Builtin defaults compiled into the binary
//!
//! ## Example feed
//!
//! ```json
//! [
//!   {
//!     "provider": "anthropic",
//!     "model": "claude-3-5-haiku-20241022",
//!     "endpoint": "https://api.anthropic.com/v1/messages",
//!     "prompt_cost": 0.00000025,
//!     "completion_cost": 0.00000125
//!   }
//! ]
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shelp::registry::{builtin_source, ModelKey, ModelRegistry};
//!
//! let mut registry = ModelRegistry::new();
//! registry.load(&builtin_source())?;
//!
//! let key = ModelKey::encode("anthropic", "claude-3-5-haiku-20241022")?;
//! if let Some(record) = registry.lookup(&key) {
//!     println!("{} -> {}", key, record.endpoint);
//! }
//! ```

pub mod builtin;
pub mod key;
pub mod loader;
pub mod schema;
pub mod source;

// Re-export commonly used types
pub use builtin::{builtin_descriptors, builtin_source};
pub use key::{ModelKey, KEY_SEPARATOR};
pub use loader::ModelRegistry;
pub use schema::{ModelDescriptor, ModelRecord};
pub use source::{FileSource, ModelSource, StaticSource};
