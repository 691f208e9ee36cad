// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Configuration module for shelp
//!
//! Handles loading, saving, and managing the flat key-value store the shell
//! glue reads completion settings from.

pub mod store;

pub use store::{keys, ConfigStore};
