// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Shelp - AI-powered command completion for your shell.
//!
//! This crate exposes the runtime behind the `shelp` CLI, which the shell
//! integration calls to pick a completion model, read its configuration,
//! and look up cached completions.
//!
//! Architecture highlights:
//! - `registry`: the model catalog loaded from a feed, in feed order
//! - `menu`: the interactive terminal selector
//! - `resolve`: turns a direct argument pair or a menu session into a model
//! - `config`, `cache`: the files under `~/.shelp` the shell reads
//! - `feed`: fetching a newer model catalog

pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod feed;
pub mod menu;
pub mod registry;
pub mod resolve;
pub mod utils;

pub use error::{Result, ShelpError};
