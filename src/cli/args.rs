// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for shelp.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shelp - AI command completion for your shell
#[derive(Parser, Debug)]
#[command(name = "shelp")]
#[command(version, about = "AI-powered command completion for your shell")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Choose the completion model (default when no command given)
    #[command(alias = "select")]
    Model(ModelArgs),

    /// List available models
    List(ListArgs),

    /// Read or change configuration values
    Config(ConfigArgs),

    /// Look up or store cached completions
    Cache(CacheArgs),

    /// Refresh the model feed from the network
    Update(UpdateArgs),
}

/// Arguments for the model subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ModelArgs {
    /// Provider of the model to select (omit both arguments for the menu)
    #[arg(requires = "model")]
    pub provider: Option<String>,

    /// Model name, given together with PROVIDER
    pub model: Option<String>,

    /// Read the model feed from this file instead of the default
    #[arg(long, value_name = "PATH")]
    pub models_file: Option<PathBuf>,
}

/// Arguments for the list subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ListArgs {
    /// Only list models from this provider
    pub provider: Option<String>,

    /// Read the model feed from this file instead of the default
    #[arg(long, value_name = "PATH")]
    pub models_file: Option<PathBuf>,
}

/// Arguments for configuration management
#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print all configuration values
    Show,

    /// Print a single configuration value
    Get {
        /// Key to read
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Key to write
        key: String,

        /// Value to store
        value: String,
    },

    /// Print the path of the configuration file
    Path,
}

/// Arguments for cache management
#[derive(clap::Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Print the cached completion for an input line, if any
    Get {
        /// Input line the completion was cached for
        input: String,
    },

    /// Store a completion for an input line
    Put {
        /// Input line to cache against
        input: String,

        /// Completion to store
        completion: String,
    },

    /// Delete all cached completions
    Clear,

    /// Show cache statistics
    Stats,
}

/// Arguments for the update subcommand
#[derive(clap::Args, Debug, Default)]
pub struct UpdateArgs {
    /// Fetch the feed from this URL instead of the configured one
    #[arg(long)]
    pub url: Option<String>,
}
