// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Shelp - AI-powered command completion for your shell
//!
//! Entry point for the shelp CLI application.

use clap::Parser;

use shelp::cli::{Cli, Commands, ModelArgs};
use shelp::commands;
use shelp::config::ConfigStore;
use shelp::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // Practical debug toggle: `-v` enables crate diagnostics without requiring
    // users to know target names up front. `RUST_LOG` still takes precedence.
    let directive = match cli.verbose {
        0 => None,
        1 => Some("shelp=debug"),
        _ => Some("shelp=trace"),
    };
    if let Some(directive) = directive {
        if let Ok(parsed) = directive.parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    // stdout is the data channel the shell integration captures, so logs
    // go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Ensure directories exist
    ConfigStore::ensure_directories()?;

    // Load config
    let mut config = ConfigStore::load()?;

    // Dispatch to appropriate command
    match cli.command {
        None => {
            commands::model::execute(&ModelArgs::default(), &mut config)?;
        }
        Some(Commands::Model(args)) => {
            commands::model::execute(&args, &mut config)?;
        }
        Some(Commands::List(args)) => {
            commands::list::execute(&args, &config)?;
        }
        Some(Commands::Config(args)) => {
            commands::config::execute(&args, &mut config)?;
        }
        Some(Commands::Cache(args)) => {
            commands::cache::execute(&args, &config)?;
        }
        Some(Commands::Update(args)) => {
            commands::update::execute(&args, &mut config).await?;
        }
    }

    Ok(())
}
