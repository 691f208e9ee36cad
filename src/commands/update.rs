// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model feed update command

use std::io;

use chrono::Utc;
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::cli::UpdateArgs;
use crate::config::{keys, ConfigStore};
use crate::error::Result;
use crate::feed;

/// Execute the update command
pub async fn execute(args: &UpdateArgs, config: &mut ConfigStore) -> Result<()> {
    let url = feed_url(args, config);
    println!("Fetching model feed from {url}");

    let path = ConfigStore::models_path();
    let summary = feed::update_models_file(&url, &path).await?;

    config.set(keys::MODELS_UPDATED_AT, Utc::now().to_rfc3339());
    config.save()?;

    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    println!("✓ Saved {} models to {}", summary.valid, path.display());
    stdout.execute(ResetColor)?;

    if summary.valid < summary.total {
        println!(
            "  {} incomplete feed entries will be skipped",
            summary.total - summary.valid
        );
    }

    Ok(())
}

/// `--url` wins over the configured URL, which wins over the default.
///
/// The flag is a one-shot override; making it permanent is what
/// `shelp config set models_url <url>` is for.
fn feed_url(args: &UpdateArgs, config: &ConfigStore) -> String {
    args.url
        .clone()
        .or_else(|| config.get(keys::MODELS_URL).map(str::to_string))
        .unwrap_or_else(|| feed::DEFAULT_FEED_URL.to_string())
}
