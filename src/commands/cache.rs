// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Completion cache command
//!
//! `cache get` is on the hot path of the shell integration: it prints the
//! cached completion and exits 0 on a hit, and exits 1 with no output on a
//! miss so the shell function can fall through to a live request.

use crate::cache::CompletionCache;
use crate::cli::{CacheArgs, CacheCommands};
use crate::config::{keys, ConfigStore};
use crate::error::{Result, ShelpError};
use crate::utils::format_size;

/// Execute the cache command
pub fn execute(args: &CacheArgs, config: &ConfigStore) -> Result<()> {
    let cache = CompletionCache::open_default();

    match &args.command {
        CacheCommands::Get { input } => {
            // completions are cached per model; with no model configured
            // there is nothing to hit
            let Some(model) = config.get(keys::MODEL) else {
                std::process::exit(1);
            };
            match cache.get(model, input)? {
                Some(completion) => println!("{completion}"),
                None => std::process::exit(1),
            }
        }
        CacheCommands::Put { input, completion } => {
            let model = config.get(keys::MODEL).ok_or_else(|| {
                ShelpError::Config("no model configured; run 'shelp model' first".to_string())
            })?;
            cache.put(model, input, completion)?;
        }
        CacheCommands::Clear => {
            let removed = cache.clear()?;
            println!("Removed {removed} cached completions");
        }
        CacheCommands::Stats => {
            let stats = cache.stats()?;
            println!("Entries: {}", stats.entries);
            println!("Size:    {}", format_size(stats.total_bytes));
        }
    }

    Ok(())
}
