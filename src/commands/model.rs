// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model selection command
//!
//! `shelp model` with no arguments opens the interactive menu; with a
//! provider and model name it selects directly. Either way the chosen
//! record is written to the config file the shell integration reads.

use std::io;

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::cli::ModelArgs;
use crate::config::ConfigStore;
use crate::error::{Result, ResolveError};
use crate::registry::{ModelRegistry, KEY_SEPARATOR};
use crate::resolve;

/// Execute the model command
pub fn execute(args: &ModelArgs, config: &mut ConfigStore) -> Result<()> {
    let registry = super::open_registry(args.models_file.as_deref())?;

    let record = match (&args.provider, &args.model) {
        (Some(provider), Some(model)) => {
            match resolve::resolve_direct(&registry, provider, model) {
                Ok(record) => record,
                Err(err) => {
                    print_provider_models(&registry, provider);
                    return Err(err.into());
                }
            }
        }
        _ => {
            let active = resolve::active_key(config);
            match resolve::resolve_from_menu(&registry, active.as_ref()) {
                Ok(record) => record,
                // backing out of the menu is not a failure
                Err(ResolveError::Cancelled) => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }
    };

    resolve::persist_selection(record, config);
    config.save()?;

    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Green))?;
    println!(
        "✓ Model set to {}{}{}",
        record.provider, KEY_SEPARATOR, record.model
    );
    stdout.execute(ResetColor)?;

    Ok(())
}

/// Show what was available when a direct selection misses.
fn print_provider_models(registry: &ModelRegistry, provider: &str) {
    let keys = registry.keys_for_provider(provider);
    if !keys.is_empty() {
        eprintln!("Models available from '{provider}':");
        for key in keys {
            eprintln!("  {key}");
        }
        return;
    }

    let providers = registry.providers();
    if providers.is_empty() {
        eprintln!("The model feed is empty.");
    } else {
        eprintln!(
            "Unknown provider '{provider}'. Known providers: {}",
            providers.join(", ")
        );
    }
    eprintln!("Run 'shelp list' to see all models.");
}
