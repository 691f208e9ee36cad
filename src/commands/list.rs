// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model listing command

use crate::cli::ListArgs;
use crate::config::ConfigStore;
use crate::error::Result;
use crate::registry::{ModelKey, ModelRecord};
use crate::resolve;

/// Execute the list command
pub fn execute(args: &ListArgs, config: &ConfigStore) -> Result<()> {
    let registry = super::open_registry(args.models_file.as_deref())?;
    let active = resolve::active_key(config);

    let mut current_provider: Option<&str> = None;
    let mut shown = 0;
    for (key, record) in registry.iter_display() {
        if let Some(ref provider) = args.provider {
            if key.provider() != provider.as_str() {
                continue;
            }
        }

        if current_provider != Some(key.provider()) {
            if current_provider.is_some() {
                println!();
            }
            println!("{}:", key.provider());
            current_provider = Some(key.provider());
        }

        println!("{}", format_entry(key, record, active.as_ref()));
        shown += 1;
    }

    if shown == 0 {
        match &args.provider {
            Some(provider) => {
                let providers = registry.providers();
                if providers.is_empty() {
                    println!("The model feed is empty.");
                } else {
                    println!(
                        "No models from provider '{provider}'. Known providers: {}",
                        providers.join(", ")
                    );
                }
            }
            None => println!("The model feed is empty."),
        }
    }

    Ok(())
}

/// One listing line: key, pricing, and a marker on the configured model.
fn format_entry(key: &ModelKey, record: &ModelRecord, active: Option<&ModelKey>) -> String {
    let pricing = if record.prompt_cost == 0.0 && record.completion_cost == 0.0 {
        "free".to_string()
    } else {
        // per-token costs read better per million tokens
        format!(
            "${:.2}/M in, ${:.2}/M out",
            record.prompt_cost * 1_000_000.0,
            record.completion_cost * 1_000_000.0
        )
    };
    let marker = if active == Some(key) { " (current)" } else { "" };
    format!("  {key} - {pricing}{marker}")
}
