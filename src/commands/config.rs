// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Configuration management command

use crate::cli::{ConfigArgs, ConfigCommands};
use crate::config::ConfigStore;
use crate::error::{Result, ShelpError};

/// Execute the config command
pub fn execute(args: &ConfigArgs, config: &mut ConfigStore) -> Result<()> {
    match &args.command {
        ConfigCommands::Show => {
            for (key, value) in config.iter() {
                println!("{key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            let value = config
                .get(key)
                .ok_or_else(|| ShelpError::Config(format!("no value for '{key}'")))?;
            println!("{value}");
        }
        ConfigCommands::Set { key, value } => {
            config.set(key.as_str(), value.as_str());
            config.save()?;
            println!("Setting '{key}' updated.");
        }
        ConfigCommands::Path => {
            println!("{}", config.path().display());
        }
    }
    Ok(())
}
