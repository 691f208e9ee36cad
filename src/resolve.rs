// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Selection resolver
//!
//! Turns a model request into a registry record, either from explicit
//! provider and model arguments or from an interactive menu run. The menu
//! path builds its items from one `display_order` snapshot and maps the
//! confirmed position back through that same snapshot; the registry stays
//! immutably borrowed in between, so the order cannot shift under the menu.

use tracing::debug;

use crate::config::{keys, ConfigStore};
use crate::error::ResolveError;
use crate::menu::{self, MenuItem, SelectionOutcome};
use crate::registry::{ModelKey, ModelRecord, ModelRegistry};
use crate::utils::format_cost;

/// Resolve explicit provider and model arguments.
///
/// A pair the key codec rejects cannot name any registry entry, so it
/// resolves to the same `NotFound` as a missing key.
pub fn resolve_direct<'a>(
    registry: &'a ModelRegistry,
    provider: &str,
    model: &str,
) -> Result<&'a ModelRecord, ResolveError> {
    let not_found = || ResolveError::NotFound {
        provider: provider.to_string(),
        model: model.to_string(),
    };

    let key = ModelKey::encode(provider, model).map_err(|_| not_found())?;
    registry.lookup(&key).ok_or_else(not_found)
}

/// Resolve through the interactive menu.
///
/// Cancellation maps to [`ResolveError::Cancelled`]; menu failures pass
/// through. The active key, when given, is only marked in the listing and
/// never changes the initial cursor position.
pub fn resolve_from_menu<'a>(
    registry: &'a ModelRegistry,
    active: Option<&ModelKey>,
) -> Result<&'a ModelRecord, ResolveError> {
    let order = registry.display_order();
    let items = menu_items(registry, active);

    let outcome = menu::run_menu(items)?;
    debug!("menu outcome: {:?}", outcome);

    apply_outcome(registry, order, outcome)
}

/// Build menu items from the registry's display order.
///
/// One item per key, labeled with the encoded key and grouped by provider.
pub fn menu_items(registry: &ModelRegistry, active: Option<&ModelKey>) -> Vec<MenuItem> {
    registry
        .display_order()
        .iter()
        .map(|key| MenuItem::new(key.as_str(), key.provider()).active(Some(key) == active))
        .collect()
}

/// Map a menu outcome back through the order snapshot its items came from.
pub fn apply_outcome<'a>(
    registry: &'a ModelRegistry,
    order: &[ModelKey],
    outcome: SelectionOutcome,
) -> Result<&'a ModelRecord, ResolveError> {
    match outcome {
        SelectionOutcome::Cancelled => Err(ResolveError::Cancelled),
        SelectionOutcome::Confirmed(position) => {
            // menu positions are 1-based into this same snapshot
            let key = &order[position - 1];
            registry.lookup(key).ok_or_else(|| ResolveError::NotFound {
                provider: key.provider().to_string(),
                model: key.model().to_string(),
            })
        }
    }
}

/// Write a resolved record into the config store.
///
/// Costs are fixed-point strings with 8 decimals so the shell glue can use
/// them in arithmetic without scientific-notation surprises.
pub fn persist_selection(record: &ModelRecord, config: &mut ConfigStore) {
    config.set(keys::MODEL, record.model.as_str());
    config.set(keys::ENDPOINT, record.endpoint.as_str());
    config.set(keys::PROVIDER, record.provider.as_str());
    config.set(keys::API_PROMPT_COST, format_cost(record.prompt_cost));
    config.set(
        keys::API_COMPLETION_COST,
        format_cost(record.completion_cost),
    );
}

/// The configured model as a key, when one is configured and encodable.
pub fn active_key(config: &ConfigStore) -> Option<ModelKey> {
    let provider = config.get(keys::PROVIDER)?;
    let model = config.get(keys::MODEL)?;
    ModelKey::encode(provider, model).ok()
}
