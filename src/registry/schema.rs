// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model feed schema
//!
//! The feed is a JSON array of descriptors. Descriptors are deliberately
//! loose (every field optional, unknown fields ignored) so one bad entry in
//! a published feed never breaks the whole load; validation into
//! [`ModelRecord`] happens per entry in the registry loader.

use serde::{Deserialize, Serialize};

/// One raw entry of the model feed.
///
/// Costs are US dollars per token. Absent costs mean a free model (local
/// ollama feeds omit them).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelDescriptor {
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub prompt_cost: Option<f64>,
    #[serde(default)]
    pub completion_cost: Option<f64>,
}

impl ModelDescriptor {
    /// A fully populated descriptor, for the builtin feed and tests.
    pub fn new(
        provider: &str,
        model: &str,
        endpoint: &str,
        prompt_cost: f64,
        completion_cost: f64,
    ) -> Self {
        ModelDescriptor {
            provider: Some(provider.to_string()),
            model: Some(model.to_string()),
            endpoint: Some(endpoint.to_string()),
            prompt_cost: Some(prompt_cost),
            completion_cost: Some(completion_cost),
        }
    }

    /// Validate into a record.
    ///
    /// `None` when the descriptor is incomplete (missing or empty provider,
    /// model, or endpoint) or carries a negative cost. Absent costs default
    /// to zero.
    pub fn into_record(self) -> Option<ModelRecord> {
        let provider = self.provider.filter(|s| !s.is_empty())?;
        let model = self.model.filter(|s| !s.is_empty())?;
        let endpoint = self.endpoint.filter(|s| !s.is_empty())?;
        let prompt_cost = self.prompt_cost.unwrap_or(0.0);
        let completion_cost = self.completion_cost.unwrap_or(0.0);
        if prompt_cost < 0.0 || completion_cost < 0.0 {
            return None;
        }
        Some(ModelRecord {
            provider,
            model,
            endpoint,
            prompt_cost,
            completion_cost,
        })
    }
}

/// A validated model entry.
///
/// Provider, model, and endpoint are non-empty; costs are non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    pub provider: String,
    pub model: String,
    pub endpoint: String,
    pub prompt_cost: f64,
    pub completion_cost: f64,
}
