// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Builtin model feed
//!
//! Compiled-in defaults so a fresh install completes before the first
//! `shelp update`. Order here is display order. Costs are USD per token,
//! current as of mid-2025; `update` replaces them with the published feed.

use crate::registry::schema::ModelDescriptor;
use crate::registry::source::StaticSource;

const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";
const OLLAMA_ENDPOINT: &str = "http://localhost:11434/api/chat";

/// The builtin descriptors, in display order.
pub fn builtin_descriptors() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor::new("openai", "gpt-4o", OPENAI_ENDPOINT, 0.000_002_5, 0.000_01),
        ModelDescriptor::new(
            "openai",
            "gpt-4o-mini",
            OPENAI_ENDPOINT,
            0.000_000_15,
            0.000_000_6,
        ),
        ModelDescriptor::new("openai", "gpt-4.1", OPENAI_ENDPOINT, 0.000_002, 0.000_008),
        ModelDescriptor::new(
            "openai",
            "gpt-4.1-mini",
            OPENAI_ENDPOINT,
            0.000_000_4,
            0.000_001_6,
        ),
        ModelDescriptor::new(
            "anthropic",
            "claude-sonnet-4-20250514",
            ANTHROPIC_ENDPOINT,
            0.000_003,
            0.000_015,
        ),
        ModelDescriptor::new(
            "anthropic",
            "claude-3-5-haiku-20241022",
            ANTHROPIC_ENDPOINT,
            0.000_000_25,
            0.000_001_25,
        ),
        ModelDescriptor::new(
            "groq",
            "llama-3.3-70b-versatile",
            GROQ_ENDPOINT,
            0.000_000_59,
            0.000_000_79,
        ),
        ModelDescriptor::new(
            "groq",
            "llama-3.1-8b-instant",
            GROQ_ENDPOINT,
            0.000_000_05,
            0.000_000_08,
        ),
        ModelDescriptor::new("ollama", "llama3.2:3b", OLLAMA_ENDPOINT, 0.0, 0.0),
        ModelDescriptor::new("ollama", "qwen2.5-coder:7b", OLLAMA_ENDPOINT, 0.0, 0.0),
    ]
}

/// The builtin feed as a registry source.
pub fn builtin_source() -> StaticSource {
    StaticSource::new(builtin_descriptors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::key::ModelKey;

    #[test]
    fn test_builtin_descriptors_all_validate() {
        for d in builtin_descriptors() {
            assert!(d.into_record().is_some());
        }
    }

    #[test]
    fn test_builtin_keys_are_unique() {
        let mut keys = Vec::new();
        for d in builtin_descriptors() {
            let record = d.into_record().unwrap();
            let key = ModelKey::encode(&record.provider, &record.model).unwrap();
            assert!(!keys.contains(&key), "duplicate builtin key {key}");
            keys.push(key);
        }
    }

    #[test]
    fn test_builtin_covers_supported_providers() {
        let descriptors = builtin_descriptors();
        for provider in ["openai", "anthropic", "groq", "ollama"] {
            assert!(
                descriptors
                    .iter()
                    .any(|d| d.provider.as_deref() == Some(provider)),
                "no builtin model for {provider}"
            );
        }
    }

    #[test]
    fn test_builtin_local_models_are_free() {
        for d in builtin_descriptors() {
            if d.provider.as_deref() == Some("ollama") {
                let record = d.into_record().unwrap();
                assert_eq!(record.prompt_cost, 0.0);
                assert_eq!(record.completion_cost, 0.0);
            }
        }
    }

    #[test]
    fn test_builtin_groups_are_contiguous() {
        // display order keeps each provider in one block
        let descriptors = builtin_descriptors();
        let mut seen: Vec<String> = Vec::new();
        for d in &descriptors {
            let provider = d.provider.clone().unwrap();
            match seen.last() {
                Some(last) if *last == provider => {}
                _ => {
                    assert!(!seen.contains(&provider), "{provider} split into two blocks");
                    seen.push(provider);
                }
            }
        }
    }
}
