// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Shelp Contributors

//! Model key codec
//!
//! A model key is the single string the shell glue, the config file, and the
//! menu all pass around instead of a (provider, model) pair. The encoding is
//! `provider ++ "::" ++ model`.
//!
//! Injectivity is enforced at encode time. Providers are registry-style
//! identifiers and may not contain `:` at all; a colon at the end of a
//! provider would shift the separator boundary (`"a:" ++ "::" ++ "b"` and
//! `"a" ++ "::" ++ ":b"` are the same string), so the whole character is
//! reserved. Models keep their single colons (ollama tags like `llama3.2:3b`)
//! and only the full `::` sequence is rejected. Under those two rules the
//! first `::` in a key always sits exactly between the halves, and decode
//! accepts exactly the strings encode can produce.
//!
//! Field bytes are otherwise preserved as-is: no trimming, no case folding.
//! A model name with odd whitespace survives the round trip untouched.

use std::fmt;

use crate::error::KeyError;

/// The reserved separator between the provider and model halves of a key.
pub const KEY_SEPARATOR: &str = "::";

/// An encoded (provider, model) pair.
///
/// Only `encode` creates these, so holding a `ModelKey` means holding a
/// string whose first separator splits it back into the original pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelKey(String);

impl ModelKey {
    /// Encode a provider and model into a key.
    ///
    /// Rejects empty fields, a provider containing `:`, and a model
    /// containing [`KEY_SEPARATOR`].
    pub fn encode(provider: &str, model: &str) -> Result<Self, KeyError> {
        if provider.is_empty() {
            return Err(KeyError::EmptyField { field: "provider" });
        }
        if provider.contains(':') {
            return Err(KeyError::ReservedSeparator {
                field: "provider",
                value: provider.to_string(),
            });
        }
        if model.is_empty() {
            return Err(KeyError::EmptyField { field: "model" });
        }
        if model.contains(KEY_SEPARATOR) {
            return Err(KeyError::ReservedSeparator {
                field: "model",
                value: model.to_string(),
            });
        }
        Ok(ModelKey(format!("{provider}{KEY_SEPARATOR}{model}")))
    }

    /// Decode a key string back into its (provider, model) pair.
    ///
    /// Splits on the first separator and re-checks the encode rules, so the
    /// accepted strings are exactly the image of `encode`.
    pub fn decode(key: &str) -> Result<(String, String), KeyError> {
        let (provider, model) = key
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| KeyError::Malformed(key.to_string()))?;
        if provider.is_empty()
            || provider.contains(':')
            || model.is_empty()
            || model.contains(KEY_SEPARATOR)
        {
            return Err(KeyError::Malformed(key.to_string()));
        }
        Ok((provider.to_string(), model.to_string()))
    }

    /// The provider half without reallocating.
    pub fn provider(&self) -> &str {
        // Invariant from encode: exactly one well-placed separator.
        match self.0.split_once(KEY_SEPARATOR) {
            Some((provider, _)) => provider,
            None => &self.0,
        }
    }

    /// The model half without reallocating.
    pub fn model(&self) -> &str {
        match self.0.split_once(KEY_SEPARATOR) {
            Some((_, model)) => model,
            None => &self.0,
        }
    }

    /// The encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModelKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Encode =====

    #[test]
    fn test_encode_simple_pair() {
        let key = ModelKey::encode("openai", "gpt-4o").unwrap();
        assert_eq!(key.as_str(), "openai::gpt-4o");
    }

    #[test]
    fn test_encode_preserves_single_colons_in_model() {
        let key = ModelKey::encode("ollama", "llama3.2:3b").unwrap();
        assert_eq!(key.as_str(), "ollama::llama3.2:3b");
    }

    #[test]
    fn test_encode_preserves_whitespace() {
        let key = ModelKey::encode("openai", " gpt 4o ").unwrap();
        assert_eq!(key.model(), " gpt 4o ");
    }

    #[test]
    fn test_encode_rejects_empty_provider() {
        let err = ModelKey::encode("", "gpt-4o").unwrap_err();
        assert_eq!(err, KeyError::EmptyField { field: "provider" });
    }

    #[test]
    fn test_encode_rejects_empty_model() {
        let err = ModelKey::encode("openai", "").unwrap_err();
        assert_eq!(err, KeyError::EmptyField { field: "model" });
    }

    #[test]
    fn test_encode_rejects_colon_in_provider() {
        let err = ModelKey::encode("open:ai", "gpt-4o").unwrap_err();
        assert!(matches!(
            err,
            KeyError::ReservedSeparator {
                field: "provider",
                ..
            }
        ));
    }

    #[test]
    fn test_encode_rejects_trailing_colon_in_provider() {
        // "a:" ++ "::" ++ "b" would collide with "a" ++ "::" ++ ":b"
        assert!(ModelKey::encode("a:", "b").is_err());
    }

    #[test]
    fn test_encode_rejects_separator_in_model() {
        let err = ModelKey::encode("openai", "gpt::4o").unwrap_err();
        assert!(matches!(
            err,
            KeyError::ReservedSeparator { field: "model", .. }
        ));
    }

    #[test]
    fn test_encode_allows_leading_colon_in_model() {
        let key = ModelKey::encode("a", ":b").unwrap();
        let (provider, model) = ModelKey::decode(key.as_str()).unwrap();
        assert_eq!((provider.as_str(), model.as_str()), ("a", ":b"));
    }

    // ===== Decode =====

    #[test]
    fn test_decode_round_trip() {
        let key = ModelKey::encode("anthropic", "claude-3-5-haiku-20241022").unwrap();
        let (provider, model) = ModelKey::decode(key.as_str()).unwrap();
        assert_eq!(provider, "anthropic");
        assert_eq!(model, "claude-3-5-haiku-20241022");
    }

    #[test]
    fn test_decode_rejects_missing_separator() {
        let err = ModelKey::decode("gpt-4o").unwrap_err();
        assert_eq!(err, KeyError::Malformed("gpt-4o".to_string()));
    }

    #[test]
    fn test_decode_rejects_empty_provider() {
        assert!(ModelKey::decode("::gpt-4o").is_err());
    }

    #[test]
    fn test_decode_rejects_empty_model() {
        assert!(ModelKey::decode("openai::").is_err());
    }

    #[test]
    fn test_decode_rejects_second_separator_in_model() {
        assert!(ModelKey::decode("openai::gpt::4o").is_err());
    }

    #[test]
    fn test_decode_rejects_colon_in_provider_half() {
        // first :: sits after "a:b", and "a:b" is not a provider encode accepts
        assert!(ModelKey::decode("a:b::c").is_err());
    }

    #[test]
    fn test_decode_triple_colon_splits_at_first_separator() {
        let (provider, model) = ModelKey::decode("a:::b").unwrap();
        assert_eq!((provider.as_str(), model.as_str()), ("a", ":b"));
    }

    #[test]
    fn test_decode_single_colon_model() {
        let (provider, model) = ModelKey::decode("ollama::qwen2.5-coder:7b").unwrap();
        assert_eq!(provider, "ollama");
        assert_eq!(model, "qwen2.5-coder:7b");
    }

    // ===== Accessors =====

    #[test]
    fn test_provider_and_model_accessors() {
        let key = ModelKey::encode("groq", "llama-3.3-70b-versatile").unwrap();
        assert_eq!(key.provider(), "groq");
        assert_eq!(key.model(), "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_display_is_encoded_form() {
        let key = ModelKey::encode("openai", "gpt-4o-mini").unwrap();
        assert_eq!(key.to_string(), "openai::gpt-4o-mini");
    }

    #[test]
    fn test_keys_compare_by_encoded_form() {
        let a = ModelKey::encode("openai", "gpt-4o").unwrap();
        let b = ModelKey::encode("openai", "gpt-4o").unwrap();
        let c = ModelKey::encode("openai", "gpt-4o-mini").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    // ===== Injectivity properties =====

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn provider_field() -> impl Strategy<Value = String> {
            // identifiers: no colon anywhere
            "[a-zA-Z0-9 ._/-]{1,30}"
        }

        fn model_field() -> impl Strategy<Value = String> {
            // single colons allowed, the full separator is not
            "[a-zA-Z0-9 :._/-]{1,40}"
                .prop_filter("no reserved separator", |s| !s.contains(KEY_SEPARATOR))
        }

        proptest! {
            #[test]
            fn decode_inverts_encode(provider in provider_field(), model in model_field()) {
                let key = ModelKey::encode(&provider, &model).unwrap();
                let (p, m) = ModelKey::decode(key.as_str()).unwrap();
                prop_assert_eq!(p, provider);
                prop_assert_eq!(m, model);
            }

            #[test]
            fn accessors_agree_with_decode(provider in provider_field(), model in model_field()) {
                let key = ModelKey::encode(&provider, &model).unwrap();
                prop_assert_eq!(key.provider(), provider.as_str());
                prop_assert_eq!(key.model(), model.as_str());
            }

            #[test]
            fn distinct_pairs_encode_distinctly(
                a in provider_field(), b in model_field(),
                c in provider_field(), d in model_field(),
            ) {
                let left = ModelKey::encode(&a, &b).unwrap();
                let right = ModelKey::encode(&c, &d).unwrap();
                if (a, b) != (c, d) {
                    prop_assert_ne!(left, right);
                }
            }
        }
    }
}
