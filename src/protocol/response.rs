use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::backend::BackendError;

/// Envelope returned by the autocompletion endpoint. `tokens` is itself an
/// encoded JSON document; see [`SuggestionSet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub tokens: String,
}

impl CompletionResponse {
    /// Decode the inner `tokens` document. A document this client cannot
    /// parse is a contract violation and surfaces as an error instead of
    /// degrading silently.
    pub fn decode(&self) -> Result<SuggestionSet, BackendError> {
        let suggestions = serde_json::from_str(&self.tokens)?;
        Ok(suggestions)
    }
}

/// Decoded suggestion structure: placeholder rules keyed by name, plus
/// every other top-level key as a candidate group of next-token literals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionSet {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, PlaceholderRule>,
    #[serde(flatten)]
    pub next_tokens: IndexMap<String, Vec<String>>,
}

/// How a placeholder may be resolved. A rule has exactly one recognized
/// shape; anything else decodes as `Opaque` and routes to no action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceholderRule {
    Values { values: Vec<String> },
    Number(NumberRule),
    Opaque(serde_json::Value),
}

/// Numeric-input rule: free number entry with a unit label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberRule {
    pub params: String,
    pub unit: String,
}
