use async_trait::async_trait;
use std::sync::Mutex;

use super::{BackendResult, CompletionBackend};
use crate::protocol::{CompletionRequest, CompletionResponse, SuggestionSet};

/// In-process backend for tests and headless embeddings: replies with a
/// canned suggestion set and remembers the last request it saw.
pub struct MockBackend {
    tokens: String,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl MockBackend {
    pub fn new(suggestions: &SuggestionSet) -> Self {
        let tokens =
            serde_json::to_string(suggestions).expect("suggestion set serializes to JSON");
        Self::with_tokens(tokens)
    }

    /// Reply with a raw `tokens` document, valid or not.
    pub fn with_tokens(tokens: String) -> Self {
        Self {
            tokens,
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, request: &CompletionRequest) -> BackendResult<CompletionResponse> {
        *self.last_request.lock().expect("lock poisoned") = Some(request.clone());

        Ok(CompletionResponse {
            tokens: self.tokens.clone(),
        })
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
