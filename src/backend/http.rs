use async_trait::async_trait;
use tracing::debug;

use super::{BackendError, BackendResult, CompletionBackend};
use crate::config::AssistConfig;
use crate::protocol::{CompletionRequest, CompletionResponse};

/// HTTP transport: posts the request form-encoded to the configured route
/// and decodes the JSON envelope.
pub struct HttpBackend {
    client: reqwest::Client,
    config: AssistConfig,
}

impl HttpBackend {
    pub fn new(config: AssistConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.route
        )
    }
}

#[async_trait]
impl CompletionBackend for HttpBackend {
    async fn complete(&self, request: &CompletionRequest) -> BackendResult<CompletionResponse> {
        let url = self.endpoint();
        debug!(%url, line = request.line, "posting autocompletion request");

        let response = self
            .client
            .post(&url)
            .form(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::ServerError { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let envelope = serde_json::from_str(&body)?;
        Ok(envelope)
    }

    fn backend_name(&self) -> &'static str {
        "http"
    }
}
