use async_trait::async_trait;

use crate::protocol::{CompletionRequest, CompletionResponse};

mod error;
mod http;
mod mock;

pub use error::{BackendError, BackendResult};
pub use http::HttpBackend;
pub use mock::MockBackend;

/// Transport to the autocompletion endpoint. One request per trigger; no
/// retry, timeout, or de-duplication is layered on top.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> BackendResult<CompletionResponse>;

    fn backend_name(&self) -> &'static str;
}
