use serde::{Deserialize, Serialize};

/// Endpoint configuration for the HTTP backend. The grammar engine is
/// selected per controller, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistConfig {
    pub base_url: String,
    #[serde(default = "default_route")]
    pub route: String,
}

fn default_route() -> String {
    "/v1/autocompletion".to_string()
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888".to_string(),
            route: default_route(),
        }
    }
}
