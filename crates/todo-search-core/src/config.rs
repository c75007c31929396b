//! Search Configuration

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";
pub const DEFAULT_MIN_QUERY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// URL the canonical list is fetched from
    pub endpoint: String,
    /// Minimum accepted query length, in characters
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl SearchConfig {
    /// Defaults, with the endpoint overridable at build time via `TODO_SEARCH_ENDPOINT`.
    pub fn from_build_env() -> Self {
        Self::default().with_endpoint_override(option_env!("TODO_SEARCH_ENDPOINT"))
    }

    fn with_endpoint_override(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }
        self
    }
}
