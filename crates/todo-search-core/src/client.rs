//! Todo Endpoint Client
//!
//! One best-effort GET per page session: no retry, no timeout, no cancellation.

use reqwest::Client;
use url::Url;

use crate::error::FetchError;
use crate::models::TodoItem;

#[derive(Clone, Debug)]
pub struct TodoClient {
    endpoint: Url,
    client: Client,
}

impl TodoClient {
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)?;
        Ok(Self {
            endpoint,
            client: Client::new(),
        })
    }

    pub async fn fetch_todos(&self) -> Result<Vec<TodoItem>, FetchError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let todos: Vec<TodoItem> = serde_json::from_str(&body)?;
        Ok(todos)
    }

    /// Fetch, falling back to an empty list. Failures produce exactly one error entry.
    pub async fn load_todos(&self) -> Vec<TodoItem> {
        match self.fetch_todos().await {
            Ok(todos) => {
                log::info!("Loaded {} todos from {}", todos.len(), self.endpoint);
                todos
            }
            Err(err) => {
                log::error!("Error fetching data from {}: {}", self.endpoint, err);
                Vec::new()
            }
        }
    }
}

/// Same as [`TodoClient::load_todos`], also covering an unparsable endpoint.
pub async fn load_todos_from(endpoint: &str) -> Vec<TodoItem> {
    match TodoClient::new(endpoint) {
        Ok(client) => client.load_todos().await,
        Err(err) => {
            log::error!("Error fetching data from {}: {}", endpoint, err);
            Vec::new()
        }
    }
}
