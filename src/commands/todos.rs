//! Todo Commands

use todo_search_core::{load_todos_from, TodoItem};

/// Load the canonical list. Errors are logged by the client and yield an empty list.
pub async fn load_todos(endpoint: &str) -> Vec<TodoItem> {
    log::debug!("[APP] Loading todos from {}", endpoint);
    load_todos_from(endpoint).await
}
