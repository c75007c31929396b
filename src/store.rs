//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_search_core::{filter_todos, LoadState, SearchQuery, TodoItem};

/// Page session state. Both lists are replaced wholesale, never patched.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Canonical list, as fetched
    pub todos: Vec<TodoItem>,
    /// Displayed list (canonical list until the first search)
    pub filtered_todos: Vec<TodoItem>,
    /// Most recent search matched nothing
    pub no_results: bool,
    /// Startup fetch lifecycle
    pub load_state: LoadState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace canonical and displayed lists with the fetch result
pub fn store_finish_load(store: &AppStore, todos: Vec<TodoItem>) {
    *store.filtered_todos().write() = todos.clone();
    *store.todos().write() = todos;
    store.load_state().set(LoadState::Settled);
}

/// Recompute the displayed list and no-results flag from the canonical list
pub fn store_apply_search(store: &AppStore, query: &SearchQuery) {
    let outcome = filter_todos(query.as_str(), &store.todos().read_untracked());
    store.no_results().set(outcome.no_results);
    *store.filtered_todos().write() = outcome.items;
}
