//! Todo Search Frontend App
//!
//! Search form on top, results below.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_search_core::SearchConfig;

use crate::commands;
use crate::components::{ResultView, SearchForm};
use crate::store::{store_finish_load, AppState};

#[component]
pub fn App() -> impl IntoView {
    let config = SearchConfig::from_build_env();
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(store);
    provide_context(config.clone());

    // Fetch the canonical list once on mount
    Effect::new(move |_| {
        let endpoint = config.endpoint.clone();
        spawn_local(async move {
            let loaded = commands::load_todos(&endpoint).await;
            store_finish_load(&store, loaded);
        });
    });

    view! {
        <div class="app">
            <h1>"Search Todos"</h1>

            <SearchForm />

            <ResultView />
        </div>
    }
}
