//! Search Form Component
//!
//! Single `query` field validated as required + minimum length.
//! Errors show inline once the field has been blurred or submitted.

use leptos::prelude::*;
use todo_search_core::{SearchConfig, SearchQuery};

use crate::store::{store_apply_search, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchForm() -> impl IntoView {
    let store = use_app_store();
    let config = use_context::<SearchConfig>().unwrap_or_default();
    let min_len = config.min_query_len;

    let (query, set_query) = signal(String::new());
    let (touched, set_touched) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let error_message = move || {
        if !touched.get() {
            return None;
        }
        SearchQuery::parse(&query.get(), min_len).err().map(|err| err.to_string())
    };

    // No searching against a list that hasn't arrived yet
    let submit_disabled = move || submitting.get() || store.load_state().get().is_pending();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_touched.set(true);
        match SearchQuery::parse(&query.get_untracked(), min_len) {
            Ok(parsed) => {
                set_submitting.set(true);
                store_apply_search(&store, &parsed);
                set_submitting.set(false);
            }
            Err(err) => log::debug!("[SearchForm] Rejected query: {}", err),
        }
    };

    view! {
        <form class="search-form" on:submit=on_submit>
            <div class="search-field">
                <label for="query">"Search:"</label>
                <input
                    type="text"
                    id="query"
                    name="query"
                    placeholder="Enter search term..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:blur=move |_| set_touched.set(true)
                />
                {move || error_message().map(|msg| view! { <div class="field-error">{msg}</div> })}
            </div>
            <div>
                <button type="submit" disabled=submit_disabled>
                    "Search"
                </button>
            </div>
        </form>
    }
}
