//! Result View Component
//!
//! Empty-state message or the todo table, depending on the no-results flag.
//! Table borders and cell padding live in `styles.css` (`.todo-table`).

use leptos::prelude::*;
use todo_search_core::{ResultState, NO_RESULTS_MESSAGE};

use crate::components::TodoRow;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

#[component]
pub fn ResultView() -> impl IntoView {
    let store = use_app_store();

    let state = move || ResultState::from_flag(store.no_results().get());

    move || match state() {
        ResultState::NoResults => no_results_message(),
        ResultState::HasResults => results_table(store),
    }
}

fn no_results_message() -> AnyView {
    view! {
        <p class="no-results">{NO_RESULTS_MESSAGE}</p>
    }.into_any()
}

fn results_table(store: AppStore) -> AnyView {
    view! {
        <table class="todo-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Title"</th>
                    <th>"Completed"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.filtered_todos().get()
                    key=|todo| todo.id
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </tbody>
        </table>
    }.into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;
    use crate::store::AppState;

    #[test]
    fn test_both_result_states_build() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::default());
            let _table = results_table(store);
            let _message = no_results_message();
        });
    }
}
