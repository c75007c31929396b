use leptos::prelude::*;
use todo_search_core::{completed_label, TodoItem};

/// One table row: id, title, Yes/No
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    view! {
        <tr>
            <td>{todo.id}</td>
            <td>{todo.title}</td>
            <td>{completed_label(todo.completed)}</td>
        </tr>
    }
}
