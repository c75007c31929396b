//! UI Components

mod search_form;
mod result_view;
mod todo_row;

pub use search_form::SearchForm;
pub use result_view::ResultView;
pub use todo_row::TodoRow;
