//! Todo Search Core
//!
//! Everything the todo search UI does that is not rendering:
//! fetching the canonical list, validating the search field and
//! filtering the list for display.

mod client;
mod config;
mod error;
mod filter;
mod models;
mod validation;
mod view;

pub use client::{load_todos_from, TodoClient};
pub use config::{SearchConfig, DEFAULT_ENDPOINT, DEFAULT_MIN_QUERY_LEN};
pub use error::{FetchError, QueryError};
pub use filter::{filter_todos, FilterOutcome};
pub use models::{LoadState, TodoItem};
pub use validation::SearchQuery;
pub use view::{completed_label, ResultState, NO_RESULTS_MESSAGE};
