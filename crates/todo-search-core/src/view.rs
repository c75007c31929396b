//! Result View State
//!
//! The result region has two rendered states, picked by the no-results flag.

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultState {
    NoResults,
    HasResults,
}

impl ResultState {
    pub fn from_flag(no_results: bool) -> Self {
        if no_results {
            ResultState::NoResults
        } else {
            ResultState::HasResults
        }
    }
}

/// Text shown in the Completed column
pub fn completed_label(completed: bool) -> &'static str {
    if completed { "Yes" } else { "No" }
}
