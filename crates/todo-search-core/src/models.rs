//! Data Models
//!
//! Shapes returned by the todo endpoint and the load lifecycle.

use serde::Deserialize;

/// A todo as served by the endpoint. Unknown fields (e.g. `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TodoItem {
    pub id: u32,
    pub title: String,
    pub completed: bool,
}

/// Whether the startup fetch has settled (successfully or not)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Settled,
}

impl LoadState {
    pub fn is_pending(self) -> bool {
        self == LoadState::Pending
    }
}
