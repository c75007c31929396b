//! Remote Data Commands
//!
//! Frontend bindings to the todo endpoint.

mod todos;

pub use todos::*;
