//! Shared building blocks for the auth workspace.
//! - `types`: wire shapes exchanged with RPC callers.
//! - `utils::logging`: tracing subscriber setup.

pub mod types;
pub mod utils;
