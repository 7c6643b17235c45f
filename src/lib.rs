//! TUI Pairs (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pairs::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
