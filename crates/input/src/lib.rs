//! Terminal input module.
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::UiCommand`]s and tracks the grid cursor that
//! decides which card an activation refers to.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::Cursor;
pub use map::{map_key, should_quit};
