//! Terminal front end for the pairs game.
//!
//! Rendering goes through a plain framebuffer: [`GameView`] draws a
//! `GameSnapshot` into a [`FrameBuffer`], and [`TerminalRenderer`] flushes it
//! to the terminal, rewriting only the cells that changed since the last
//! frame. Animations are sampled from the declarative variants in [`motion`].

pub mod fb;
pub mod game_view;
pub mod motion;
pub mod renderer;

pub use tui_pairs_core as core;
pub use tui_pairs_types as types;

pub use fb::{BorderGlyphs, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ViewState, Viewport};
pub use motion::{item_variant, ItemVariant, PanelVariant, WinPose};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
