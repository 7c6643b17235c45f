//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! They are plain data with no game logic, usable from the controller,
//! the terminal view and the input layer alike.
//!
//! # Cards
//!
//! A [`Card`] is identified by its [`CardId`]; two cards *match* when they
//! have different ids but the same `src`. A deck therefore holds every `src`
//! exactly twice.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `REVEAL_DELAY_MS` | 3000 | Startup peek before every card flips face-down |
//! | `UNDO_DELAY_MS` | 1000 | How long a mismatched pair stays face-up |
//! | `MATCH_DELAY_MS` | 1500 | How long a matched pair stays before removal |
//! | `PRESS_FLASH_MS` | 120 | Inset "pressed" feedback after activating a card |
//!
//! # Examples
//!
//! ```
//! use tui_pairs_types::{Card, CardId, CardStyle, GameAction};
//!
//! let card = Card::new(1, "sun");
//! assert_eq!(card.id, CardId(1));
//! assert!(!card.is_hidden);
//!
//! assert_eq!(CardStyle::Success.as_str(), "img success");
//! assert_eq!(GameAction::from_str("togglePanel"), Some(GameAction::TogglePanel));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Startup peek duration before all cards flip face-down.
pub const REVEAL_DELAY_MS: u32 = 3000;

/// Delay before a mismatched selection is hidden again.
pub const UNDO_DELAY_MS: u32 = 1000;

/// Delay before a matched pair is removed from the deck.
pub const MATCH_DELAY_MS: u32 = 1500;

/// Duration of the "pressed" variant after a card is activated.
pub const PRESS_FLASH_MS: u32 = 120;

/// Default number of grid columns in the terminal layout.
pub const DEFAULT_COLUMNS: u16 = 4;

/// Widest grid the terminal layout accepts.
pub const MAX_COLUMNS: u16 = 64;

/// Unique card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single card of the deck.
///
/// `src` is the content identifier shown when the card is face-up; it is
/// also the matching key. `is_hidden` is the only source of truth for
/// face-up/face-down rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub src: String,
    #[serde(default, rename = "isHidden", alias = "is_hidden")]
    pub is_hidden: bool,
}

impl Card {
    /// Create a face-up card.
    pub fn new(id: u32, src: impl Into<String>) -> Self {
        Self {
            id: CardId(id),
            src: src.into(),
            is_hidden: false,
        }
    }

    /// Builder-style helper to start the card face-down.
    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }

    pub fn flip(&mut self) {
        self.is_hidden = !self.is_hidden;
    }
}

/// Style category of a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStyle {
    #[default]
    Default,
    /// Highlight applied around a (possible) match.
    Success,
}

impl CardStyle {
    /// Class-list string of the style category.
    ///
    /// ```
    /// use tui_pairs_types::CardStyle;
    ///
    /// assert_eq!(CardStyle::Default.as_str(), "img");
    /// assert_eq!(CardStyle::Success.as_str(), "img success");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStyle::Default => "img",
            CardStyle::Success => "img success",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CardStyle::Success)
    }
}

/// Finite set of visual states a card can be in.
///
/// This is what the controller hands to a renderer; the renderer maps each
/// state onto its own transition primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardVisual {
    FaceDown,
    FaceUp,
    FaceUpSuccess,
    /// No longer in the deck.
    Removed,
}

/// Game actions that can be applied to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Activate (flip) the card with the given id.
    Select(CardId),
    /// Toggle the side panel. No effect on the game itself.
    TogglePanel,
    /// Re-initialize the game with a freshly shuffled deck.
    Restart,
}

impl GameAction {
    /// Parse an id-less action from its camelCase name.
    ///
    /// `Select` carries a card id and has no textual form.
    ///
    /// ```
    /// use tui_pairs_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("TOGGLEPANEL"), Some(GameAction::TogglePanel));
    /// assert_eq!(GameAction::from_str("select"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "togglepanel" => Some(GameAction::TogglePanel),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::TogglePanel => "togglePanel",
            GameAction::Restart => "restart",
        }
    }
}

/// Cursor movement direction on the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Front-end command produced by the input layer.
///
/// The loop resolves `Activate` into [`GameAction::Select`] using the
/// card under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    Move(Direction),
    Activate,
    TogglePanel,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(REVEAL_DELAY_MS, 3000);
        assert_eq!(UNDO_DELAY_MS, 1000);
        assert_eq!(MATCH_DELAY_MS, 1500);
        assert_eq!(TICK_MS, 16);
    }

    #[test]
    fn flip_toggles_hidden() {
        let mut card = Card::new(7, "moon");
        card.flip();
        assert!(card.is_hidden);
        card.flip();
        assert!(!card.is_hidden);
    }

    #[test]
    fn card_id_display() {
        assert_eq!(CardId(12).to_string(), "#12");
    }
}
