//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the pairs controller and everything it needs. It has
//! **no dependencies** on the terminal or any other I/O apart from reading a
//! deck file on request, which makes it:
//!
//! - **Deterministic**: the same seed deals the same deck
//! - **Testable**: time only advances through [`GameState::tick`]
//! - **Portable**: any front end can drive it from a snapshot
//!
//! # Module Structure
//!
//! - [`config`]: `PAIRS_*` environment configuration and delay timings
//! - [`deck`]: built-in card list, JSON deck loading and validation
//! - [`game_state`]: the selection state machine and timed reveal/hide/remove
//! - [`rng`]: seedable LCG with Fisher-Yates shuffling
//! - [`scheduler`]: cancellable one-shot delayed tasks on the game clock
//! - [`snapshot`]: serializable read-only view for renderers and logs
//!
//! # Example
//!
//! ```
//! use tui_pairs_core::{GameState, Timings};
//! use tui_pairs_types::{Card, CardId, GameAction};
//!
//! let cards = vec![Card::new(1, "x"), Card::new(2, "x")];
//! let mut game = GameState::unshuffled(cards, Timings::default());
//!
//! // Input is ignored during the startup peek.
//! assert!(!game.apply_action(GameAction::Select(CardId(1))));
//! game.tick(3000);
//!
//! game.apply_action(GameAction::Select(CardId(1)));
//! game.apply_action(GameAction::Select(CardId(2)));
//! assert!(game.match_success());
//!
//! game.tick(1500);
//! assert!(game.is_won());
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: call [`GameState::tick`] every frame with
//! the elapsed milliseconds. Scheduled actions fire on the tick that reaches
//! their due time.

pub mod config;
pub mod deck;
pub mod game_state;
pub mod rng;
pub mod scheduler;
pub mod snapshot;

pub use tui_pairs_types as types;

pub use config::{GameConfig, Timings};
pub use deck::{initial_cards, load_deck, parse_deck, validate_deck, DeckError};
pub use game_state::{cards_match, GameState};
pub use rng::SimpleRng;
pub use scheduler::{Scheduler, TaskHandle};
pub use snapshot::{CardSnapshot, GameSnapshot};
