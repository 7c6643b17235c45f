use serde::Serialize;

use crate::types::{CardId, CardStyle, CardVisual};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CardSnapshot {
    pub id: CardId,
    pub src: String,
    pub is_hidden: bool,
    pub style: CardStyle,
    pub visual: CardVisual,
}

/// Read-only view of the controller, in deck order.
///
/// This is everything a renderer needs; it is also what gets written to the
/// trace log as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub first_selection: Option<CardId>,
    pub second_selection: Option<CardId>,
    pub ready: bool,
    pub match_success: bool,
    pub panel_open: bool,
    pub won: bool,
    pub clock_ms: u64,
    pub won_at_ms: Option<u64>,
    pub reveal_remaining_ms: u64,
    pub total_pairs: u32,
    pub episode_id: u32,
    pub pending_tasks: u32,
}

impl GameSnapshot {
    pub fn card(&self, id: CardId) -> Option<&CardSnapshot> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn card_at(&self, index: usize) -> Option<&CardSnapshot> {
        self.cards.get(index)
    }

    pub fn remaining_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    /// Whether card input is currently accepted.
    pub fn playable(&self) -> bool {
        self.ready && !self.won
    }

    /// Milliseconds since the win, if the game is won.
    pub fn since_won_ms(&self) -> Option<u64> {
        self.won_at_ms.map(|at| self.clock_ms.saturating_sub(at))
    }
}
