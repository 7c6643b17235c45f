//! Game state module - the pairs controller
//!
//! Owns the deck, the in-progress turn and the timed reveal/hide/remove
//! sequencing. All mutation happens through [`GameState::select_card`],
//! [`GameState::tick`] and [`GameState::apply_action`]; there is no I/O here.
//!
//! A turn goes like this:
//!
//! 1. the first activated card flips face-up and is held as the first selection;
//! 2. the second activated card flips face-up and the pair is judged:
//!    - **match**: `match_success` is raised and both cards are removed
//!      after the match delay;
//!    - **mismatch**: the selections are released at once and both cards are
//!      flipped back after the undo delay.
//!
//! Delayed actions are [`Scheduler`] tasks that capture card ids only, so a
//! task whose card is already gone simply does nothing.

use arrayvec::ArrayVec;

use crate::config::Timings;
use crate::rng::SimpleRng;
use crate::scheduler::Scheduler;
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::types::{Card, CardId, CardStyle, CardVisual, GameAction};

/// Delayed action of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    /// End of the startup peek: flip every card, accept input.
    Reveal,
    /// Flip the given cards. A card picked again while its hide is pending
    /// ends face-up, matching its held selection.
    Hide(ArrayVec<CardId, 2>),
    /// Take a matched pair off the table and close the turn.
    Remove(ArrayVec<CardId, 2>),
}

/// Equality rule for a turn.
///
/// Two selections match only when there is a first selection, the ids differ
/// and the faces are the same. Picking the same card twice is a mismatch.
pub fn cards_match(first: Option<&Card>, second: &Card) -> bool {
    match first {
        Some(first) => first.id != second.id && first.src == second.src,
        None => false,
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    deck: Vec<Card>,
    first_selection: Option<Card>,
    second_selection: Option<Card>,
    ready: bool,
    match_success: bool,
    panel_open: bool,
    /// Undealt card list; every episode is dealt from it.
    initial: Vec<Card>,
    shuffle_on_deal: bool,
    rng: SimpleRng,
    seed: u32,
    timings: Timings,
    scheduler: Scheduler<Task>,
    /// Scheduler time at which the current episode was dealt.
    episode_start_ms: u64,
    won_at_ms: Option<u64>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Deal a shuffled copy of `initial` and schedule the startup reveal.
    pub fn new(initial: Vec<Card>, seed: u32, timings: Timings) -> Self {
        Self::build(initial, seed, timings, true)
    }

    /// Deal `initial` in the given order.
    ///
    /// Useful for scripted scenarios where the layout must be known.
    pub fn unshuffled(initial: Vec<Card>, timings: Timings) -> Self {
        Self::build(initial, 1, timings, false)
    }

    fn build(initial: Vec<Card>, seed: u32, timings: Timings, shuffle_on_deal: bool) -> Self {
        let mut state = Self {
            deck: Vec::new(),
            first_selection: None,
            second_selection: None,
            ready: false,
            match_success: false,
            panel_open: false,
            initial,
            shuffle_on_deal,
            rng: SimpleRng::new(seed),
            seed,
            timings,
            scheduler: Scheduler::new(),
            episode_start_ms: 0,
            won_at_ms: None,
            episode_id: 0,
        };
        state.deal();
        state
    }

    fn deal(&mut self) {
        self.deck = if self.shuffle_on_deal {
            self.rng.shuffled(&self.initial)
        } else {
            self.initial.clone()
        };
        self.first_selection = None;
        self.second_selection = None;
        self.ready = false;
        self.match_success = false;
        self.won_at_ms = None;
        self.episode_start_ms = self.scheduler.now_ms();
        self.scheduler.schedule(self.timings.reveal_ms, Task::Reveal);
        log::info!(
            "episode {} dealt {} cards (reveal in {}ms)",
            self.episode_id,
            self.deck.len(),
            self.timings.reveal_ms
        );
        self.latch_win();
    }

    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    pub fn first_selection(&self) -> Option<&Card> {
        self.first_selection.as_ref()
    }

    pub fn second_selection(&self) -> Option<&Card> {
        self.second_selection.as_ref()
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn match_success(&self) -> bool {
        self.match_success
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn is_won(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    /// Milliseconds since the current episode was dealt.
    pub fn clock_ms(&self) -> u64 {
        self.scheduler.now_ms() - self.episode_start_ms
    }

    /// Episode clock value at which the deck became empty.
    pub fn won_at_ms(&self) -> Option<u64> {
        self.won_at_ms
    }

    /// Number of delayed actions still waiting to fire.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Activate a card.
    ///
    /// Returns `false` when the input is ignored: before the startup reveal
    /// has fired, or when `id` is not on the table.
    pub fn select_card(&mut self, id: CardId) -> bool {
        if !self.ready {
            log::trace!("ignoring {} before reveal", id);
            return false;
        }

        let Some(card) = self.deck.iter_mut().find(|c| c.id == id) else {
            log::trace!("ignoring {}: not on the table", id);
            return false;
        };
        let selected = card.clone();
        card.flip();

        match self.first_selection.clone() {
            None => {
                log::debug!("first selection {} ({})", selected.id, selected.src);
                self.first_selection = Some(selected);
            }
            Some(first) => {
                self.second_selection = Some(selected.clone());
                if cards_match(Some(&first), &selected) {
                    self.success_selection(&first, &selected);
                } else {
                    self.undo_selection(&first, &selected);
                }
            }
        }

        true
    }

    /// Mismatch: hide both cards later, release the turn now.
    fn undo_selection(&mut self, first: &Card, second: &Card) {
        log::debug!(
            "mismatch {} ({}) / {} ({})",
            first.id,
            first.src,
            second.id,
            second.src
        );
        let delay = self.timings.undo_ms;
        if first.id == second.id {
            let mut single = ArrayVec::new();
            single.push(first.id);
            self.scheduler.schedule(delay, Task::Hide(single));
        }
        self.scheduler
            .schedule(delay, Task::Hide(ArrayVec::from([first.id, second.id])));

        self.first_selection = None;
        self.second_selection = None;
    }

    /// Match: highlight now, remove the pair and close the turn later.
    fn success_selection(&mut self, first: &Card, second: &Card) {
        log::debug!("match {} / {} ({})", first.id, second.id, first.src);
        self.match_success = true;
        self.scheduler.schedule(
            self.timings.match_ms,
            Task::Remove(ArrayVec::from([first.id, second.id])),
        );
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::Reveal => {
                for card in &mut self.deck {
                    card.flip();
                }
                self.ready = true;
                log::info!("reveal finished, accepting input");
            }
            Task::Hide(ids) => {
                for card in self.deck.iter_mut().filter(|c| ids.contains(&c.id)) {
                    card.flip();
                }
            }
            Task::Remove(ids) => {
                self.deck.retain(|c| !ids.contains(&c.id));
                self.match_success = false;
                self.first_selection = None;
                self.second_selection = None;
                log::debug!("removed pair, {} cards left", self.deck.len());
                self.latch_win();
            }
        }
    }

    fn latch_win(&mut self) {
        if self.deck.is_empty() && self.won_at_ms.is_none() {
            let at = self.clock_ms();
            self.won_at_ms = Some(at);
            log::info!("episode {} won at {}ms", self.episode_id, at);
        }
    }

    /// Advance the game clock and run every delayed action that became due.
    ///
    /// Returns whether any action fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let due = self.scheduler.advance(elapsed_ms);
        if due.is_empty() {
            return false;
        }
        for task in due {
            self.run_task(task);
        }
        self.trace_snapshot();
        true
    }

    fn trace_snapshot(&self) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        match serde_json::to_string(&self.snapshot()) {
            Ok(json) => log::trace!("state {}", json),
            Err(e) => log::warn!("failed to serialize snapshot: {}", e),
        }
    }

    pub fn toggle_panel(&mut self) {
        self.panel_open = !self.panel_open;
    }

    /// Re-deal from the initial list and start a new episode.
    ///
    /// Every pending delayed action of the old episode is cancelled, so no
    /// stale hide or remove can touch the new deck.
    pub fn restart(&mut self) {
        let dropped = self.scheduler.cancel_all();
        if dropped > 0 {
            log::debug!("restart cancelled {} pending tasks", dropped);
        }
        self.episode_id = self.episode_id.wrapping_add(1);
        self.deal();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(id) => self.select_card(id),
            GameAction::TogglePanel => {
                self.toggle_panel();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Style category of a card.
    ///
    /// The second selection is styled as a success as soon as it is picked,
    /// before the outcome of the turn is known.
    pub fn style(&self, id: CardId) -> CardStyle {
        let first_hit =
            self.match_success && self.first_selection.as_ref().is_some_and(|c| c.id == id);
        let second_hit = self.second_selection.as_ref().is_some_and(|c| c.id == id);
        if first_hit || second_hit {
            CardStyle::Success
        } else {
            CardStyle::Default
        }
    }

    /// Visual state of a card, `Removed` when it is no longer on the table.
    pub fn card_visual(&self, id: CardId) -> CardVisual {
        match self.card(id) {
            None => CardVisual::Removed,
            Some(card) if card.is_hidden => CardVisual::FaceDown,
            Some(_) if self.style(id).is_success() => CardVisual::FaceUpSuccess,
            Some(_) => CardVisual::FaceUp,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend(self.deck.iter().map(|card| CardSnapshot {
            id: card.id,
            src: card.src.clone(),
            is_hidden: card.is_hidden,
            style: self.style(card.id),
            visual: self.card_visual(card.id),
        }));
        out.first_selection = self.first_selection.as_ref().map(|c| c.id);
        out.second_selection = self.second_selection.as_ref().map(|c| c.id);
        out.ready = self.ready;
        out.match_success = self.match_success;
        out.panel_open = self.panel_open;
        out.won = self.is_won();
        out.clock_ms = self.clock_ms();
        out.won_at_ms = self.won_at_ms;
        out.reveal_remaining_ms = if self.ready {
            0
        } else {
            (self.timings.reveal_ms as u64).saturating_sub(self.clock_ms())
        };
        out.total_pairs = (self.initial.len() / 2) as u32;
        out.episode_id = self.episode_id;
        out.pending_tasks = self.scheduler.len() as u32;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
