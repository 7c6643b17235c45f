//! Terminal pairs runner (default binary).
//!
//! Reads `PAIRS_*` configuration from the environment, deals a deck and runs
//! a fixed-timestep loop: render, poll input until the next tick, tick.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_pairs::core::{initial_cards, load_deck, GameConfig, GameSnapshot, GameState};
use tui_pairs::input::{map_key, should_quit, Cursor};
use tui_pairs::term::{FrameBuffer, GameView, TerminalRenderer, ViewState, Viewport};
use tui_pairs::types::{Card, CardId, GameAction, UiCommand, TICK_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let cards = load_cards(&config)?;
    log::info!(
        "starting: seed={} columns={} timings={:?}",
        config.seed,
        config.columns,
        config.timings
    );
    let mut game = GameState::new(cards, config.seed, config.timings);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, config.columns);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("game loop failed: {:#}", e);
    }
    result
}

/// Log to a file when `PAIRS_LOG_PATH` is set; the terminal belongs to the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_cards(config: &GameConfig) -> Result<Vec<Card>> {
    match &config.deck_path {
        Some(path) => load_deck(path).context("failed to load deck"),
        None => Ok(initial_cards()),
    }
}

fn run(term: &mut TerminalRenderer, game: &mut GameState, columns: u16) -> Result<()> {
    let view = GameView::new(columns);
    let mut cursor = Cursor::new(columns);
    let mut pressed: Option<(CardId, u64)> = None;

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let len = snap.cards.len();
        cursor.clamp(len);
        let view_state = ViewState {
            cursor: cursor.index(len),
            pressed,
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &view_state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(UiCommand::Move(dir)) => cursor.step(dir, len),
                        Some(UiCommand::Activate) if snap.playable() => {
                            let target = cursor.index(len).and_then(|i| snap.card_at(i));
                            if let Some(card) = target {
                                let id = card.id;
                                if game.apply_action(GameAction::Select(id)) {
                                    pressed = Some((id, game.clock_ms()));
                                }
                            }
                        }
                        Some(UiCommand::TogglePanel) => {
                            game.apply_action(GameAction::TogglePanel);
                        }
                        Some(UiCommand::Restart) => {
                            game.apply_action(GameAction::Restart);
                            cursor.reset();
                            pressed = None;
                        }
                        _ => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
