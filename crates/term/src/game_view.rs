//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: a status line, then either the card grid or, once
//! the table is empty, the win badge. The help panel sits to the right of the
//! grid when the viewport is wide enough.

use crate::core::{CardSnapshot, GameSnapshot};
use crate::fb::{BorderGlyphs, CellStyle, FrameBuffer, Rgb};
use crate::motion::{item_variant, ItemVariant, PanelVariant, WinPose};
use crate::types::{CardId, CardVisual, MAX_COLUMNS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Front-end state that is not part of the game: where the cursor is and
/// which card was activated last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Deck index under the cursor.
    pub cursor: Option<usize>,
    /// Last activated card and the episode clock at activation.
    pub pressed: Option<(CardId, u64)>,
}

const STATUS_ROWS: u16 = 2;
const PANEL_GAP: u16 = 3;

const HELP_LINES: [&str; 5] = [
    "arrows  move",
    "space   flip",
    "p       panel",
    "r       restart",
    "q       quit",
];
/// Panel box size at scale 1.
const PANEL_FULL_W: u16 = 40;
const PANEL_FULL_H: u16 = 14;

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const MUTED: CellStyle = CellStyle::fg(Rgb::new(140, 140, 150));
const TITLE: CellStyle = CellStyle::fg(Rgb::new(240, 200, 90)).bold();
const CARD_EDGE: CellStyle = CellStyle::fg(Rgb::new(170, 170, 180));
const CARD_BACK: CellStyle = CellStyle::fg(Rgb::new(235, 235, 235)).on(Rgb::new(60, 60, 70));
const CARD_FACE: CellStyle = CellStyle::fg(Rgb::new(120, 200, 240)).bold();
const SUCCESS: CellStyle = CellStyle::fg(Rgb::new(100, 220, 120)).bold();
const CURSOR: CellStyle = CellStyle::fg(Rgb::new(255, 210, 60)).bold();

/// A lightweight terminal renderer for the card table.
pub struct GameView {
    card_w: u16,
    card_h: u16,
    gap: u16,
    columns: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 10,
            card_h: 5,
            gap: 1,
            columns: 4,
        }
    }
}

impl GameView {
    pub fn new(columns: u16) -> Self {
        Self {
            columns: columns.clamp(1, MAX_COLUMNS),
            ..Self::default()
        }
    }

    pub fn with_card_size(mut self, card_w: u16, card_h: u16) -> Self {
        // A pressed card is drawn two columns narrower.
        self.card_w = card_w.clamp(5, 64);
        self.card_h = card_h.clamp(3, 32);
        self
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Size of the full grid for `count` cards, in cells.
    pub fn grid_size(&self, count: usize) -> (u16, u16) {
        let cols = count.min(self.columns as usize) as u16;
        let rows = u16::try_from(count.div_ceil(self.columns as usize)).unwrap_or(u16::MAX);
        let span = |n: u16, size: u16| {
            n.saturating_mul(size)
                .saturating_add(n.saturating_sub(1).saturating_mul(self.gap))
        };
        (span(cols, self.card_w), span(rows, self.card_h))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        view: &ViewState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        self.draw_status(fb, snap);

        // Grid width is fixed by the full column count so the table does not
        // jump sideways as pairs disappear.
        let (full_w, _) = self.grid_size(self.columns as usize);
        let panel_w = self.panel_size(snap).0;
        let total_w = if panel_w > 0 {
            full_w.saturating_add(PANEL_GAP).saturating_add(panel_w)
        } else {
            full_w
        };
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = STATUS_ROWS;

        if snap.won {
            self.draw_win(fb, snap, viewport, start_y);
        } else {
            for (index, card) in snap.cards.iter().enumerate() {
                self.draw_card(fb, snap, view, index, card, (start_x, start_y));
            }
        }

        if panel_w > 0 {
            let panel_x = start_x.saturating_add(full_w).saturating_add(PANEL_GAP);
            self.draw_panel(fb, snap, viewport, panel_x, start_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, view: &ViewState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, view, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let x = fb.put_str(1, 0, "PAIRS", TITLE) + 2;
        if snap.won {
            fb.put_str(x, 0, "table cleared", SUCCESS);
        } else if !snap.ready {
            let x = fb.put_str(x, 0, "memorize! ", TEXT);
            let secs = snap.reveal_remaining_ms.div_ceil(1000) as u32;
            let x = fb.put_u32(x, 0, secs, TEXT);
            fb.put_char(x, 0, 's', TEXT);
        } else {
            let x = fb.put_str(x, 0, "pairs left ", TEXT);
            let x = fb.put_u32(x, 0, snap.remaining_pairs(), TEXT);
            fb.put_char(x, 0, '/', MUTED);
            fb.put_u32(x + 1, 0, snap.total_pairs, MUTED);
        }
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        view: &ViewState,
        index: usize,
        card: &CardSnapshot,
        (start_x, start_y): (u16, u16),
    ) {
        let pressed_at = view
            .pressed
            .filter(|(id, _)| *id == card.id)
            .map(|(_, at)| at);
        let variant = item_variant(index, snap.clock_ms, pressed_at);
        if !variant.is_drawn() {
            return;
        }

        let cols = self.columns as usize;
        let col = (index % cols) as u16;
        let row = u16::try_from(index / cols).unwrap_or(u16::MAX);
        let mut x = start_x.saturating_add(col.saturating_mul(self.card_w + self.gap));
        let y = start_y
            .saturating_add(row.saturating_mul(self.card_h + self.gap))
            .saturating_add(variant.offset_rows());
        // Off-screen cards are skipped.
        if x >= fb.width() || y >= fb.height() {
            return;
        }
        let mut w = self.card_w;
        if variant == ItemVariant::Pressed {
            x += 1;
            w -= 2;
        }

        let is_cursor = view.cursor == Some(index);
        let (glyphs, edge) = match (is_cursor, card.visual) {
            (true, _) => (BorderGlyphs::DOUBLE, CURSOR),
            (false, CardVisual::FaceUpSuccess) => (BorderGlyphs::HEAVY, SUCCESS),
            _ => (BorderGlyphs::SQUARE, CARD_EDGE),
        };
        fb.draw_box(x, y, w, self.card_h, glyphs, edge);

        let (inner_x, inner_y) = (x.saturating_add(1), y.saturating_add(1));
        let (inner_w, inner_h) = (w.saturating_sub(2), self.card_h.saturating_sub(2));
        match card.visual {
            CardVisual::FaceDown => {
                fb.fill_rect(inner_x, inner_y, inner_w, inner_h, '░', CARD_BACK);
            }
            CardVisual::FaceUp | CardVisual::FaceUpSuccess => {
                let face = if card.visual == CardVisual::FaceUpSuccess {
                    SUCCESS
                } else {
                    CARD_FACE
                };
                fb.put_str_centered(inner_x, inner_y.saturating_add(inner_h / 2), inner_w, &card.src, face);
            }
            CardVisual::Removed => {}
        }
    }

    fn draw_win(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, start_y: u16) {
        const TEXT_WON: &str = "You won";

        let pose = WinPose::at(snap.since_won_ms().unwrap_or(0));
        let spacing = pose.letter_spacing();
        let letters = TEXT_WON.chars().count() as u16;
        let run = letters + (letters - 1) * spacing;

        let (inner_w, inner_h) = if pose.is_vertical() { (1, run) } else { (run, 1) };
        let (box_w, box_h) = (inner_w + 4, inner_h + 2);

        let area_h = viewport.height.saturating_sub(start_y);
        let x = viewport.width.saturating_sub(box_w) / 2;
        let y = start_y + area_h.saturating_sub(box_h + 2) / 2;

        let glyphs = if pose.is_rounded() {
            BorderGlyphs::ROUNDED
        } else {
            BorderGlyphs::SQUARE
        };
        fb.draw_box(x, y, box_w, box_h, glyphs, SUCCESS);

        let step = spacing + 1;
        for (i, ch) in TEXT_WON.chars().enumerate() {
            let offset = i as u16 * step;
            if pose.is_vertical() {
                // A 270° turn reads bottom to top.
                fb.put_char(x + 2, y + inner_h - offset, ch, TITLE);
            } else {
                fb.put_char(x + 2 + offset, y + 1, ch, TITLE);
            }
        }

        fb.put_str_centered(0, y + box_h + 1, viewport.width, "press r to play again", MUTED);
    }

    /// Panel box size for the current variant, `(0, 0)` when collapsed.
    fn panel_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let scale = PanelVariant::for_open(snap.panel_open).scale();
        let w = (PANEL_FULL_W as f32 * scale).round() as u16;
        let h = (PANEL_FULL_H as f32 * scale).round() as u16;
        if w < 3 || h < 3 {
            (0, 0)
        } else {
            (w, h)
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) {
        let (w, h) = self.panel_size(snap);
        if x.saturating_add(w) > viewport.width {
            return;
        }
        fb.draw_box(x, y, w, h, BorderGlyphs::ROUNDED, MUTED);
        // One blank column of padding on each side.
        let text_w = w.saturating_sub(4) as usize;
        for (i, line) in HELP_LINES.iter().enumerate().take((h - 2) as usize) {
            let row = y + 1 + i as u16;
            for (dx, ch) in line.chars().take(text_w).enumerate() {
                fb.put_char(x + 2 + dx as u16, row, ch, TEXT);
            }
        }
    }
}
