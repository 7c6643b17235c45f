//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! The first frame (and the first frame after [`TerminalRenderer::invalidate`]
//! or a resize) is a full redraw; later frames only rewrite the runs of cells
//! that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    prev: FrameBuffer,
    full_redraw: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            prev: FrameBuffer::new(0, 0),
            full_redraw: true,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale contents the caller is expected to
    /// overwrite; this keeps the steady state allocation-free.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let resized = self.prev.width() != fb.width() || self.prev.height() != fb.height();

        self.buf.clear();
        if self.full_redraw || resized {
            encode_full_into(fb, &mut self.buf)?;
            self.full_redraw = false;
        } else {
            encode_diff_into(&self.prev, fb, &mut self.buf)?;
        }
        self.flush_buf()?;

        std::mem::swap(&mut self.prev, fb);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(fb, 0, y, fb.width(), &mut style, out)?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        encode_run(next, x, y, len, &mut style, out)?;
    }

    if style.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn encode_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Runs of horizontally adjacent changed cells, as `(x, y, len)`.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    let (w, h) = (next.width(), next.height());
    for y in 0..h {
        let mut start = None;
        for x in 0..=w {
            let changed = x < w && prev.get(x, y) != next.get(x, y);
            match (changed, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn put(fb: &mut FrameBuffer, x: u16, ch: char) {
        fb.set(
            x,
            0,
            Cell {
                ch,
                style: CellStyle::default(),
            },
        );
    }

    #[test]
    fn test_changed_runs_coalesce() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        for x in 1..=3 {
            put(&mut b, x, 'X');
        }
        put(&mut b, 5, 'Y');

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 0, 1)]);
        assert!(changed_runs(&b, &b).is_empty());
    }

    #[test]
    fn test_identical_frames_encode_nothing() {
        let fb = FrameBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&fb, &fb, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_full_frame_prints_every_cell() {
        let mut fb = FrameBuffer::new(3, 1);
        put(&mut fb, 0, 'a');
        put(&mut fb, 2, 'c');
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("a c"));
    }

    #[test]
    fn test_draw_swap_diffs_after_first_frame() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(4, 1);
        put(&mut fb, 0, 'a');
        renderer.draw_swap(&mut fb).unwrap();
        let first = renderer.writer().len();
        assert!(first > 0);

        // Same contents again: nothing to write.
        let mut same = FrameBuffer::new(4, 1);
        put(&mut same, 0, 'a');
        renderer.draw_swap(&mut same).unwrap();
        assert_eq!(renderer.writer().len(), first);

        let mut changed = FrameBuffer::new(4, 1);
        put(&mut changed, 0, 'a');
        put(&mut changed, 3, 'z');
        renderer.draw_swap(&mut changed).unwrap();
        let written = &renderer.writer()[first..];
        assert!(String::from_utf8_lossy(written).contains('z'));
    }

    #[test]
    fn test_invalidate_forces_full_redraw() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(2, 1);
        renderer.draw_swap(&mut fb).unwrap();
        let first = renderer.writer().len();

        renderer.invalidate();
        let mut again = FrameBuffer::new(2, 1);
        renderer.draw_swap(&mut again).unwrap();
        assert_eq!(renderer.writer().len(), first * 2);
    }
}
