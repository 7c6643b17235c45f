//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn on(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::fg(Rgb::new(220, 220, 220))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// Box-drawing glyph set: corners then edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderGlyphs {
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };
}

/// 2D grid of styled character cells. Writes outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize((width as usize) * (height as usize), Cell::default());
    }

    #[inline]
    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` left to right, clipped at the right edge. Returns the column
    /// after the last written char.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write `s` centered in the span `[x, x + w)`, truncated to fit.
    pub fn put_str_centered(&mut self, x: u16, y: u16, w: u16, s: &str, style: CellStyle) {
        let len = s.chars().count().min(w as usize) as u16;
        let start = x.saturating_add((w - len) / 2);
        for (i, ch) in s.chars().take(len as usize).enumerate() {
            self.put_char(start.saturating_add(i as u16), y, ch, style);
        }
    }

    pub fn put_u32(&mut self, x: u16, y: u16, v: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = v;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Outline a `w` x `h` rectangle. Boxes smaller than 2x2 are skipped.
    pub fn draw_box(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        glyphs: BorderGlyphs,
        style: CellStyle,
    ) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.put_char(x, y, glyphs.top_left, style);
        self.put_char(right, y, glyphs.top_right, style);
        self.put_char(x, bottom, glyphs.bottom_left, style);
        self.put_char(right, bottom, glyphs.bottom_right, style);
        for cx in x.saturating_add(1)..right {
            self.put_char(cx, y, glyphs.horizontal, style);
            self.put_char(cx, bottom, glyphs.horizontal, style);
        }
        for cy in y.saturating_add(1)..bottom {
            self.put_char(x, cy, glyphs.vertical, style);
            self.put_char(right, cy, glyphs.vertical, style);
        }
    }

    /// Characters of one row as a string.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }

    /// Whole buffer as text, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for y in 0..self.height {
            out.push_str(&self.row_text(y));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(5, 0, 'x', CellStyle::default());
        fb.put_char(0, 9, 'x', CellStyle::default());
        assert_eq!(fb.to_text(), "   \n   \n");
        assert!(fb.get(3, 0).is_none());
    }

    #[test]
    fn test_put_str_clips() {
        let mut fb = FrameBuffer::new(4, 1);
        let end = fb.put_str(1, 0, "hello", CellStyle::default());
        assert_eq!(end, 4);
        assert_eq!(fb.row_text(0), " hel");
    }

    #[test]
    fn test_put_str_centered() {
        let mut fb = FrameBuffer::new(9, 1);
        fb.put_str_centered(1, 0, 7, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "   abc   ");

        fb.put_str_centered(0, 0, 2, "wide", CellStyle::default());
        assert_eq!(&fb.row_text(0)[..2], "wi");
    }

    #[test]
    fn test_put_u32() {
        let mut fb = FrameBuffer::new(12, 1);
        let end = fb.put_u32(0, 0, 4096, CellStyle::default());
        assert_eq!(end, 4);
        fb.put_u32(6, 0, 0, CellStyle::default());
        assert_eq!(fb.row_text(0), "4096  0     ");
    }

    #[test]
    fn test_draw_box() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_box(0, 0, 4, 3, BorderGlyphs::ROUNDED, CellStyle::default());
        assert_eq!(fb.to_text(), "╭──╮\n│  │\n╰──╯\n");
    }

    #[test]
    fn test_resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(5, 3);
        assert_eq!((fb.width(), fb.height()), (5, 3));
        assert_eq!(fb.to_text().lines().count(), 3);
    }
}
