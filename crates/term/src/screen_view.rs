//! ScreenView: maps the reassembled display bitmap into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each braille glyph packs a 2x4 pixel block, so the 64x64 panel fits in a
//! 32x16 character grid and the whole view sits comfortably inside a
//! standard 80x24 terminal.

use crate::fb::{FrameBuffer, Rgb, Style};
use crate::video::Bitmap;
use tui_blocker_types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Character columns covered by the panel.
pub const GRID_COLS: u16 = (SCREEN_WIDTH / 2) as u16;

/// Character rows covered by the panel.
pub const GRID_ROWS: u16 = (SCREEN_HEIGHT / 4) as u16;

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

/// Braille dot offsets: (dx, dy, bit) within a 2x4 pixel block.
const BRAILLE_DOTS: [(usize, usize, u32); 8] = [
    (0, 0, 0x01),
    (0, 1, 0x02),
    (0, 2, 0x04),
    (1, 0, 0x08),
    (1, 1, 0x10),
    (1, 2, 0x20),
    (0, 3, 0x40),
    (1, 3, 0x80),
];

/// A lightweight terminal view of the display panel.
pub struct ScreenView {
    ink: Style,
    frame: Style,
    label: Style,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self {
            ink: Style {
                fg: Rgb::new(235, 235, 235),
                bg: Rgb::new(10, 10, 14),
            },
            frame: Style {
                fg: Rgb::new(140, 140, 150),
                bg: Rgb::new(0, 0, 0),
            },
            label: Style {
                fg: Rgb::new(180, 180, 190),
                bg: Rgb::new(0, 0, 0),
            },
        }
    }
}

impl ScreenView {
    /// Render a bitmap and the move counter into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully rewritten.
    pub fn render_into(&self, bitmap: &Bitmap, moves: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let frame_w = GRID_COLS + 2;
        let frame_h = GRID_ROWS + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // One row under the box is reserved for the status line.
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);
        self.draw_title(fb, start_x, start_y, frame_w);

        for cy in 0..GRID_ROWS {
            for cx in 0..GRID_COLS {
                let glyph = braille_glyph(bitmap, cx as usize * 2, cy as usize * 4);
                fb.put_char(start_x + 1 + cx, start_y + 1 + cy, glyph, self.ink);
            }
        }

        self.draw_status(fb, moves, start_x, start_y + frame_h, frame_w);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, bitmap: &Bitmap, moves: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(bitmap, moves, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', self.frame);
        fb.put_char(x + w - 1, y, '┐', self.frame);
        fb.put_char(x, y + h - 1, '└', self.frame);
        fb.put_char(x + w - 1, y + h - 1, '┘', self.frame);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', self.frame);
            fb.put_char(x + dx, y + h - 1, '─', self.frame);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', self.frame);
            fb.put_char(x + w - 1, y + dy, '│', self.frame);
        }
    }

    fn draw_title(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16) {
        let title = " BLOCKER ";
        let tw = title.chars().count() as u16;
        if tw + 2 <= w {
            fb.put_str(x + (w - tw) / 2, y, title, self.label);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, moves: u32, x: u16, y: u16, w: u16) {
        let mut line = format!("moves {moves}");
        let help = "r reset  q quit";
        let pad = (w as usize).saturating_sub(line.chars().count() + help.len());
        line.extend(std::iter::repeat(' ').take(pad));
        line.push_str(help);
        fb.put_str(x, y, &line, self.label);
    }
}

fn braille_glyph(bitmap: &Bitmap, px: usize, py: usize) -> char {
    let mut bits = 0u32;
    for (dx, dy, bit) in BRAILLE_DOTS {
        if bitmap.get(px + dx, py + dy) {
            bits |= bit;
        }
    }
    // 0x2800..=0x28FF is always a valid scalar value.
    char::from_u32(0x2800 + bits).unwrap_or(' ')
}
