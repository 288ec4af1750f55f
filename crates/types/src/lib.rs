//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, device renderer, terminal UI).
//!
//! # Display geometry
//!
//! The original hardware drives a 64x64 monochrome display whose framebuffer
//! is written one byte at a time: each byte covers an 8-pixel horizontal run
//! of a single pixel row. A board cell is an 8x8 pixel tile, so the playfield
//! is 8x8 cells and a full frame is exactly `FRAME_BYTES` bytes.
//!
//! # Buttons
//!
//! The control pad reports a bitmask per poll. A mask decodes to a direction
//! only when it is *exactly* one recognized button; anything else (no button,
//! multiple buttons, unknown bits) decodes to no direction and the tick is a
//! no-op.
//!
//! # Examples
//!
//! ```
//! use tui_blocker_types::{Direction, BUTTON_LEFT, BUTTON_UP, BOARD_WIDTH};
//!
//! assert_eq!(Direction::from_buttons(BUTTON_LEFT), Some(Direction::Left));
//! // Two buttons at once match no single-button pattern.
//! assert_eq!(Direction::from_buttons(BUTTON_LEFT | BUTTON_UP), None);
//! assert_eq!(BOARD_WIDTH, 8);
//! ```

/// Display width in pixels.
pub const SCREEN_WIDTH: usize = 64;

/// Display height in pixels.
pub const SCREEN_HEIGHT: usize = 64;

/// Pixel rows covered by one board cell (and pixels per frame byte).
pub const TILE_SIZE: usize = 8;

/// Board width in cells (screen width / tile size).
pub const BOARD_WIDTH: i8 = (SCREEN_WIDTH / TILE_SIZE) as i8;

/// Board height in cells (screen height / tile size).
pub const BOARD_HEIGHT: i8 = (SCREEN_HEIGHT / TILE_SIZE) as i8;

/// Bytes in one full frame: one byte per (cell column, sub-row) pair.
pub const FRAME_BYTES: usize = SCREEN_WIDTH * SCREEN_HEIGHT / 8;

/// Number of rocks in the level.
pub const NUM_ROCKS: usize = 4;

/// Capacity of the rock collection (fixed at level start, never exceeded).
pub const MAX_ROCKS: usize = 8;

/// Input poll interval for the terminal host, in milliseconds.
pub const TICK_MS: u64 = 16;

/// Frame byte for an empty pixel run.
pub const TILE_WHITE: u8 = 0x00;

/// Frame byte with only the outermost pixels set (rock body rows).
pub const TILE_GREY: u8 = 0b1000_0001;

/// Frame byte with every pixel set.
pub const TILE_BLACK: u8 = 0xFF;

/// Control pad button bits.
pub const BUTTON_UP: u8 = 0b0001;
pub const BUTTON_DOWN: u8 = 0b0010;
pub const BUTTON_LEFT: u8 = 0b0100;
pub const BUTTON_RIGHT: u8 = 0b1000;

/// A cell position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The position one cell away in the given direction.
    ///
    /// May be out of bounds; callers are expected to check.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Decode a button mask into a direction.
    ///
    /// Matches the original pad decoding: each recognized pattern is exactly
    /// one button, tried in the fixed order UP, DOWN, LEFT, RIGHT. A mask
    /// that is not exactly one recognized button decodes to `None`.
    pub fn from_buttons(mask: u8) -> Option<Self> {
        match mask {
            BUTTON_UP => Some(Direction::Up),
            BUTTON_DOWN => Some(Direction::Down),
            BUTTON_LEFT => Some(Direction::Left),
            BUTTON_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    /// The (dx, dy) cell offset for this direction.
    ///
    /// Positive y points down, matching the display's row order.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The button mask that decodes to this direction.
    pub fn to_buttons(self) -> u8 {
        match self {
            Direction::Up => BUTTON_UP,
            Direction::Down => BUTTON_DOWN,
            Direction::Left => BUTTON_LEFT,
            Direction::Right => BUTTON_RIGHT,
        }
    }

    /// Parse from a single script character (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Result of one resolved move.
///
/// Illegal moves are not errors: the state is simply left untouched and the
/// outcome says why. `OutOfBounds` is the one case that also suppresses the
/// redraw for the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player's own target cell was outside the board; nothing changed.
    OutOfBounds,
    /// The target cell held a rock that could not be pushed; nothing changed.
    Blocked,
    /// The player moved into an empty cell.
    Moved,
    /// The player moved and pushed a rock one cell further.
    Pushed,
}

impl MoveOutcome {
    /// Whether this tick redraws the display.
    ///
    /// The original refreshes whenever the player's target cell passed the
    /// bounds check, including on a failed push, but not when the target was
    /// out of bounds. That asymmetry is kept as-is.
    pub fn needs_redraw(self) -> bool {
        !matches!(self, MoveOutcome::OutOfBounds)
    }

    /// Whether the player actually changed cell.
    pub fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::Pushed)
    }
}
