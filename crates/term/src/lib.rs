//! Terminal presentation module.
//!
//! Responsibilities:
//!
//! - [`fb`]: a plain character framebuffer with a two-color style model
//! - [`renderer`]: raw-mode terminal output with changed-run diffing
//! - [`screen_view`]: the display panel drawn as braille pixel glyphs, with
//!   border and status line
//!
//! Game logic never appears here; the view consumes a reassembled
//! [`Bitmap`](tui_blocker_video::Bitmap) and a move counter.

pub mod fb;
pub mod renderer;
pub mod screen_view;

pub use tui_blocker_video as video;

pub use fb::{Cell, FrameBuffer, Rgb, Style};
pub use renderer::TerminalRenderer;
pub use screen_view::{ScreenView, Viewport, GRID_COLS, GRID_ROWS};
