//! Button-pad input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` key mapping. It models the original four-button pad as a
//! polled bitmask source ([`InputSource`]), provides a scripted pad for
//! headless runs and tests, and maps terminal key events onto button masks.

pub mod map;
pub mod source;

pub use tui_blocker_types as types;

pub use map::{buttons_from_key, should_quit, should_reset};
pub use source::{InputSource, ScriptedPad};
