//! Device-format renderer (engine-facing).
//!
//! This crate speaks the original display controller's wire format: a frame
//! is an ordered stream of `FRAME_BYTES` bytes, one byte per 8-pixel run of a
//! pixel row, emitted in a single forward pass. Everything here is pure
//! computation over a [`GameSnapshot`]; the terminal front end decides how to
//! present the stream.

pub mod bitmap;
pub mod frame;

pub use tui_blocker_core as core;
pub use tui_blocker_types as types;

pub use bitmap::Bitmap;
pub use frame::{draw_frame, DisplaySink};
