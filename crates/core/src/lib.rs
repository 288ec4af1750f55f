//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the authoritative game state and the move resolver.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: the same input sequence always produces the same state
//! - **Testable**: every rule and edge case is covered by unit tests
//! - **Portable**: runs identically in the terminal host and headless replay
//!
//! # Module Structure
//!
//! - [`state`]: player and rock positions, occupancy queries, move resolution
//! - [`snapshot`]: a plain `Copy` view of the state for renderers
//!
//! # Game Rules
//!
//! The board is 8x8 cells. The player moves one cell per tick in one of four
//! directions. Moving into a rock pushes it one cell further in the same
//! direction, but only if that destination is on the board and empty; a rock
//! can never push another rock. A move whose target cell is off the board is
//! rejected before the rock branch is ever consulted; the bounds check gates
//! everything else. Illegal moves leave the state fully untouched; there is
//! no error channel.
//!
//! # Example
//!
//! ```
//! use tui_blocker_core::GameState;
//! use tui_blocker_types::{Direction, MoveOutcome, Pos};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.player(), Pos::new(2, 2));
//!
//! // (3, 2) is empty in the stock level, so this is a plain move.
//! assert_eq!(game.try_move(Direction::Right), MoveOutcome::Moved);
//! assert_eq!(game.player(), Pos::new(3, 2));
//! ```

pub mod snapshot;
pub mod state;

pub use tui_blocker_types as types;

pub use snapshot::GameSnapshot;
pub use state::GameState;
