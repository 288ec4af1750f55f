//! Headless tick driver.
//!
//! One tick is: poll the pad, decode the mask, resolve at most one move, and
//! redraw only when the outcome calls for it. The interactive binary follows
//! the same policy but reads the pad from terminal events; this driver is
//! what replay and the integration tests run.

use tui_blocker_core::GameState;
use tui_blocker_input::InputSource;
use tui_blocker_types::{Direction, MoveOutcome};
use tui_blocker_video::{draw_frame, DisplaySink};

pub struct Session<I> {
    game: GameState,
    pad: I,
}

impl<I: InputSource> Session<I> {
    pub fn new(pad: I) -> Self {
        Self {
            game: GameState::new(),
            pad,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn pad(&self) -> &I {
        &self.pad
    }

    /// Run one tick.
    ///
    /// Returns `None` when the poll produced no recognized single button: no
    /// move is attempted and nothing is drawn. Otherwise the move is
    /// resolved and, unless the player's target cell was out of bounds, a
    /// full frame is emitted to the sink - a blocked push still redraws.
    pub fn tick(&mut self, sink: &mut impl DisplaySink) -> Option<MoveOutcome> {
        let mask = self.pad.poll();
        let dir = Direction::from_buttons(mask)?;
        let outcome = self.game.try_move(dir);
        if outcome.needs_redraw() {
            draw_frame(&self.game.snapshot(), sink);
        }
        Some(outcome)
    }

    /// Emit a frame for the current state unconditionally.
    ///
    /// Host plumbing (frame zero, reset) - not part of the tick policy.
    pub fn render(&self, sink: &mut impl DisplaySink) {
        draw_frame(&self.game.snapshot(), sink);
    }
}
