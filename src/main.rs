//! Terminal blocker runner (default binary).
//!
//! This is the interactive gameplay entrypoint. It uses crossterm for input
//! and the custom framebuffer-based renderer in `tui-blocker-term`.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_blocker::core::GameState;
use tui_blocker::input::{buttons_from_key, should_quit, should_reset};
use tui_blocker::term::{FrameBuffer, ScreenView, TerminalRenderer, Viewport};
use tui_blocker::types::{Direction, TICK_MS};
use tui_blocker::video::{draw_frame, Bitmap};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = ScreenView::default();
    let mut screen = Bitmap::new();
    let mut fb = FrameBuffer::new(0, 0);

    // The device original draws nothing until the first in-bounds move; a
    // terminal host needs a frame zero or the alternate screen stays blank.
    draw_frame(&game.snapshot(), &mut screen);
    present(term, &view, &screen, game.moves(), &mut fb)?;

    loop {
        if !event::poll(Duration::from_millis(TICK_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                if should_reset(key) {
                    game.reset();
                    draw_frame(&game.snapshot(), &mut screen);
                    present(term, &view, &screen, game.moves(), &mut fb)?;
                    continue;
                }

                // Poll, decode, resolve, and redraw only when the outcome
                // calls for it: a blocked push redraws, an out-of-bounds
                // target does not, an unrecognized mask is a no-op tick.
                if let Some(dir) = Direction::from_buttons(buttons_from_key(key)) {
                    let outcome = game.try_move(dir);
                    if outcome.needs_redraw() {
                        draw_frame(&game.snapshot(), &mut screen);
                        present(term, &view, &screen, game.moves(), &mut fb)?;
                    }
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                present(term, &view, &screen, game.moves(), &mut fb)?;
            }
            _ => {}
        }
    }
}

fn present(
    term: &mut TerminalRenderer,
    view: &ScreenView,
    screen: &Bitmap,
    moves: u32,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(screen, moves, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}
