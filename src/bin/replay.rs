//! Headless replay runner.
//!
//! Feeds a button script through the exact tick policy and prints the final
//! frame as ASCII art plus a short summary. Useful for reproducing move
//! sequences without a terminal session:
//!
//! ```text
//! replay RRDDL
//! replay "R.R.D"   # '.' is a poll with no button down
//! ```

use anyhow::{bail, Result};

use tui_blocker::input::ScriptedPad;
use tui_blocker::session::Session;
use tui_blocker::types::{SCREEN_HEIGHT, SCREEN_WIDTH};
use tui_blocker::video::Bitmap;

fn main() -> Result<()> {
    let script = match std::env::args().nth(1) {
        Some(s) => s,
        None => bail!("usage: replay <script>   (U/D/L/R press a button, anything else is idle)"),
    };

    let mut session = Session::new(ScriptedPad::from_script(&script));
    let mut screen = Bitmap::new();

    // Frame zero, so a script with no legal move still prints a board.
    session.render(&mut screen);

    let mut ticks = 0u32;
    let mut redraws = 0u32;
    while !session.pad().is_exhausted() {
        if let Some(outcome) = session.tick(&mut screen) {
            if outcome.needs_redraw() {
                redraws += 1;
            }
        }
        ticks += 1;
    }

    print_frame(&screen);

    let game = session.game();
    println!(
        "ticks {ticks}  redraws {redraws}  moves {}  player ({}, {})",
        game.moves(),
        game.player().x,
        game.player().y
    );
    Ok(())
}

/// Print the bitmap at half vertical resolution (a pixel pair per char).
fn print_frame(screen: &Bitmap) {
    for y in (0..SCREEN_HEIGHT).step_by(2) {
        let mut line = String::with_capacity(SCREEN_WIDTH);
        for x in 0..SCREEN_WIDTH {
            let ch = match (screen.get(x, y), screen.get(x, y + 1)) {
                (false, false) => ' ',
                (true, false) => '\'',
                (false, true) => '.',
                (true, true) => '#',
            };
            line.push(ch);
        }
        println!("{line}");
    }
}
