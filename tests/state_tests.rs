//! Move resolver tests against the facade crate's public API.

use tui_blocker::core::GameState;
use tui_blocker::types::{Direction, MoveOutcome, Pos, BOARD_HEIGHT, BOARD_WIDTH, NUM_ROCKS};

fn assert_invariants(game: &GameState) {
    let p = game.player();
    assert!(
        GameState::in_bounds(p.x, p.y),
        "player ({}, {}) off board",
        p.x,
        p.y
    );
    for (i, r) in game.rocks().iter().enumerate() {
        assert!(
            GameState::in_bounds(r.x, r.y),
            "rock {i} at ({}, {}) off board",
            r.x,
            r.y
        );
        assert_ne!(*r, p, "rock {i} shares the player's cell");
        for (j, o) in game.rocks().iter().enumerate().skip(i + 1) {
            assert_ne!(r, o, "rocks {i} and {j} share a cell");
        }
    }
}

#[test]
fn stock_level_has_four_rocks_and_a_centered_player() {
    let game = GameState::new();
    assert_eq!(game.rocks().len(), NUM_ROCKS);
    assert_eq!(game.player(), Pos::new(2, 2));
    assert_invariants(&game);
}

#[test]
fn push_correctness() {
    // Player at (2,2), rock at (3,2), push right into an empty (4,2).
    let mut game = GameState::with_layout(Pos::new(2, 2), &[Pos::new(3, 2)]);
    assert_eq!(game.try_move(Direction::Right), MoveOutcome::Pushed);
    assert_eq!(game.player(), Pos::new(3, 2));
    assert_eq!(game.rocks()[0], Pos::new(4, 2));
    assert_invariants(&game);
}

#[test]
fn blocked_push_leaves_everything_in_place() {
    let mut game = GameState::with_layout(Pos::new(2, 2), &[Pos::new(3, 2), Pos::new(4, 2)]);
    let before = game.clone();
    assert_eq!(game.try_move(Direction::Right), MoveOutcome::Blocked);
    assert_eq!(game, before);
}

#[test]
fn out_of_bounds_rejection_on_every_edge() {
    for (start, dir) in [
        (Pos::new(0, 3), Direction::Left),
        (Pos::new(BOARD_WIDTH - 1, 3), Direction::Right),
        (Pos::new(3, 0), Direction::Up),
        (Pos::new(3, BOARD_HEIGHT - 1), Direction::Down),
    ] {
        let mut game = GameState::with_layout(start, &[]);
        let before = game.clone();
        assert_eq!(
            game.try_move(dir),
            MoveOutcome::OutOfBounds,
            "edge case {start:?} {dir:?}"
        );
        assert_eq!(game, before);
    }
}

#[test]
fn a_push_toward_the_edge_is_blocked_not_rejected() {
    // The rock sits on the edge; the player's target cell is fine but the
    // rock has nowhere to go.
    let mut game = GameState::with_layout(Pos::new(1, 0), &[Pos::new(0, 0)]);
    assert_eq!(game.try_move(Direction::Left), MoveOutcome::Blocked);
    assert_eq!(game.player(), Pos::new(1, 0));
    assert_eq!(game.rocks()[0], Pos::new(0, 0));
}

#[test]
fn invariants_hold_under_an_exhaustive_short_walk() {
    // Every direction sequence of length 4 from the stock level.
    let dirs = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
    for a in dirs {
        for b in dirs {
            for c in dirs {
                for d in dirs {
                    let mut game = GameState::new();
                    for dir in [a, b, c, d] {
                        game.try_move(dir);
                        assert_invariants(&game);
                    }
                }
            }
        }
    }
}

#[test]
fn rock_count_is_conserved() {
    let mut game = GameState::new();
    for dir in [
        Direction::Down,
        Direction::Down,
        Direction::Right,
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Left,
        Direction::Left,
    ] {
        game.try_move(dir);
        assert_eq!(game.rocks().len(), NUM_ROCKS);
    }
}
