//! Device-format renderer tests: byte stream contract and tile patterns.

use tui_blocker::core::GameState;
use tui_blocker::types::{
    Pos, BOARD_WIDTH, FRAME_BYTES, TILE_BLACK, TILE_GREY, TILE_SIZE, TILE_WHITE,
};
use tui_blocker::video::{draw_frame, Bitmap, DisplaySink};

/// Byte offset of (cell x, cell y, sub-row k) in the stream.
fn offset(x: i8, y: i8, k: usize) -> usize {
    (y as usize * TILE_SIZE + k) * BOARD_WIDTH as usize + x as usize
}

#[test]
fn frame_has_exactly_one_byte_per_cell_sub_row() {
    let mut bytes = Vec::new();
    draw_frame(&GameState::new().snapshot(), &mut bytes);
    assert_eq!(bytes.len(), FRAME_BYTES);
}

#[test]
fn render_is_idempotent() {
    let snap = GameState::new().snapshot();
    let mut first = Vec::new();
    let mut second = Vec::new();
    draw_frame(&snap, &mut first);
    draw_frame(&snap, &mut second);
    assert_eq!(first, second, "same state must yield identical streams");
}

#[test]
fn player_cell_is_solid_on_every_sub_row() {
    let snap = GameState::with_layout(Pos::new(5, 6), &[]).snapshot();
    let mut bytes = Vec::new();
    draw_frame(&snap, &mut bytes);
    for k in 0..TILE_SIZE {
        assert_eq!(bytes[offset(5, 6, k)], TILE_BLACK, "sub-row {k}");
    }
}

#[test]
fn rock_cell_has_rails_and_hollow_body() {
    let snap = GameState::with_layout(Pos::new(0, 0), &[Pos::new(6, 1)]).snapshot();
    let mut bytes = Vec::new();
    draw_frame(&snap, &mut bytes);
    assert_eq!(bytes[offset(6, 1, 0)], TILE_BLACK);
    assert_eq!(bytes[offset(6, 1, TILE_SIZE - 1)], TILE_BLACK);
    for k in 1..TILE_SIZE - 1 {
        assert_eq!(bytes[offset(6, 1, k)], TILE_GREY, "sub-row {k}");
    }
}

#[test]
fn everything_else_is_background() {
    let snap = GameState::with_layout(Pos::new(0, 0), &[Pos::new(7, 7)]).snapshot();
    let mut bytes = Vec::new();
    draw_frame(&snap, &mut bytes);

    let occupied = |i: usize| {
        (0..TILE_SIZE).any(|k| i == offset(0, 0, k)) || (0..TILE_SIZE).any(|k| i == offset(7, 7, k))
    };
    for (i, b) in bytes.iter().enumerate() {
        if !occupied(i) {
            assert_eq!(*b, TILE_WHITE, "byte {i} should be background");
        }
    }
}

#[test]
fn render_reflects_a_push() {
    let mut game = GameState::with_layout(Pos::new(2, 2), &[Pos::new(3, 2)]);

    let mut before = Vec::new();
    draw_frame(&game.snapshot(), &mut before);
    assert_eq!(before[offset(2, 2, 3)], TILE_BLACK);
    assert_eq!(before[offset(3, 2, 3)], TILE_GREY);

    game.try_move(tui_blocker::types::Direction::Right);

    let mut after = Vec::new();
    draw_frame(&game.snapshot(), &mut after);
    assert_eq!(after[offset(2, 2, 3)], TILE_WHITE);
    assert_eq!(after[offset(3, 2, 3)], TILE_BLACK);
    assert_eq!(after[offset(4, 2, 3)], TILE_GREY);
}

#[test]
fn bitmap_reassembles_the_stream() {
    let snap = GameState::new().snapshot();

    let mut bytes = Vec::new();
    draw_frame(&snap, &mut bytes);

    let mut bm = Bitmap::new();
    for b in &bytes {
        bm.write(*b);
    }
    assert_eq!(bm.bytes(), bytes.as_slice());

    let mut direct = Bitmap::new();
    draw_frame(&snap, &mut direct);
    assert_eq!(direct, bm);
}
