//! Frame emission in the display controller's byte order.

use crate::core::GameSnapshot;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, TILE_BLACK, TILE_GREY, TILE_SIZE, TILE_WHITE};

/// An ordered, stateless byte sink.
///
/// The stream carries no framing markers; a frame is implicitly delimited by
/// its fixed byte count.
pub trait DisplaySink {
    fn write(&mut self, byte: u8);
}

impl DisplaySink for Vec<u8> {
    fn write(&mut self, byte: u8) {
        self.push(byte);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn write(&mut self, byte: u8) {
        (**self).write(byte);
    }
}

/// Emit one full frame for the given snapshot.
///
/// Byte order matches the hardware's refresh loop: board row, then sub-row
/// (0..8 within the tile), then board column. Per cell:
///
/// - the player's tile is solid,
/// - a rock tile is solid on its top and bottom sub-rows and hollow in
///   between (only the outermost pixel of each side set), drawing a box,
/// - an empty tile is blank.
///
/// Exactly `FRAME_BYTES` bytes are written; the pass is deterministic in the
/// snapshot alone.
pub fn draw_frame(snap: &GameSnapshot, sink: &mut impl DisplaySink) {
    for y in 0..BOARD_HEIGHT {
        for k in 0..TILE_SIZE {
            for x in 0..BOARD_WIDTH {
                sink.write(tile_byte(snap, x, y, k));
            }
        }
    }
}

fn tile_byte(snap: &GameSnapshot, x: i8, y: i8, sub_row: usize) -> u8 {
    if snap.player.x == x && snap.player.y == y {
        TILE_BLACK
    } else if snap.rock_at(x, y).is_some() {
        if sub_row == 0 || sub_row == TILE_SIZE - 1 {
            TILE_BLACK
        } else {
            TILE_GREY
        }
    } else {
        TILE_WHITE
    }
}
