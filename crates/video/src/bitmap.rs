//! Byte-packed pixel buffer reassembled from the frame stream.

use crate::frame::DisplaySink;
use crate::types::{FRAME_BYTES, SCREEN_HEIGHT, SCREEN_WIDTH};

/// A 64x64 1-bpp pixel buffer that plays the role of the display panel.
///
/// The frame stream happens to be row-major when flattened (board row,
/// sub-row, column), so writes land at a simple running cursor that wraps at
/// the frame boundary. Bit 7 of each byte is the leftmost pixel of its run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    bytes: [u8; FRAME_BYTES],
    cursor: usize,
}

impl Bitmap {
    pub fn new() -> Self {
        Self {
            bytes: [0; FRAME_BYTES],
            cursor: 0,
        }
    }

    /// Pixel at (x, y); out-of-range coordinates read as unlit.
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return false;
        }
        let byte = self.bytes[y * (SCREEN_WIDTH / 8) + x / 8];
        byte & (0x80 >> (x % 8)) != 0
    }

    /// Count of lit pixels.
    pub fn lit(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for Bitmap {
    fn write(&mut self, byte: u8) {
        self.bytes[self.cursor] = byte;
        self.cursor = (self.cursor + 1) % FRAME_BYTES;
    }
}
