//! Polled button sources.

use crate::types::Direction;

/// A synchronous button-mask source.
///
/// `poll` returns immediately with the pad's current mask; there is no
/// waiting or interrupt path. A mask of zero means no button is down.
pub trait InputSource {
    fn poll(&mut self) -> u8;
}

/// A pad that replays a fixed sequence of button masks, one per poll.
///
/// Once the script is exhausted every poll returns zero. Scripts can be
/// built from masks directly or parsed from a character script where
/// `U`/`D`/`L`/`R` press one button and any other character is a no-button
/// poll.
#[derive(Debug, Clone)]
pub struct ScriptedPad {
    masks: Vec<u8>,
    next: usize,
}

impl ScriptedPad {
    pub fn new(masks: Vec<u8>) -> Self {
        Self { masks, next: 0 }
    }

    pub fn from_script(script: &str) -> Self {
        let masks = script
            .chars()
            .map(|c| Direction::from_char(c).map_or(0, Direction::to_buttons))
            .collect();
        Self::new(masks)
    }

    /// Polls left before the script runs out.
    pub fn remaining(&self) -> usize {
        self.masks.len() - self.next
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl InputSource for ScriptedPad {
    fn poll(&mut self) -> u8 {
        match self.masks.get(self.next) {
            Some(&mask) => {
                self.next += 1;
                mask
            }
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BUTTON_DOWN, BUTTON_LEFT, BUTTON_RIGHT, BUTTON_UP};

    #[test]
    fn scripted_pad_replays_masks_in_order() {
        let mut pad = ScriptedPad::new(vec![BUTTON_UP, 0, BUTTON_LEFT]);
        assert_eq!(pad.poll(), BUTTON_UP);
        assert_eq!(pad.poll(), 0);
        assert_eq!(pad.poll(), BUTTON_LEFT);
        assert!(pad.is_exhausted());
        assert_eq!(pad.poll(), 0);
        assert_eq!(pad.poll(), 0);
    }

    #[test]
    fn script_characters_map_to_buttons() {
        let mut pad = ScriptedPad::from_script("udLR.x");
        assert_eq!(pad.poll(), BUTTON_UP);
        assert_eq!(pad.poll(), BUTTON_DOWN);
        assert_eq!(pad.poll(), BUTTON_LEFT);
        assert_eq!(pad.poll(), BUTTON_RIGHT);
        assert_eq!(pad.poll(), 0);
        assert_eq!(pad.poll(), 0);
        assert!(pad.is_exhausted());
    }

    #[test]
    fn remaining_counts_down() {
        let mut pad = ScriptedPad::from_script("RR");
        assert_eq!(pad.remaining(), 2);
        pad.poll();
        assert_eq!(pad.remaining(), 1);
        pad.poll();
        assert_eq!(pad.remaining(), 0);
    }
}
