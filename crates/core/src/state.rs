//! Game state and move resolver.
//!
//! `GameState` owns the player position and the rock collection; `try_move`
//! is the only mutation. Rock identity is positional: a rock is its index in
//! the collection, assigned at level start and stable forever after.

use arrayvec::ArrayVec;

use crate::snapshot::GameSnapshot;
use crate::types::{Direction, MoveOutcome, Pos, BOARD_HEIGHT, BOARD_WIDTH, MAX_ROCKS};

/// Stock level: player start cell.
const PLAYER_START: Pos = Pos::new(2, 2);

/// Stock level: rock layout.
const ROCK_START: [Pos; 4] = [
    Pos::new(1, 1),
    Pos::new(2, 4),
    Pos::new(6, 2),
    Pos::new(4, 4),
];

/// The authoritative game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    player: Pos,
    rocks: ArrayVec<Pos, MAX_ROCKS>,
    /// Successful moves and pushes since the last reset.
    moves: u32,
}

impl GameState {
    /// Create a game with the stock level layout.
    pub fn new() -> Self {
        Self::with_layout(PLAYER_START, &ROCK_START)
    }

    /// Create a game with an explicit layout.
    ///
    /// Positions must be in bounds, rocks must not overlap each other or the
    /// player. Violations are programming errors in level data, not runtime
    /// conditions, hence the debug assertions.
    pub fn with_layout(player: Pos, rocks: &[Pos]) -> Self {
        debug_assert!(Self::in_bounds(player.x, player.y));
        let mut collection = ArrayVec::new();
        for (i, &rock) in rocks.iter().enumerate() {
            debug_assert!(Self::in_bounds(rock.x, rock.y));
            debug_assert!(rock != player, "rock {i} overlaps the player");
            debug_assert!(
                !collection.contains(&rock),
                "rock {i} overlaps an earlier rock"
            );
            collection.push(rock);
        }
        Self {
            player,
            rocks: collection,
            moves: 0,
        }
    }

    /// Restore the stock level and zero the move counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn rocks(&self) -> &[Pos] {
        &self.rocks
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether (x, y) lies on the board.
    pub fn in_bounds(x: i8, y: i8) -> bool {
        (0..BOARD_WIDTH).contains(&x) && (0..BOARD_HEIGHT).contains(&y)
    }

    /// Index of the rock at (x, y), if any.
    ///
    /// Linear first-match scan. The collection is small and fixed, so this
    /// stays a plain scan rather than an index structure.
    pub fn rock_at(&self, x: i8, y: i8) -> Option<usize> {
        self.rocks.iter().position(|r| r.x == x && r.y == y)
    }

    /// Resolve one move attempt.
    ///
    /// The bounds check on the player's target cell gates everything: an
    /// off-board target rejects the move before the rock branch is ever
    /// consulted. A push succeeds only when the rock's destination is on the
    /// board and free of other rocks; otherwise neither the player nor the
    /// rock moves. On any non-successful outcome the state is untouched.
    pub fn try_move(&mut self, dir: Direction) -> MoveOutcome {
        let target = self.player.step(dir);
        if !Self::in_bounds(target.x, target.y) {
            return MoveOutcome::OutOfBounds;
        }

        match self.rock_at(target.x, target.y) {
            None => {
                self.player = target;
                self.moves += 1;
                MoveOutcome::Moved
            }
            Some(r) => {
                let dest = self.rocks[r].step(dir);
                if Self::in_bounds(dest.x, dest.y) && self.rock_at(dest.x, dest.y).is_none() {
                    self.player = target;
                    self.rocks[r] = dest;
                    self.moves += 1;
                    MoveOutcome::Pushed
                } else {
                    MoveOutcome::Blocked
                }
            }
        }
    }

    /// A plain `Copy` view of the state for renderers and observers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self.player, &self.rocks, self.moves)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
