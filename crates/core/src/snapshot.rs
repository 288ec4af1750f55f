use crate::types::{Pos, MAX_ROCKS};

/// A plain `Copy` view of the game state.
///
/// Renderers take a snapshot rather than the live state so the draw path is
/// decoupled from the mutator and trivially repeatable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub player: Pos,
    rocks: [Pos; MAX_ROCKS],
    rock_count: usize,
    pub moves: u32,
}

impl GameSnapshot {
    pub(crate) fn capture(player: Pos, rocks: &[Pos], moves: u32) -> Self {
        debug_assert!(rocks.len() <= MAX_ROCKS);
        let mut fixed = [Pos::new(0, 0); MAX_ROCKS];
        fixed[..rocks.len()].copy_from_slice(rocks);
        Self {
            player,
            rocks: fixed,
            rock_count: rocks.len(),
            moves,
        }
    }

    pub fn rocks(&self) -> &[Pos] {
        &self.rocks[..self.rock_count]
    }

    /// First-match rock lookup, mirroring `GameState::rock_at`.
    pub fn rock_at(&self, x: i8, y: i8) -> Option<usize> {
        self.rocks().iter().position(|r| r.x == x && r.y == y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;

    #[test]
    fn snapshot_mirrors_state() {
        let game = GameState::new();
        let snap = game.snapshot();
        assert_eq!(snap.player, game.player());
        assert_eq!(snap.rocks(), game.rocks());
        assert_eq!(snap.moves, game.moves());
        assert_eq!(snap.rock_at(6, 2), game.rock_at(6, 2));
        assert_eq!(snap.rock_at(5, 5), None);
    }

    #[test]
    fn snapshot_is_detached_from_the_live_state() {
        let mut game = GameState::new();
        let snap = game.snapshot();
        game.try_move(tui_blocker_types::Direction::Right);
        assert_ne!(snap.player, game.player());
    }
}
