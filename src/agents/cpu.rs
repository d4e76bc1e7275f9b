//! Heuristic CPU opponent

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use super::Agent;
use crate::{
    Result,
    board::{Board, Coord, Player},
};

/// CPU player with a fixed-priority heuristic
///
/// Move selection tries, in order:
/// 1. Complete one of its own lines
/// 2. Block an opponent line that is one move from completion
/// 3. Otherwise, play a uniformly random empty cell
///
/// The first two tiers scan empty cells in row-major order, so ties are
/// broken deterministically towards the lowest (row, col).
pub struct CpuAgent {
    player: Player,
    rng: StdRng,
}

impl CpuAgent {
    /// Create a CPU player for the given symbol
    pub fn new(player: Player) -> Self {
        Self {
            player,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a CPU player with a deterministic seed
    pub fn with_seed(player: Player, seed: u64) -> Self {
        Self {
            player,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The symbol this CPU plays
    pub fn player(&self) -> Player {
        self.player
    }

    /// Check if placing `player` at `coord` completes one of their lines
    fn is_winning_move(board: &Board, coord: Coord, player: Player) -> bool {
        board.with_move(coord, player).has_won(player)
    }

    /// Find the first empty cell, in row-major order, that wins for `player`
    fn find_winning_coord(board: &Board, player: Player) -> Option<Coord> {
        board
            .empty_coords()
            .into_iter()
            .find(|&coord| Self::is_winning_move(board, coord, player))
    }
}

impl Agent for CpuAgent {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        // First, take a win if one is available
        if let Some(coord) = Self::find_winning_coord(board, self.player) {
            return Ok(coord);
        }

        // Then block the opponent's win
        if let Some(coord) = Self::find_winning_coord(board, self.player.opponent()) {
            return Ok(coord);
        }

        // Otherwise, play randomly
        let moves = board.empty_coords();
        if moves.is_empty() {
            return Err(crate::Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }
}
