//! Agent port - whoever selects moves for a symbol
//!
//! The session drives two implementations of the same interface:
//! - Console humans ([`HumanAgent`])
//! - The heuristic CPU opponent ([`CpuAgent`])

pub mod cpu;
pub mod human;

pub use cpu::CpuAgent;
pub use human::HumanAgent;

use crate::{
    Result,
    board::{Board, Coord},
};

/// Move selection interface between the session loop and the players.
///
/// The session calls this once per turn with the current board and applies
/// the returned position. Implementations that interact with the user keep
/// their own retry loop, so a returned coordinate is already valid on the
/// board it was selected for.
pub trait Agent {
    /// Select a move on the given board.
    ///
    /// # Errors
    ///
    /// Returns an error when no move can be produced, e.g. on a full board
    /// or when console input ends.
    fn select_move(&mut self, board: &Board) -> Result<Coord>;
}
