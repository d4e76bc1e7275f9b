//! Game state machine: turn alternation and terminal detection

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Player};

/// Who sits behind each symbol, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    HumanVsHuman,
    HumanVsCpu,
}

/// Where a game stands after the latest completed move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Terminal result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// One game: the board, the active player and the status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
}

impl Game {
    /// Create a new game with an empty board and X to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is (the winner once the game is won)
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Terminal result, or `None` while the game is still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(GameOutcome::Win(player)),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }

    /// Play the active player's symbol at a position.
    ///
    /// The status transition evaluates the mover's win before the draw
    /// check, so filling the last empty cell with a winning line counts
    /// as a win, never a draw.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] on a finished game and the
    /// validation errors of [`Board::validate_move`] for bad positions;
    /// a rejected move leaves the game untouched.
    pub fn play(&mut self, coord: Coord) -> Result<(), crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        self.board.validate_move(coord)?;

        let mover = self.to_move;
        self.board.place(coord, mover);

        if self.board.has_won(mover) {
            self.status = GameStatus::Won(mover);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = mover.opponent();
        }

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_player_alternation() {
        let mut game = Game::new();
        game.play(Coord::new(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::O);

        game.play(Coord::new(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_rejected_move_leaves_game_untouched() {
        let mut game = Game::new();
        game.play(Coord::new(1, 1)).unwrap();
        let before = game.clone();

        // Occupied cell
        let result = game.play(Coord::new(1, 1));
        assert!(result.is_err());
        assert_eq!(game.to_move(), before.to_move());
        assert_eq!(game.board(), before.board());
        assert_eq!(game.status(), before.status());

        // Out of bounds
        let result = game.play(Coord::new(0, 3));
        assert!(result.is_err());
        assert_eq!(game.board(), before.board());
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_x_wins_top_row() {
        let mut game = Game::new();
        game.play(Coord::new(0, 0)).unwrap(); // X
        game.play(Coord::new(1, 0)).unwrap(); // O
        game.play(Coord::new(0, 1)).unwrap(); // X
        game.play(Coord::new(1, 1)).unwrap(); // O
        game.play(Coord::new(0, 2)).unwrap(); // X completes row 0

        assert!(game.is_over());
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
        // The winner stays the active player at the end
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut game = Game::new();
        game.play(Coord::new(0, 0)).unwrap(); // X
        game.play(Coord::new(1, 0)).unwrap(); // O
        game.play(Coord::new(0, 1)).unwrap(); // X
        game.play(Coord::new(1, 1)).unwrap(); // O
        game.play(Coord::new(0, 2)).unwrap(); // X wins

        let err = game.play(Coord::new(2, 2)).unwrap_err();
        assert!(err.to_string().contains("over"));
        assert_eq!(game.board().get(Coord::new(2, 2)), Cell::Empty);
    }

    #[test]
    fn test_draw_game() {
        let mut game = Game::new();
        // X O X
        // X O X
        // O X O  with no line of three
        let moves = [
            Coord::new(0, 0), // X
            Coord::new(0, 1), // O
            Coord::new(0, 2), // X
            Coord::new(1, 1), // O
            Coord::new(1, 0), // X
            Coord::new(2, 0), // O
            Coord::new(1, 2), // X
            Coord::new(2, 2), // O
            Coord::new(2, 1), // X
        ];
        for coord in moves {
            game.play(coord).unwrap();
        }

        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
        assert_eq!(game.board().winner(), None);
    }

    #[test]
    fn test_win_on_ninth_move_is_a_win_not_a_draw() {
        let mut game = Game::new();
        // X's final move fills the board and completes the left column
        let moves = [
            Coord::new(0, 0), // X
            Coord::new(0, 1), // O
            Coord::new(0, 2), // X
            Coord::new(1, 1), // O
            Coord::new(1, 0), // X
            Coord::new(1, 2), // O
            Coord::new(2, 1), // X
            Coord::new(2, 2), // O
            Coord::new(2, 0), // X
        ];
        for coord in moves {
            game.play(coord).unwrap();
        }

        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.outcome(), Some(GameOutcome::Win(Player::X)));
    }
}
