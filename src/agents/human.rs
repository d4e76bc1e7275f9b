//! Console human player

use super::Agent;
use crate::{
    Result,
    board::{Board, Coord, Player},
    prompt,
};

/// Human player prompting for moves on the console
///
/// Malformed lines, positions off the board and occupied cells each print
/// their message, put the board back on screen and prompt the same player
/// again; the session only ever sees a move that is valid on the current
/// board.
pub struct HumanAgent {
    player: Player,
}

impl HumanAgent {
    pub fn new(player: Player) -> Self {
        Self { player }
    }

    /// The symbol this player controls
    pub fn player(&self) -> Player {
        self.player
    }
}

/// Parse a move line as two whitespace-separated 1-indexed numbers.
///
/// # Errors
///
/// Returns [`crate::Error::MalformedInput`] for the wrong token count or
/// non-numeric tokens, and [`crate::Error::OutOfBounds`] for numbers off
/// the board.
pub(crate) fn parse_coords(input: &str) -> Result<Coord> {
    let malformed = || crate::Error::MalformedInput {
        input: input.to_string(),
    };

    let mut numbers = Vec::with_capacity(2);
    for token in input.split_whitespace() {
        let value: i64 = token.parse().map_err(|_| malformed())?;
        numbers.push(value);
    }

    match numbers[..] {
        [row, col] => Coord::from_one_based(row, col),
        _ => Err(malformed()),
    }
}

/// Console message for a rejected move line
fn rejection_message(err: &crate::Error) -> &'static str {
    match err {
        crate::Error::CellOccupied { .. } => "ERRO: Essa casa já está ocupada.",
        crate::Error::OutOfBounds { .. } => {
            "ERRO: Essa posição está fora do tabuleiro. Use valores entre 1 e 3."
        }
        _ => "ERRO: Entrada inválida! Use números.",
    }
}

impl Agent for HumanAgent {
    fn select_move(&mut self, board: &Board) -> Result<Coord> {
        loop {
            let line = prompt::read_reply(&format!(
                "Jogador ({}), introduza linha e coluna (ex: 2 3)",
                self.player
            ))?;

            let rejection = match parse_coords(&line) {
                Ok(coord) => match board.validate_move(coord) {
                    Ok(()) => return Ok(coord),
                    Err(err) => err,
                },
                Err(err) => err,
            };

            println!("{}", rejection_message(&rejection));
            // The board goes back on screen before the repeated prompt
            println!("\n{board}\n");
        }
    }
}
