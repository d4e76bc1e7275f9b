//! Runs one game between two agents on the console

use crate::{
    Result,
    agents::Agent,
    board::Player,
    game::{Game, GameMode, GameOutcome},
};

/// Drives a single game in a chosen mode and announces the result
pub struct Session {
    mode: GameMode,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        Self { mode }
    }

    /// Play one game to completion, rendering and announcing on stdout.
    ///
    /// `x` moves first. In [`GameMode::HumanVsCpu`] the O agent is the CPU
    /// and gets its turn notice printed before it moves.
    ///
    /// # Errors
    ///
    /// Propagates agent failures (end of console input, no moves left) and
    /// rejected moves; agents are expected to return validated coordinates.
    pub fn run(&self, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<GameOutcome> {
        let mut game = Game::new();

        let outcome = loop {
            println!("\n{}\n", game.board());

            if self.is_cpu(game.to_move()) {
                println!("CPU (O) está a jogar...");
            }

            let coord = match game.to_move() {
                Player::X => x.select_move(game.board())?,
                Player::O => o.select_move(game.board())?,
            };
            game.play(coord)?;

            if let Some(outcome) = game.outcome() {
                break outcome;
            }
        };

        println!("\n{}\n", game.board());
        self.announce(outcome);

        Ok(outcome)
    }

    /// Whether the given symbol is CPU-controlled in this mode
    fn is_cpu(&self, player: Player) -> bool {
        self.mode == GameMode::HumanVsCpu && player == Player::O
    }

    fn announce(&self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(winner) => {
                if self.is_cpu(winner) {
                    println!("A CPU venceu!");
                } else {
                    println!("O jogador {winner} venceu!");
                }
            }
            GameOutcome::Draw => println!("Empate!"),
        }
    }
}
