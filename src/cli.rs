//! Command line interface for the console game

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    agents::{CpuAgent, HumanAgent},
    board::Player,
    game::GameMode,
    prompt,
    session::Session,
};

/// Command line arguments for the galo binary
#[derive(Parser, Debug)]
#[command(name = "galo", version, about = "Jogo do galo no terminal", long_about = None)]
pub struct GameArgs {
    /// Game mode: "pvp" (1, two players) or "cpu" (2, against the computer); prompts when omitted
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Seed for the CPU's random moves, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Run the game according to the parsed arguments
pub fn execute(args: GameArgs) -> Result<()> {
    println!("======= JOGO DO GALO =======");

    let mode = match args.mode.as_deref() {
        Some(token) => parse_mode_token(token)?,
        None => {
            print_menu();
            prompt_mode()?
        }
    };

    run_mode(mode, args.seed)?;
    Ok(())
}

fn print_menu() {
    println!("1 - Jogador vs Jogador (X vs O)");
    println!("2 - Jogador vs CPU (X vs O)");
}

/// What a menu reply selects, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Mode(GameMode),
    OutOfRange,
    NotANumber,
}

fn classify_menu_reply(reply: &str) -> MenuChoice {
    match reply.trim().parse::<i64>() {
        Ok(1) => MenuChoice::Mode(GameMode::HumanVsHuman),
        Ok(2) => MenuChoice::Mode(GameMode::HumanVsCpu),
        Ok(_) => MenuChoice::OutOfRange,
        Err(_) => MenuChoice::NotANumber,
    }
}

/// Prompt until the player picks mode 1 or 2.
///
/// A reply that is not a number gets an error message; a number other than
/// 1 or 2 just prompts again.
fn prompt_mode() -> Result<GameMode> {
    loop {
        let reply = prompt::read_reply("Escolha o modo")?;
        match classify_menu_reply(&reply) {
            MenuChoice::Mode(mode) => return Ok(mode),
            MenuChoice::OutOfRange => {}
            MenuChoice::NotANumber => println!("ERRO: Introduza um número válido."),
        }
    }
}

/// Parse a `--mode` token
fn parse_mode_token(token: &str) -> Result<GameMode> {
    match token.trim().to_ascii_lowercase().as_str() {
        "pvp" | "1" => Ok(GameMode::HumanVsHuman),
        "cpu" | "2" => Ok(GameMode::HumanVsCpu),
        _ => Err(anyhow!(
            "invalid mode '{token}': expected 'pvp' (1) or 'cpu' (2)"
        )),
    }
}

fn run_mode(mode: GameMode, seed: Option<u64>) -> Result<()> {
    let session = Session::new(mode);
    match mode {
        GameMode::HumanVsHuman => {
            let mut x = HumanAgent::new(Player::X);
            let mut o = HumanAgent::new(Player::O);
            session.run(&mut x, &mut o)?;
        }
        GameMode::HumanVsCpu => {
            let mut x = HumanAgent::new(Player::X);
            let mut o = match seed {
                Some(seed) => CpuAgent::with_seed(Player::O, seed),
                None => CpuAgent::new(Player::O),
            };
            session.run(&mut x, &mut o)?;
        }
    }
    Ok(())
}
