//! Jogo do galo for the terminal
//!
//! Plays one game per run, either between two players at the keyboard or
//! against the built-in CPU opponent. Without arguments the mode is chosen
//! from an interactive menu; `--mode` and `--seed` skip and pin it.

use anyhow::Result;
use clap::Parser;

use galo::cli::{self, GameArgs};

fn main() -> Result<()> {
    let args = GameArgs::parse();
    cli::execute(args)
}
