//! Jogo do galo (tic-tac-toe) for the terminal
//!
//! This crate provides:
//! - A 3x3 board with move validation and win/draw detection
//! - A game state machine with strict turn alternation
//! - Two agents behind one interface: a console human and a heuristic CPU
//!   that wins when it can, blocks when it must and otherwise plays randomly
//! - A console session driver with a Portuguese-language interface

pub mod agents;
pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
mod prompt;
pub mod session;

pub use agents::{Agent, CpuAgent, HumanAgent};
pub use board::{Board, Cell, Coord, Player};
pub use error::{Error, Result};
pub use game::{Game, GameMode, GameOutcome, GameStatus};
pub use session::Session;
