//! Common test utilities for the galo test suite.
//!
//! This module provides board construction helpers used across multiple tests.

use galo::{Board, Cell};

/// Total number of raw cell arrangements (3^9)
pub const BOARD_CODES: u32 = 19_683;

/// Decode a base-3 code into a board, least significant digit first.
///
/// Digit 0 is an empty cell, 1 is X and 2 is O. Over `0..BOARD_CODES` every
/// possible cell arrangement, legal or not, appears exactly once.
///
/// # Arguments
///
/// * `code` - Board code in `0..BOARD_CODES`
pub fn board_from_code(mut code: u32) -> Board {
    let mut board = Board::new();
    for i in 0..9 {
        board.cells[i] = match code % 3 {
            0 => Cell::Empty,
            1 => Cell::X,
            _ => Cell::O,
        };
        code /= 3;
    }
    board
}

/// Build a board from a 9-character row-major layout of 'X', 'O' and '.'.
///
/// # Panics
///
/// Panics if the layout is not exactly 9 valid cell characters.
pub fn board_from_layout(layout: &str) -> Board {
    assert_eq!(layout.len(), 9, "layout must have 9 cells: '{layout}'");
    let mut board = Board::new();
    for (i, c) in layout.chars().enumerate() {
        board.cells[i] = Cell::from_char(c).unwrap_or_else(|| panic!("bad layout char '{c}'"));
    }
    board
}
