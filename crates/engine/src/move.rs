//! Defines the representation of a move in the engine.

use crate::constants::{BOARD_SIZE, col_of, row_of, sq_to_idx};
use std::fmt;

/// Represents a single move.
///
/// A move is encoded as a 16-bit integer:
/// - Bits 0-7:   from_sq (0-80 on the board)
/// - Bits 8-15:  to_sq (0-80 on the board)
///
/// Squares are stored unmasked, so an off-board square stays off the board
/// (anything past 255 is stored as 255) and `Board::apply_move` rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    pub fn new(from_sq: usize, to_sq: usize) -> Self {
        Move(encode_sq(from_sq) | (encode_sq(to_sq) << 8))
    }

    /// Creates a move from `(row, col)` pairs.
    /// Returns `None` if a row or column is off the board.
    pub fn from_coords(from: (usize, usize), to: (usize, usize)) -> Option<Self> {
        let on_board = |(r, c): (usize, usize)| r < BOARD_SIZE && c < BOARD_SIZE;
        if !on_board(from) || !on_board(to) {
            return None;
        }
        Some(Move::new(sq_to_idx(from.0, from.1), sq_to_idx(to.0, to.1)))
    }

    /// Gets the source square.
    pub fn from_sq(&self) -> usize {
        (self.0 & 0xFF) as usize
    }

    /// Gets the destination square.
    pub fn to_sq(&self) -> usize {
        (self.0 >> 8) as usize
    }

    pub fn from_coords_pair(&self) -> (usize, usize) {
        (row_of(self.from_sq()), col_of(self.from_sq()))
    }

    pub fn to_coords_pair(&self) -> (usize, usize) {
        (row_of(self.to_sq()), col_of(self.to_sq()))
    }

    /// Notation such as `E9-E6`.
    pub fn to_notation(&self) -> String {
        format!(
            "{}-{}",
            square_notation(self.from_sq()),
            square_notation(self.to_sq())
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

fn encode_sq(sq: usize) -> u16 {
    u8::try_from(sq).unwrap_or(u8::MAX) as u16
}

/// Gets the notation (column letter, 1-based rank) for a square index.
pub fn square_notation(sq: usize) -> String {
    if sq >= BOARD_SIZE * BOARD_SIZE {
        return "??".to_string();
    }
    format!("{}{}", (b'A' + col_of(sq) as u8) as char, row_of(sq) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_packing() {
        let mv = Move::new(80, 3);
        assert_eq!(mv.from_sq(), 80);
        assert_eq!(mv.to_sq(), 3);
        assert_eq!(mv.from_coords_pair(), (8, 8));
        assert_eq!(mv.to_coords_pair(), (0, 3));
    }

    #[test]
    fn test_notation() {
        let mv = Move::from_coords((8, 4), (5, 4)).unwrap();
        assert_eq!(mv.to_notation(), "E9-E6");
        assert_eq!(square_notation(0), "A1");
        assert_eq!(square_notation(81), "??");
    }

    #[test]
    fn test_off_board_squares_are_kept_off_board() {
        assert_eq!(Move::new(80 + 128, 71).from_sq(), 208);
        assert_eq!(Move::new(0, 1000).to_sq(), 255);
        assert_eq!(Move::from_coords((7, 17), (6, 8)), None);
        assert_eq!(Move::from_coords((0, 0), (9, 0)), None);
        assert!(Move::from_coords((8, 8), (0, 0)).is_some());
    }
}
