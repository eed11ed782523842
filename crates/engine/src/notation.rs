//! Parsing of human move notation such as `E9-E6`.
//!
//! Columns are letters from `A`, ranks are 1-based rows. Parsing knows nothing about the
//! position; legality is checked when the move is applied.

use crate::constants::{BOARD_SIZE, sq_to_idx};
use crate::error::ParseError;
use crate::r#move::Move;

/// Parses `<COL><ROW>-<COL><ROW>`, case-insensitive.
pub fn parse_move(text: &str) -> Result<Move, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }
    let upper = text.to_ascii_uppercase();
    let (start, end) = upper
        .split_once('-')
        .filter(|(_, end)| !end.contains('-'))
        .ok_or_else(|| ParseError::MissingSeparator(text.to_string()))?;
    Ok(Move::new(parse_square(start)?, parse_square(end)?))
}

/// Parses a single square such as `E9` into its index.
pub fn parse_square(text: &str) -> Result<usize, ParseError> {
    let mut chars = text.chars();
    let col_char = chars.next().ok_or(ParseError::Empty)?.to_ascii_uppercase();
    let col = (col_char as u32).wrapping_sub('A' as u32) as usize;
    if !col_char.is_ascii_uppercase() || col >= BOARD_SIZE {
        return Err(ParseError::UnknownColumn(col_char));
    }

    let rank_text = chars.as_str();
    let rank: u32 = rank_text
        .parse()
        .map_err(|_| ParseError::BadRank(rank_text.to_string()))?;
    if rank == 0 || rank as usize > BOARD_SIZE {
        return Err(ParseError::RankOutOfRange(rank));
    }
    Ok(sq_to_idx(rank as usize - 1, col))
}
