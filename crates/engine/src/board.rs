//! The core board representation for the Hasami Shogi engine.

use crate::capture;
use crate::constants::{BOARD_SIZE, Cell, NUM_SQUARES, Side, sq_to_idx};
use crate::error::{MoveError, StateError};
use crate::move_gen;
use crate::r#move::{Move, square_notation};
use log::{debug, warn};
use std::fmt;

pub const START_LAYOUT: &str = "bbbbbbbbb/9/9/9/9/9/9/9/aaaaaaaaa a";

/// How a finished game was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The loser fell below half a row of pieces.
    Material { winner: Side },
    /// The side to move had no legal move.
    NoMoves { winner: Side },
}

impl Outcome {
    pub fn winner(self) -> Side {
        match self {
            Outcome::Material { winner } | Outcome::NoMoves { winner } => winner,
        }
    }
}

/// Represents the state of the board at any point in time.
///
/// This is the entire persisted unit of a game: no history and no capture
/// counts are kept, material is recounted from the cells when needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub cells: [Cell; NUM_SQUARES],
    pub side_to_move: Side,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position: Side B fills row 0, Side A fills the last row, A to move.
    pub fn new() -> Self {
        let mut board = Board::empty(Side::A);
        for c in 0..BOARD_SIZE {
            board.cells[sq_to_idx(Side::B.home_row(), c)] = Cell::B;
            board.cells[sq_to_idx(Side::A.home_row(), c)] = Cell::A;
        }
        board
    }

    pub fn empty(side_to_move: Side) -> Self {
        Board {
            cells: [Cell::Empty; NUM_SQUARES],
            side_to_move,
        }
    }

    /// Parses a compact layout such as `bbbbbbbbb/9/9/9/9/9/9/9/aaaaaaaaa a`.
    ///
    /// Ranks run from row 0 to the last row; digits are runs of empty cells.
    /// The trailing field names the side to move.
    pub fn from_fen(fen: &str) -> Result<Self, StateError> {
        let mut parts = fen.split_whitespace();
        let layout = parts
            .next()
            .ok_or_else(|| StateError::Layout("empty layout".to_string()))?;
        let player = match parts.next() {
            Some("a") | Some("A") => Side::A,
            Some("b") | Some("B") => Side::B,
            Some(other) => return Err(StateError::Layout(format!("unknown side {:?}", other))),
            None => return Err(StateError::Layout("missing side to move".to_string())),
        };
        if parts.next().is_some() {
            return Err(StateError::Layout("trailing fields".to_string()));
        }

        let mut board = Board::empty(player);
        let ranks: Vec<&str> = layout.split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(StateError::RowCount {
                expected: BOARD_SIZE,
                found: ranks.len(),
            });
        }
        for (rank, text) in ranks.iter().enumerate() {
            let mut file = 0;
            for ch in text.chars() {
                if let Some(digit) = ch.to_digit(10) {
                    file += digit as usize;
                } else {
                    let cell = Cell::from_layout_char(ch)
                        .ok_or_else(|| StateError::Layout(format!("unknown piece {:?}", ch)))?;
                    if file < BOARD_SIZE {
                        board.cells[sq_to_idx(rank, file)] = cell;
                    }
                    file += 1;
                }
            }
            if file != BOARD_SIZE {
                return Err(StateError::RowLength {
                    row: rank,
                    expected: BOARD_SIZE,
                    found: file,
                });
            }
        }
        Ok(board)
    }

    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(BOARD_SIZE);
        for r in 0..BOARD_SIZE {
            let mut rank = String::new();
            let mut empty = 0;
            for c in 0..BOARD_SIZE {
                match self.cells[sq_to_idx(r, c)] {
                    Cell::Empty => empty += 1,
                    cell => {
                        if empty > 0 {
                            rank.push_str(&empty.to_string());
                            empty = 0;
                        }
                        rank.push(cell.to_layout_char());
                    }
                }
            }
            if empty > 0 {
                rank.push_str(&empty.to_string());
            }
            ranks.push(rank);
        }
        let side = match self.side_to_move {
            Side::A => 'a',
            Side::B => 'b',
        };
        format!("{} {}", ranks.join("/"), side)
    }

    /// Cell at `(r, c)`, or `None` off the board.
    pub fn get(&self, r: usize, c: usize) -> Option<Cell> {
        (r < BOARD_SIZE && c < BOARD_SIZE).then(|| self.cells[sq_to_idx(r, c)])
    }

    pub fn set(&mut self, r: usize, c: usize, cell: Cell) -> Result<(), MoveError> {
        if r >= BOARD_SIZE || c >= BOARD_SIZE {
            return Err(MoveError::OffBoard { row: r, col: c });
        }
        self.cells[sq_to_idx(r, c)] = cell;
        Ok(())
    }

    /// Number of pieces `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        let cell = side.cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn legal_destinations(&self, sq: usize) -> Vec<usize> {
        move_gen::legal_destinations(self, sq)
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        move_gen::legal_moves(self)
    }

    /// Plays `mv` for the side to move, resolves captures and passes the turn.
    ///
    /// Returns the squares emptied by captures, sandwich captures first.
    /// On error the board is left exactly as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<Vec<usize>, MoveError> {
        let from_sq = mv.from_sq();
        let to_sq = mv.to_sq();
        for sq in [from_sq, to_sq] {
            if sq >= NUM_SQUARES {
                warn!("Rejected move: square {} is off the board", sq);
                return Err(MoveError::OutOfBounds(sq));
            }
        }

        let mover = self.side_to_move;
        if self.cells[from_sq] != mover.cell() {
            warn!("Rejected move {}: no {} piece on the source", mv, mover.name());
            return Err(MoveError::NotYourPiece {
                from: square_notation(from_sq),
            });
        }
        if !move_gen::legal_destinations(self, from_sq).contains(&to_sq) {
            warn!("Rejected move {}: destination unreachable", mv);
            return Err(MoveError::Unreachable {
                from: square_notation(from_sq),
                to: square_notation(to_sq),
            });
        }

        self.cells[to_sq] = self.cells[from_sq];
        self.cells[from_sq] = Cell::Empty;

        let mut captured = capture::resolve_sandwich(self, to_sq, mover);
        captured.extend(capture::resolve_encirclement(self, mover));

        self.side_to_move = mover.opponent();

        debug!(
            "{} played {} capturing {} piece(s)",
            mover.name(),
            mv,
            captured.len()
        );
        Ok(captured)
    }

    /// Material rule: a side left with fewer than half a row of pieces has lost.
    ///
    /// Returns the winner, or `None` while both sides still have enough pieces.
    /// Side A is checked first, so if both sides were short Side B would win.
    pub fn is_finished(&self) -> Option<Side> {
        if self.count(Side::A) * 2 < BOARD_SIZE {
            return Some(Side::B);
        }
        if self.count(Side::B) * 2 < BOARD_SIZE {
            return Some(Side::A);
        }
        None
    }

    /// Game-over check for front ends: the material rule, then a side to move with no moves.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.is_finished() {
            return Some(Outcome::Material { winner });
        }
        if self.legal_moves().is_empty() {
            return Some(Outcome::NoMoves {
                winner: self.side_to_move.opponent(),
            });
        }
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{:>2}", r + 1)?;
            for c in 0..BOARD_SIZE {
                write!(f, " {}", self.cells[sq_to_idx(r, c)].to_layout_char())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "(To move: {})", self.side_to_move.name())
    }
}
