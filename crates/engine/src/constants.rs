//! Constants and the cell/side types used by the Hasami Shogi engine.

/// Width and height of the board.
pub const BOARD_SIZE: usize = 9;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Unit steps as (row, col): up, down, left, right.
/// Move generation and capture resolution both walk in this order.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// Positive for Side A, negative for Side B. These are the values written on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Cell {
    B = -1,
    Empty = 0,
    A = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Side {
    /// Moves first; home row is the last row.
    A = 1,
    /// Home row is row 0.
    B = -1,
}

impl Cell {
    pub fn from_i8(val: i8) -> Option<Cell> {
        match val {
            -1 => Some(Cell::B),
            0 => Some(Cell::Empty),
            1 => Some(Cell::A),
            _ => None,
        }
    }

    pub fn to_layout_char(self) -> char {
        match self {
            Cell::A => 'a',
            Cell::B => 'b',
            Cell::Empty => '.',
        }
    }

    pub fn from_layout_char(c: char) -> Option<Cell> {
        match c {
            'a' | 'A' => Some(Cell::A),
            'b' | 'B' => Some(Cell::B),
            _ => None,
        }
    }
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Side::A => Cell::A,
            Side::B => Cell::B,
        }
    }

    pub fn from_i8(val: i8) -> Option<Side> {
        match val {
            1 => Some(Side::A),
            -1 => Some(Side::B),
            _ => None,
        }
    }

    /// The row this side fills at the start of a game.
    pub fn home_row(self) -> usize {
        match self {
            Side::A => BOARD_SIZE - 1,
            Side::B => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

// --- Square helpers ---

pub const fn sq_to_idx(r: usize, c: usize) -> usize {
    r * BOARD_SIZE + c
}

pub const fn row_of(sq: usize) -> usize {
    sq / BOARD_SIZE
}

pub const fn col_of(sq: usize) -> usize {
    sq % BOARD_SIZE
}

pub const fn is_valid(r: isize, c: isize) -> bool {
    r >= 0 && r < BOARD_SIZE as isize && c >= 0 && c < BOARD_SIZE as isize
}

pub const fn is_edge(sq: usize) -> bool {
    let (r, c) = (row_of(sq), col_of(sq));
    r == 0 || r == BOARD_SIZE - 1 || c == 0 || c == BOARD_SIZE - 1
}
