//! Move generation logic, including pre-computed ray tables.

use crate::board::Board;
use crate::constants::{Cell, DIRECTIONS, NUM_SQUARES, col_of, is_edge, is_valid, row_of, sq_to_idx};
use crate::r#move::Move;
use once_cell::sync::Lazy;

/// Pre-computed geometry shared by move generation and capture resolution.
/// The tables are initialized once and then accessed globally.
pub struct RayTables {
    /// `rays[sq][dir]` lists the squares walked from `sq` in `DIRECTIONS[dir]`,
    /// nearest first, up to the board edge.
    pub rays: Vec<[Vec<usize>; 4]>,
    /// In-bounds orthogonal neighbours of each square.
    pub neighbors: Vec<Vec<usize>>,
    /// Every square on the outer ring, in row-major order.
    pub edge_squares: Vec<usize>,
}

impl RayTables {
    fn new() -> Self {
        let rays = (0..NUM_SQUARES)
            .map(|sq| std::array::from_fn(|dir| ray(sq, dir)))
            .collect();

        let neighbors = (0..NUM_SQUARES)
            .map(|sq| {
                let (r, c) = (row_of(sq) as isize, col_of(sq) as isize);
                DIRECTIONS
                    .iter()
                    .map(|&(dr, dc)| (r + dr, c + dc))
                    .filter(|&(nr, nc)| is_valid(nr, nc))
                    .map(|(nr, nc)| sq_to_idx(nr as usize, nc as usize))
                    .collect()
            })
            .collect();

        let edge_squares = (0..NUM_SQUARES).filter(|&sq| is_edge(sq)).collect();

        RayTables {
            rays,
            neighbors,
            edge_squares,
        }
    }
}

fn ray(sq: usize, dir: usize) -> Vec<usize> {
    let (dr, dc) = DIRECTIONS[dir];
    let mut squares = Vec::new();
    let (mut r, mut c) = (row_of(sq) as isize + dr, col_of(sq) as isize + dc);
    while is_valid(r, c) {
        squares.push(sq_to_idx(r as usize, c as usize));
        r += dr;
        c += dc;
    }
    squares
}

// The global static instance of the ray tables, initialized lazily and only once.
pub static RAY_TABLES: Lazy<RayTables> = Lazy::new(RayTables::new);

/// Empty squares a piece on `sq` can slide to, in direction order then by distance.
///
/// Empty when `sq` does not hold a piece of the side to move.
pub fn legal_destinations(board: &Board, sq: usize) -> Vec<usize> {
    let mut destinations = Vec::new();
    if sq >= NUM_SQUARES || board.cells[sq] != board.side_to_move.cell() {
        return destinations;
    }
    for ray in &RAY_TABLES.rays[sq] {
        destinations.extend(ray.iter().take_while(|&&to| board.cells[to] == Cell::Empty));
    }
    destinations
}

/// All moves for the side to move, with sources in row-major order.
///
/// An empty list means the side to move is stuck; deciding what that means is left to the caller.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(128);
    let own = board.side_to_move.cell();
    for from_sq in (0..NUM_SQUARES).filter(|&sq| board.cells[sq] == own) {
        for to_sq in legal_destinations(board, from_sq) {
            moves.push(Move::new(from_sq, to_sq));
        }
    }
    moves
}
