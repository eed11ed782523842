//! Capture resolution run after a piece lands.
//!
//! Two independent rules apply, in this order:
//! - sandwich: straight runs of enemy pieces flanked by the landing piece and another friendly piece
//! - encirclement: enemy groups touching the edge with no liberty and no enemy outside the group

use crate::board::Board;
use crate::constants::{Cell, NUM_SQUARES, Side};
use crate::move_gen::RAY_TABLES;
use log::debug;
use std::collections::VecDeque;

/// Removes every enemy run sandwiched between `to_sq` and a piece of `mover`.
///
/// Only rays starting at `to_sq` are examined. Returns the cleared squares.
pub fn resolve_sandwich(board: &mut Board, to_sq: usize, mover: Side) -> Vec<usize> {
    let own = mover.cell();
    let enemy = mover.opponent().cell();
    let mut captured = Vec::new();

    for ray in &RAY_TABLES.rays[to_sq] {
        let mut run = Vec::new();
        for &sq in ray {
            let cell = board.cells[sq];
            if cell == enemy {
                run.push(sq);
            } else {
                if cell == own {
                    captured.append(&mut run);
                }
                break;
            }
        }
    }

    for &sq in &captured {
        board.cells[sq] = Cell::Empty;
    }
    if !captured.is_empty() {
        debug!("Sandwich captured {} piece(s)", captured.len());
    }
    captured
}

/// Removes every enemy group that touches the board edge and is closed in by `mover`.
///
/// Groups are collected first and then tested one by one. Returns the cleared squares.
pub fn resolve_encirclement(board: &mut Board, mover: Side) -> Vec<usize> {
    let enemy = mover.opponent().cell();
    let groups = find_edge_groups(board, enemy);

    let mut captured = Vec::new();
    for group in groups {
        if is_group_enclosed(board, &group, enemy) {
            for &sq in &group {
                board.cells[sq] = Cell::Empty;
            }
            debug!("Encirclement captured a group of {}", group.len());
            captured.extend(group);
        }
    }
    captured
}

/// Connected groups of `enemy` cells seeded from unvisited edge squares.
fn find_edge_groups(board: &Board, enemy: Cell) -> Vec<Vec<usize>> {
    let mut visited = [false; NUM_SQUARES];
    let mut groups = Vec::new();
    for &seed in &RAY_TABLES.edge_squares {
        if board.cells[seed] == enemy && !visited[seed] {
            groups.push(expand_group(board, seed, enemy, &mut visited));
        }
    }
    groups
}

/// Breadth-first flood fill over orthogonally adjacent `enemy` cells.
fn expand_group(board: &Board, seed: usize, enemy: Cell, visited: &mut [bool; NUM_SQUARES]) -> Vec<usize> {
    let mut group = Vec::new();
    let mut queue = VecDeque::new();
    visited[seed] = true;
    queue.push_back(seed);

    while let Some(sq) = queue.pop_front() {
        group.push(sq);
        for &n in &RAY_TABLES.neighbors[sq] {
            if board.cells[n] == enemy && !visited[n] {
                visited[n] = true;
                queue.push_back(n);
            }
        }
    }
    group
}

/// A group is enclosed when no member has an empty neighbour or an enemy neighbour outside
/// the group. Off-board counts as closed.
fn is_group_enclosed(board: &Board, group: &[usize], enemy: Cell) -> bool {
    let mut in_group = [false; NUM_SQUARES];
    for &sq in group {
        in_group[sq] = true;
    }
    group.iter().all(|&sq| {
        RAY_TABLES.neighbors[sq].iter().all(|&n| match board.cells[n] {
            Cell::Empty => false,
            cell if cell == enemy => in_group[n],
            _ => true,
        })
    })
}
