//! Pluggable move selection for the computer-controlled side.

use crate::board::Board;
use crate::r#move::Move;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks a move for the side to move.
pub trait MoveChooser {
    /// Returns `None` when the side to move has no legal move.
    fn choose(&mut self, board: &Board) -> Option<Move>;

    fn name(&self) -> &str;
}

/// Uniformly random choice among the legal moves.
pub struct RandomChooser {
    rng: StdRng,
}

impl RandomChooser {
    pub fn new() -> Self {
        RandomChooser {
            rng: StdRng::from_entropy(),
        }
    }

    /// A chooser that replays the same sequence of picks for the same seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomChooser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChooser {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveChooser for RandomChooser {
    fn choose(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}

/// Always plays the first generated move. Useful for reproducible games.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstMoveChooser;

impl MoveChooser for FirstMoveChooser {
    fn choose(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().first().copied()
    }

    fn name(&self) -> &str {
        "First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Outcome;
    use crate::constants::{BOARD_SIZE, Cell, Side};

    #[test]
    fn test_random_chooser_selects_legal_move() {
        let mut chooser = RandomChooser::new();
        let board = Board::new();
        let legal = board.legal_moves();

        for _ in 0..100 {
            let mv = chooser.choose(&board).unwrap();
            assert!(legal.contains(&mv), "Move {} is not legal", mv);
        }
    }

    #[test]
    fn test_seeded_choosers_agree() {
        let board = Board::new();
        let mut a = RandomChooser::with_seed(7);
        let mut b = RandomChooser::with_seed(7);
        for _ in 0..10 {
            assert_eq!(a.choose(&board), b.choose(&board));
        }
    }

    #[test]
    fn test_choosers_play_full_game() {
        let mut players: [Box<dyn MoveChooser>; 2] =
            [Box::new(RandomChooser::with_seed(42)), Box::new(FirstMoveChooser)];
        let mut board = Board::new();

        let mut turn = 0;
        while board.outcome().is_none() && turn < 2000 {
            let mover = board.side_to_move;
            let (own_before, enemy_before) = (board.count(mover), board.count(mover.opponent()));
            let mv = players[turn % 2].choose(&board).unwrap();
            let captured = board.apply_move(mv).unwrap();

            assert_eq!(board.count(mover), own_before, "turn {}: mover lost pieces", turn);
            assert_eq!(
                board.count(mover.opponent()) + captured.len(),
                enemy_before,
                "turn {}: captures do not match material drop",
                turn
            );
            assert!(captured.iter().all(|&sq| board.cells[sq] == Cell::Empty));
            turn += 1;
        }

        match board.outcome() {
            Some(Outcome::Material { winner }) => {
                assert!(board.count(winner.opponent()) * 2 < BOARD_SIZE);
            }
            Some(Outcome::NoMoves { winner }) => {
                assert_eq!(board.side_to_move, winner.opponent());
                assert!(board.legal_moves().is_empty());
            }
            None => assert_eq!(turn, 2000),
        }
    }

    #[test]
    fn test_no_moves_gives_none() {
        let mut board = Board::empty(Side::A);
        board.set(0, 0, Cell::A).unwrap();
        board.set(0, 1, Cell::B).unwrap();
        board.set(1, 0, Cell::B).unwrap();
        assert_eq!(RandomChooser::new().choose(&board), None);
        assert_eq!(FirstMoveChooser.choose(&board), None);
        assert_eq!(FirstMoveChooser.name(), "First");
    }
}
