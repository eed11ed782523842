//! Import and export of game state as a flat `{board, player}` record.
//!
//! This is the data contract with whatever stores games between actions. The record
//! serializes to JSON as `{"board": [[..9 ints..] x 9], "player": 1}`.

use crate::board::Board;
use crate::constants::{BOARD_SIZE, Cell, Side, sq_to_idx};
use crate::error::StateError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Rows of cell values: 0 empty, 1 Side A, -1 Side B.
    pub board: Vec<Vec<i8>>,
    /// 1 for Side A, -1 for Side B.
    pub player: i8,
}

impl From<&Board> for GameRecord {
    fn from(board: &Board) -> Self {
        let rows = (0..BOARD_SIZE)
            .map(|r| (0..BOARD_SIZE).map(|c| board.cells[sq_to_idx(r, c)] as i8).collect())
            .collect();
        GameRecord {
            board: rows,
            player: board.side_to_move as i8,
        }
    }
}

impl TryFrom<&GameRecord> for Board {
    type Error = StateError;

    /// Refuses records with the wrong shape or unknown values instead of patching them.
    fn try_from(record: &GameRecord) -> Result<Self, Self::Error> {
        let side = Side::from_i8(record.player).ok_or(StateError::Player(record.player))?;
        if record.board.len() != BOARD_SIZE {
            return Err(StateError::RowCount {
                expected: BOARD_SIZE,
                found: record.board.len(),
            });
        }

        let mut board = Board::empty(side);
        for (r, row) in record.board.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(StateError::RowLength {
                    row: r,
                    expected: BOARD_SIZE,
                    found: row.len(),
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let cell = Cell::from_i8(value).ok_or(StateError::CellValue { row: r, col: c, value })?;
                board.cells[sq_to_idx(r, c)] = cell;
            }
        }
        Ok(board)
    }
}

impl Board {
    pub fn to_record(&self) -> GameRecord {
        GameRecord::from(self)
    }

    pub fn from_record(record: &GameRecord) -> Result<Self, StateError> {
        Board::try_from(record)
    }

    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Missing keys and wrong types fail here rather than falling back to defaults.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        let record: GameRecord = serde_json::from_str(json)?;
        Board::from_record(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#move::Move;

    #[test]
    fn test_record_layout() {
        let record = Board::new().to_record();
        assert_eq!(record.player, 1);
        assert_eq!(record.board[0], vec![-1; 9]);
        assert_eq!(record.board[4], vec![0; 9]);
        assert_eq!(record.board[8], vec![1; 9]);
    }

    #[test]
    fn test_json_round_trip_after_moves() {
        let mut board = Board::new();
        board.apply_move(Move::from_coords((8, 4), (5, 4)).unwrap()).unwrap();
        board.apply_move(Move::from_coords((0, 0), (3, 0)).unwrap()).unwrap();

        let json = board.to_json().unwrap();
        assert!(json.starts_with("{\"board\":[[0,-1,-1"));
        assert!(json.ends_with("\"player\":1}"));
        assert_eq!(Board::from_json(&json).unwrap(), board);
    }

    #[test]
    fn test_import_rejects_malformed_state() {
        assert!(matches!(
            Board::from_json("{\"board\": []}"),
            Err(StateError::Json(_))
        ));
        assert!(matches!(
            Board::from_json("{\"board\": [], \"player\": 1}"),
            Err(StateError::RowCount { found: 0, .. })
        ));
        assert!(matches!(
            Board::from_json("{\"board\": [], \"player\": 0}"),
            Err(StateError::Player(0))
        ));

        let mut record = Board::new().to_record();
        record.board[3].pop();
        assert!(matches!(
            Board::from_record(&record),
            Err(StateError::RowLength { row: 3, found: 8, .. })
        ));

        let mut record = Board::new().to_record();
        record.board[2][5] = 7;
        assert!(matches!(
            Board::from_record(&record),
            Err(StateError::CellValue { row: 2, col: 5, value: 7 })
        ));
    }
}
