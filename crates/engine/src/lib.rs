pub mod board;
pub mod capture;
pub mod chooser;
pub mod config;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod r#move;
pub mod notation;
pub mod state;

pub use board::{Board, Outcome};
pub use chooser::{FirstMoveChooser, MoveChooser, RandomChooser};
pub use config::Config;
pub use constants::{BOARD_SIZE, Cell, Side};
pub use error::{ConfigError, MoveError, ParseError, StateError};
pub use r#move::Move;
pub use notation::parse_move;
pub use state::GameRecord;
