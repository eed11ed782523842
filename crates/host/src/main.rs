//! Line-oriented host for the Hasami Shogi engine.
//!
//! Holds at most one game, imports and exports it as JSON, and runs one engine
//! call per command. A finished game is dropped after its last move is reported.

use hasami_engine::constants::{BOARD_SIZE, sq_to_idx};
use hasami_engine::{Board, Config, Move, StateError, parse_move};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("no game in progress; send `new` or `load`")]
    NoGame,

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("bad move request: {0}")]
    BadRequest(String),

    #[error("state error: {0}")]
    State(#[from] StateError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Body of a `move {"from": [r, c], "to": [r, c]}` command.
#[derive(Debug, Deserialize)]
struct ActionRequest {
    from: [usize; 2],
    to: [usize; 2],
}

#[derive(Debug, Serialize)]
struct ActionResponse {
    status: &'static str,
    is_valid: bool,
    board: Vec<Vec<i8>>,
    player: i8,
    is_finished: bool,
    winner: Option<i8>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

enum Reply {
    Output(String),
    Quit,
}

#[derive(Default)]
struct Session {
    game: Option<Board>,
}

impl Session {
    fn handle(&mut self, line: &str) -> Result<Reply, HostError> {
        let line = line.trim();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let output = match command {
            "new" => {
                let board = Board::new();
                let json = board.to_json()?;
                self.game = Some(board);
                info!("Started a new game");
                json
            }
            "load" => {
                let board = Board::from_json(rest)?;
                let json = board.to_json()?;
                self.game = Some(board);
                json
            }
            "state" => self.game()?.to_json()?,
            "moves" => {
                let moves: Vec<[[usize; 2]; 2]> = self
                    .game()?
                    .legal_moves()
                    .iter()
                    .map(|mv| {
                        let (fr, fc) = mv.from_coords_pair();
                        let (tr, tc) = mv.to_coords_pair();
                        [[fr, fc], [tr, tc]]
                    })
                    .collect();
                serde_json::to_string(&moves)?
            }
            "move" => {
                let mv = parse_action(rest)?;
                self.take_action(mv)?
            }
            "quit" => return Ok(Reply::Quit),
            other => return Err(HostError::UnknownCommand(other.to_string())),
        };
        Ok(Reply::Output(output))
    }

    fn game(&self) -> Result<&Board, HostError> {
        self.game.as_ref().ok_or(HostError::NoGame)
    }

    fn take_action(&mut self, mv: Move) -> Result<String, HostError> {
        let board = self.game.as_mut().ok_or(HostError::NoGame)?;
        let is_valid = match board.apply_move(mv) {
            Ok(_) => true,
            Err(e) => {
                warn!("Invalid move {}: {}", mv, e);
                false
            }
        };

        let record = board.to_record();
        let outcome = board.outcome();
        if let Some(outcome) = outcome {
            info!("Game over: {:?}", outcome);
            self.game = None;
        }

        let response = ActionResponse {
            status: "success",
            is_valid,
            board: record.board,
            player: record.player,
            is_finished: outcome.is_some(),
            winner: outcome.map(|o| o.winner() as i8),
        };
        Ok(serde_json::to_string(&response)?)
    }
}

/// Accepts either notation (`E9-E6`) or a JSON body with `from`/`to` coordinates.
fn parse_action(text: &str) -> Result<Move, HostError> {
    if text.starts_with('{') {
        let request: ActionRequest = serde_json::from_str(text)?;
        for [r, c] in [request.from, request.to] {
            if r >= BOARD_SIZE || c >= BOARD_SIZE {
                return Err(HostError::BadRequest(format!("({}, {}) is off the board", r, c)));
            }
        }
        let [fr, fc] = request.from;
        let [tr, tc] = request.to;
        Ok(Move::new(sq_to_idx(fr, fc), sq_to_idx(tr, tc)))
    } else {
        parse_move(text).map_err(|e| HostError::BadRequest(e.to_string()))
    }
}

fn error_line(err: &HostError) -> String {
    let response = ErrorResponse {
        status: "error",
        message: err.to_string(),
    };
    serde_json::to_string(&response)
        .unwrap_or_else(|_| "{\"status\":\"error\"}".to_string())
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}; using defaults", e);
            Config::default()
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let mut session = Session::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let output = match session.handle(&line) {
            Ok(Reply::Output(output)) => output,
            Ok(Reply::Quit) => break,
            Err(e) => error_line(&e),
        };
        if writeln!(stdout, "{}", output).and_then(|_| stdout.flush()).is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(session: &mut Session, line: &str) -> String {
        match session.handle(line) {
            Ok(Reply::Output(output)) => output,
            Ok(Reply::Quit) => panic!("unexpected quit"),
            Err(e) => panic!("command failed: {}", e),
        }
    }

    #[test]
    fn test_commands_need_a_game() {
        let mut session = Session::default();
        assert!(matches!(session.handle("moves"), Err(HostError::NoGame)));
        assert!(matches!(session.handle("move E9-E6"), Err(HostError::NoGame)));
        assert!(matches!(session.handle("jump"), Err(HostError::UnknownCommand(_))));
        assert!(matches!(session.handle("quit"), Ok(Reply::Quit)));
    }

    #[test]
    fn test_new_and_moves() {
        let mut session = Session::default();
        let state = output(&mut session, "new");
        assert!(state.ends_with("\"player\":1}"));

        let moves: Vec<[[usize; 2]; 2]> = serde_json::from_str(&output(&mut session, "moves")).unwrap();
        assert_eq!(moves.len(), 63);
        assert_eq!(moves[0], [[8, 0], [7, 0]]);
    }

    #[test]
    fn test_move_in_both_forms() {
        let mut session = Session::default();
        output(&mut session, "new");

        let reply: serde_json::Value = serde_json::from_str(&output(&mut session, "move e9-e6")).unwrap();
        assert_eq!(reply["status"], "success");
        assert_eq!(reply["is_valid"], true);
        assert_eq!(reply["player"], -1);
        assert_eq!(reply["board"][5][4], 1);
        assert_eq!(reply["is_finished"], false);
        assert!(reply["winner"].is_null());

        let reply: serde_json::Value =
            serde_json::from_str(&output(&mut session, r#"move {"from": [0, 0], "to": [0, 1]}"#)).unwrap();
        assert_eq!(reply["is_valid"], false);
        assert_eq!(reply["player"], -1);
    }

    #[test]
    fn test_bad_move_requests() {
        let mut session = Session::default();
        output(&mut session, "new");
        assert!(matches!(session.handle("move Z9-A1"), Err(HostError::BadRequest(_))));
        assert!(matches!(
            session.handle(r#"move {"from": [9, 0], "to": [0, 0]}"#),
            Err(HostError::BadRequest(_))
        ));
        assert!(matches!(session.handle("move {\"from\": [0, 0]}"), Err(HostError::Json(_))));
    }

    #[test]
    fn test_finished_game_is_dropped() {
        let mut session = Session::default();
        let board = Board::from_fen("bbbb5/9/9/9/ab7/9/9/9/aaaa2a2 a").unwrap();
        let json = board.to_json().unwrap();
        output(&mut session, &format!("load {}", json));

        let reply: serde_json::Value = serde_json::from_str(&output(&mut session, "move C9-C5")).unwrap();
        assert_eq!(reply["is_valid"], true);
        assert_eq!(reply["is_finished"], true);
        assert_eq!(reply["winner"], 1);
        assert!(matches!(session.handle("state"), Err(HostError::NoGame)));
    }

    #[test]
    fn test_load_rejects_bad_state() {
        let mut session = Session::default();
        assert!(matches!(
            session.handle("load {\"board\": [[0]], \"player\": 1}"),
            Err(HostError::State(StateError::RowCount { .. }))
        ));
        assert!(matches!(
            session.handle("load {\"player\": 1}"),
            Err(HostError::State(StateError::Json(_)))
        ));
        let line = error_line(&HostError::NoGame);
        assert!(line.starts_with("{\"status\":\"error\""));
    }
}
