//! The text user interface: a human against the move chooser.

use crossterm::style::{StyledContent, Stylize};
use hasami_engine::board::Outcome;
use hasami_engine::constants::{BOARD_SIZE, sq_to_idx};
use hasami_engine::{Board, Cell, MoveChooser, RandomChooser, Side, parse_move};
use log::{info, warn};
use std::io::{self, BufRead, Write};

/// Runs the main game loop for the text-based UI.
pub fn run(config: &hasami_engine::Config) -> io::Result<()> {
    let mut board = Board::new();
    let mut chooser = match config.seed {
        Some(seed) => RandomChooser::with_seed(seed),
        None => RandomChooser::new(),
    };
    let human = config.human_side;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "--- Hasami Shogi ---")?;
    writeln!(
        out,
        "You play {} ({}), the computer plays {}.",
        human.name(),
        piece_glyph(human.cell()),
        human.opponent().name()
    )?;
    writeln!(out, "Enter moves like E9-E6. Type 'exit' to quit.")?;

    loop {
        writeln!(out)?;
        print_board(&mut out, &board)?;

        if let Some(outcome) = board.outcome() {
            announce(&mut out, outcome, human)?;
            break;
        }

        if board.side_to_move == human {
            // --- Player's Turn ---
            write!(out, "Your move: ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("exit") {
                break;
            }

            let mv = match parse_move(line) {
                Ok(mv) => mv,
                Err(e) => {
                    warn!("Could not parse {:?}: {}", line, e);
                    writeln!(out, "Invalid input ({}). Please try again.", e)?;
                    continue;
                }
            };
            if let Err(e) = board.apply_move(mv) {
                writeln!(out, "Illegal move: {}. Please try again.", e)?;
                continue;
            }
        } else {
            // --- Computer's Turn ---
            let Some(mv) = chooser.choose(&board) else {
                // outcome() already reports a side without moves.
                break;
            };
            if let Err(e) = board.apply_move(mv) {
                warn!("{} chooser produced an illegal move {}: {}", chooser.name(), mv, e);
                break;
            }
            info!("Computer played {}", mv);
            writeln!(out, "Computer moves: {}", mv)?;
        }
    }
    Ok(())
}

fn piece_glyph(cell: Cell) -> StyledContent<char> {
    match cell {
        Cell::A => 'a'.red().bold(),
        Cell::B => 'b'.blue().bold(),
        Cell::Empty => '.'.dark_grey(),
    }
}

fn print_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    write!(out, "  ")?;
    for c in 0..BOARD_SIZE {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out)?;
    for r in 0..BOARD_SIZE {
        write!(out, "{:>2}", r + 1)?;
        for c in 0..BOARD_SIZE {
            write!(out, " {}", piece_glyph(board.cells[sq_to_idx(r, c)]))?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "A: {} pieces, B: {} pieces, {} to move",
        board.count(Side::A),
        board.count(Side::B),
        board.side_to_move.name()
    )
}

fn announce(out: &mut impl Write, outcome: Outcome, human: Side) -> io::Result<()> {
    let reason = match outcome {
        Outcome::Material { .. } => "too few pieces left",
        Outcome::NoMoves { .. } => "no legal moves left",
    };
    if outcome.winner() == human {
        writeln!(out, "{} You win! (opponent has {})", "Game over.".green().bold(), reason)
    } else {
        writeln!(out, "{} You lose. (you have {})", "Game over.".red().bold(), reason)
    }
}
