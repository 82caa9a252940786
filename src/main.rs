//! Command-line front end for the N×N Sudoku engine.
//!
//! Reads a fixed-width grid from standard input and writes results to
//! standard output; logs go to standard error. Exit codes: 0 solved/valid,
//! 1 unsolvable/invalid, 2 malformed input or usage error.

use nsudoku::{codec, generator::Generator, validator, Solver};
use std::env;
use std::io::Read;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

const EXIT_FAILED: i32 = 1;
const EXIT_MALFORMED: i32 = 2;

fn main() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let code = match args.get(1).map(String::as_str) {
        None | Some("solve") => cmd_solve(),
        Some("validate") => cmd_validate(),
        Some("generate") => cmd_generate(args.get(2).map(String::as_str)),
        Some(other) => {
            error!("Unknown command: {}", other);
            error!("Usage: nsudoku [solve | validate | generate [n]]");
            EXIT_MALFORMED
        }
    };
    std::process::exit(code);
}

fn cmd_solve() -> i32 {
    let board = match read_board() {
        Ok(board) => board,
        Err(code) => return code,
    };

    let mut solver = Solver::new(board);
    match solver.solve() {
        Ok(solved) => {
            info!(
                "Solved {0}×{0} puzzle after {1} branch trials",
                solved.size(),
                solver.branches()
            );
            print!("{}", codec::render(&solved));
            0
        }
        Err(e) => {
            error!("{}", e);
            EXIT_FAILED
        }
    }
}

fn cmd_validate() -> i32 {
    let board = match read_board() {
        Ok(board) => board,
        Err(code) => return code,
    };

    match validator::find_conflict(&board) {
        None => {
            info!("Grid is valid");
            0
        }
        Some(conflict) => {
            error!("Grid is not valid: {}", conflict);
            EXIT_FAILED
        }
    }
}

fn cmd_generate(arg: Option<&str>) -> i32 {
    let box_size = match arg {
        None => 3,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                error!("Invalid box size: {:?}", raw);
                return EXIT_MALFORMED;
            }
        },
    };

    match Generator::new(box_size).generate() {
        Ok(board) => {
            print!("{}", codec::render(&board));
            0
        }
        Err(e) => {
            error!("Failed to generate puzzle: {}", e);
            EXIT_MALFORMED
        }
    }
}

fn read_board() -> Result<nsudoku::Board, i32> {
    let mut text = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut text) {
        error!("Failed to read input: {}", e);
        return Err(EXIT_MALFORMED);
    }
    codec::parse(&text).map_err(|e| {
        error!("{}", e);
        EXIT_MALFORMED
    })
}
