//! Command-line exhaustive Sudoku solver.
//!
//! Reads a puzzle from an argument, a file, or stdin, enumerates every
//! completion, and prints each solution the moment it is found.

mod report;

use clap::Parser;
use report::{summary_line, PrintSink, Report};
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_core::{Grid, GridError, SolveError, Solver};

/// Enumerate every completion of a 9x9 Sudoku puzzle.
#[derive(Parser)]
#[command(name = "sudoku-solve", version, about)]
struct Cli {
    /// Puzzle as 81 cells, digits 1-9 with 0 or . for empty; whitespace is ignored
    puzzle: Option<String>,

    /// Read the puzzle text from a file
    #[arg(short, long, conflicts_with = "puzzle")]
    file: Option<PathBuf>,

    /// Print one JSON document instead of bordered grids
    #[arg(long)]
    json: bool,

    /// Print only the number of solutions
    #[arg(short = 'q', long, conflicts_with = "json")]
    count_only: bool,
}

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Parse(GridError),
    Solve(SolveError),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read puzzle: {}", e),
            Self::Parse(e) => write!(f, "bad puzzle text: {}", e),
            Self::Solve(e) => write!(f, "{}", e),
            Self::Json(e) => write!(f, "could not serialize solutions: {}", e),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        Self::Parse(e)
    }
}

impl From<SolveError> for CliError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_puzzle_text(cli: &Cli) -> Result<String, CliError> {
    match (&cli.puzzle, &cli.file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let grid = Grid::from_string(&read_puzzle_text(cli)?)?;
    let solver = Solver::new();

    if cli.json {
        let report = Report::new(solver.solve_all(&grid)?);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if cli.count_only {
        println!("{}", solver.count_solutions(&grid)?);
    } else {
        let mut sink = PrintSink::new(io::stdout());
        let count = solver.enumerate(&grid, &mut sink)?;
        println!("{}", summary_line(count));
    }
    Ok(())
}
