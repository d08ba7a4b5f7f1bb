//! Exhaustive backtracking search.
//!
//! The solver fills empty cells in reading order, trying digits 1 through 9
//! ascending, and never stops at the first success: every branch is explored,
//! so solutions arrive in lexicographic order of their 81-character form.

use crate::{Grid, Position, MAX_DIGIT};
use std::fmt;

/// Errors produced when a solve is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// A pre-filled cell already violates a row, column, or box constraint.
    InconsistentGivens { pos: Position, digit: u8 },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentGivens { pos, digit } => {
                write!(f, "given {} at {} conflicts with another given", digit, pos)
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Receiver for solved grids.
///
/// Each call hands over an owned snapshot taken at the moment of discovery;
/// the solver keeps mutating its working grid afterwards, so the snapshot is
/// final and safe to retain.
pub trait SolutionSink {
    fn push(&mut self, solution: Grid);
}

/// Collects every solution.
impl SolutionSink for Vec<Grid> {
    fn push(&mut self, solution: Grid) {
        Vec::push(self, solution);
    }
}

/// Discards solutions; useful when only the count matters.
impl SolutionSink for () {
    fn push(&mut self, _solution: Grid) {}
}

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Enumerate every completion of `grid`, pushing each one into `sink` as
    /// it is discovered, and return the total number found.
    ///
    /// Zero completions is a normal outcome, not an error. The givens are
    /// checked first: a grid whose pre-filled cells already conflict is
    /// rejected with [`SolveError::InconsistentGivens`] rather than searched.
    pub fn enumerate<S: SolutionSink>(
        &self,
        grid: &Grid,
        sink: &mut S,
    ) -> Result<usize, SolveError> {
        if let Some((pos, digit)) = grid.find_conflict() {
            return Err(SolveError::InconsistentGivens { pos, digit });
        }

        let mut working = grid.clone();
        let mut count = 0;
        search(&mut working, &mut count, sink);
        Ok(count)
    }

    /// Enumerate into a vector and return it.
    pub fn solve_all(&self, grid: &Grid) -> Result<Vec<Grid>, SolveError> {
        let mut solutions = Vec::new();
        self.enumerate(grid, &mut solutions)?;
        Ok(solutions)
    }

    /// Count completions without keeping them.
    pub fn count_solutions(&self, grid: &Grid) -> Result<usize, SolveError> {
        self.enumerate(grid, &mut ())
    }
}

/// Recursive core. On return the grid is restored to the exact state it had
/// on entry; recursion depth is bounded by the number of empty cells.
fn search<S: SolutionSink>(grid: &mut Grid, count: &mut usize, sink: &mut S) {
    let pos = match grid.first_empty() {
        Some(pos) => pos,
        None => {
            // No empty cell left: the working grid is a complete solution.
            *count += 1;
            sink.push(grid.clone());
            return;
        }
    };

    for digit in 1..=MAX_DIGIT {
        if !grid.gives_conflict(pos, digit) {
            grid.set(pos, Some(digit));
            search(grid, count, sink);
            grid.set(pos, None);
        }
    }
}
