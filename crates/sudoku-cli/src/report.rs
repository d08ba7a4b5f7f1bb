//! Solution sinks and terminal reporting.

use serde::Serialize;
use std::io::Write;
use sudoku_core::{Grid, SolutionSink};

/// Streams each solution to the terminal the moment it is found, each grid
/// followed by a blank line.
pub struct PrintSink<W: Write> {
    out: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SolutionSink for PrintSink<W> {
    fn push(&mut self, solution: Grid) {
        let _ = writeln!(self.out, "{}", solution);
    }
}

/// Closing summary line, pluralized.
pub fn summary_line(count: usize) -> String {
    format!(
        "Found {} solution{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// JSON payload for `--json` output.
#[derive(Serialize)]
pub struct Report {
    pub count: usize,
    pub solutions: Vec<Grid>,
}

impl Report {
    pub fn new(solutions: Vec<Grid>) -> Self {
        Self {
            count: solutions.len(),
            solutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sudoku_core::Solver;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_print_sink_streams_bordered_grids() {
        let grid = Grid::from_string(SOLVED).unwrap();

        let mut sink = PrintSink::new(Vec::new());
        let count = Solver::new().enumerate(&grid, &mut sink).unwrap();
        assert_eq!(count, 1);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("-------------------------\n| 5 3 4 | 6 7 8 | 9 1 2 |"));
        assert!(text.ends_with("-------------------------\n\n"));
    }

    #[test]
    fn test_summary_line_pluralization() {
        assert_eq!(summary_line(0), "Found 0 solutions");
        assert_eq!(summary_line(1), "Found 1 solution");
        assert_eq!(summary_line(2), "Found 2 solutions");
    }

    #[test]
    fn test_report_json_shape() {
        let grid = Grid::from_string(SOLVED).unwrap();
        let report = Report::new(vec![grid]);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["solutions"][0]["cells"][8][8], 9);
    }
}
