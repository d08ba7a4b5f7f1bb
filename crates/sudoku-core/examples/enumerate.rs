//! Enumerate every completion of a puzzle that has more than one.

use sudoku_core::{Grid, Solver};

fn main() {
    // A solved grid with four cells cleared so that the digits 1 and 3 can
    // swap around a rectangle; exactly two completions exist.
    let puzzle = "\
        534678912\n\
        672195348\n\
        198342567\n\
        85976.42.\n\
        42685.79.\n\
        713924856\n\
        961537284\n\
        287419635\n\
        345286179\n";

    let grid = Grid::from_string(puzzle).expect("fixture parses");
    println!("Puzzle ({} empty cells):", grid.empty_count());
    print!("{}", grid);

    let solver = Solver::new();
    match solver.solve_all(&grid) {
        Ok(solutions) => {
            for (i, solution) in solutions.iter().enumerate() {
                println!("\nSolution {}:", i + 1);
                print!("{}", solution);
            }
            let n = solutions.len();
            println!("\nFound {} solution{}", n, if n == 1 { "" } else { "s" });
        }
        Err(e) => println!("Puzzle rejected: {}", e),
    }
}
