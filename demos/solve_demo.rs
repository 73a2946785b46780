//! Solves a couple of hand-written puzzles and prints the result, the way a
//! CLI or GUI front end would drive this crate. Not a CLI itself -- no
//! argument parsing, no file format.

use nonogram_core::{InputGrid, ReferenceSolver, SolverStatus};

fn print_puzzle(name: &str, input: &InputGrid) {
    println!("=== {name} ===");
    let report = ReferenceSolver::default().solve(input).expect("valid input");
    match report.status {
        SolverStatus::Solved => {
            println!("{} solution(s):", report.solutions.len());
            for solution in &report.solutions {
                println!("(branching depth {})", solution.branching_depth);
                println!("{}", solution.grid);
            }
        }
        SolverStatus::Contradictory => println!("no solution exists"),
        SolverStatus::NotLineSolvable => println!("line reduction alone was inconclusive"),
        SolverStatus::Aborted => println!("aborted"),
    }
    println!(
        "branching calls: {}, lines reduced: {}",
        report.stats.nb_branching_calls, report.stats.total_lines_reduced
    );
}

fn main() {
    env_logger::init();

    let plus_sign = InputGrid::new(
        vec![vec![1], vec![3], vec![1]],
        vec![vec![1], vec![3], vec![1]],
    );
    print_puzzle("plus sign", &plus_sign);

    let ambiguous = InputGrid::new(vec![vec![1], vec![1]], vec![vec![1], vec![1]]);
    print_puzzle("ambiguous 2x2", &ambiguous);
}
