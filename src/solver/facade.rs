//! Public entry points: a full reference solver (reduction + branching) and
//! a reduction-only line solver, plus input validation.
//!
//! Grounded in `original_source/src/picross/src/solver.cpp`'s `RefSolver<BranchingAllowed>`
//! facade and `validate_input_grid`.

use crate::error::SolverError;
use crate::grid::{branch_and_search, Grid, LineSolveOutcome, SearchOutcome, SolverPolicy, WorkGrid};
use crate::input::InputGrid;
use crate::output::{OutputGrid, Solution};
use crate::solver::observer::{AbortSignal, Observer};
use crate::solver::stats::GridStats;

/// How a solve attempt concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// At least one solution was found (see the report's `solutions`).
    Solved,
    /// No arrangement satisfies every line; the grid is unsatisfiable.
    Contradictory,
    /// Reduction alone could not fully determine the grid and branching was
    /// not attempted ([`LineSolver`]) or was disabled.
    NotLineSolvable,
    /// The caller's [`AbortSignal`] returned `true` before a conclusion was
    /// reached.
    Aborted,
}

/// The result of one solve call.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub status: SolverStatus,
    pub solutions: Vec<Solution>,
    pub stats: GridStats,
}

fn build_work_grid(input: &InputGrid, policy: SolverPolicy) -> WorkGrid {
    let grid = Grid::new(input.height(), input.width());
    WorkGrid::new(grid, input.row_constraints(), input.col_constraints(), policy)
}

/// The full solver: line reduction interleaved with branching search,
/// stopping once `max_solutions` solutions have been collected.
pub struct ReferenceSolver {
    pub policy: SolverPolicy,
}

impl Default for ReferenceSolver {
    fn default() -> Self {
        ReferenceSolver {
            policy: SolverPolicy::default(),
        }
    }
}

impl ReferenceSolver {
    pub fn solve(&self, input: &InputGrid) -> Result<SolveReport, SolverError> {
        self.solve_with(input, None, None, usize::MAX)
    }

    pub fn solve_up_to(
        &self,
        input: &InputGrid,
        max_solutions: usize,
    ) -> Result<SolveReport, SolverError> {
        self.solve_with(input, None, None, max_solutions)
    }

    pub fn solve_with(
        &self,
        input: &InputGrid,
        observer: Option<&dyn Observer>,
        abort: Option<&dyn AbortSignal>,
        max_solutions: usize,
    ) -> Result<SolveReport, SolverError> {
        self.solve_with_callback(input, observer, abort, max_solutions, |_| true)
    }

    /// Collects solutions via a callback that may request an early stop by
    /// returning `false`; the returned [`SolveReport`] still carries every
    /// solution seen before the stop.
    pub fn solve_with_callback(
        &self,
        input: &InputGrid,
        observer: Option<&dyn Observer>,
        abort: Option<&dyn AbortSignal>,
        max_solutions: usize,
        mut on_solution: impl FnMut(Solution) -> bool,
    ) -> Result<SolveReport, SolverError> {
        input.validate()?;
        log::info!(
            "solving {}x{} grid (max_solutions={max_solutions})",
            input.height(),
            input.width()
        );

        let work = build_work_grid(input, self.policy);
        let mut stats = GridStats::default();
        let mut solutions = Vec::new();

        let outcome = branch_and_search(
            work,
            observer,
            abort,
            &mut stats,
            max_solutions,
            &mut |grid, depth| {
                let partial = !grid.is_complete();
                let solution = Solution {
                    grid: OutputGrid::from(grid),
                    branching_depth: depth as u32,
                    partial,
                };
                let keep_going = on_solution(solution.clone());
                solutions.push(solution);
                keep_going
            },
        );

        let status = match outcome {
            SearchOutcome::Aborted => SolverStatus::Aborted,
            SearchOutcome::Completed | SearchOutcome::Stopped if solutions.is_empty() => {
                SolverStatus::Contradictory
            }
            SearchOutcome::Completed | SearchOutcome::Stopped => SolverStatus::Solved,
        };
        log::info!("solve finished: {status:?}, {} solution(s)", solutions.len());

        Ok(SolveReport {
            status,
            solutions,
            stats,
        })
    }
}

/// Reduction only, no branching. Returns at most one "solution", and
/// [`SolverStatus::NotLineSolvable`] when reduction reaches a fixed point
/// with cells still unknown.
pub struct LineSolver {
    pub policy: SolverPolicy,
}

impl Default for LineSolver {
    fn default() -> Self {
        LineSolver {
            policy: SolverPolicy::default(),
        }
    }
}

impl LineSolver {
    pub fn solve(&self, input: &InputGrid) -> Result<SolveReport, SolverError> {
        input.validate()?;

        let mut work = build_work_grid(input, self.policy);
        let mut stats = GridStats::default();
        let outcome = work.line_solve(None, None, &mut stats);

        let (status, solutions) = match outcome {
            LineSolveOutcome::Solved => {
                stats.nb_solutions = 1;
                let solution = Solution {
                    grid: OutputGrid::from(work.into_grid()),
                    branching_depth: 0,
                    partial: false,
                };
                (SolverStatus::Solved, vec![solution])
            }
            LineSolveOutcome::Contradiction => (SolverStatus::Contradictory, Vec::new()),
            LineSolveOutcome::NeedsBranching => {
                let solution = Solution {
                    grid: OutputGrid::from(work.into_grid()),
                    branching_depth: 0,
                    partial: true,
                };
                (SolverStatus::NotLineSolvable, vec![solution])
            }
            LineSolveOutcome::Aborted => (SolverStatus::Aborted, Vec::new()),
        };

        Ok(SolveReport {
            status,
            solutions,
            stats,
        })
    }
}

/// Validation result codes, mirroring `original_source`'s
/// `-1`/`0`/`1`/`2` convention (`solver.cpp`'s `validate_input_grid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationCode {
    /// The input clues are not even internally consistent.
    InvalidInput,
    /// No solution exists.
    Zero,
    /// Exactly one solution exists.
    Unique,
    /// More than one solution exists.
    Multiple,
}

impl ValidationCode {
    /// The original's numeric convention: -1/0/1/2.
    pub fn as_code(self) -> i32 {
        match self {
            ValidationCode::InvalidInput => -1,
            ValidationCode::Zero => 0,
            ValidationCode::Unique => 1,
            ValidationCode::Multiple => 2,
        }
    }
}

/// Classifies an input grid by solution count, without collecting more than
/// two solutions -- grounded in `validate_input_grid`'s `max_nb_solutions = 2`.
pub fn validate(input: &InputGrid) -> ValidationCode {
    if input.validate().is_err() {
        return ValidationCode::InvalidInput;
    }
    let solver = ReferenceSolver::default();
    match solver.solve_up_to(input, 2) {
        Err(_) => ValidationCode::InvalidInput,
        Ok(report) => match report.solutions.len() {
            0 => ValidationCode::Zero,
            1 => ValidationCode::Unique,
            _ => ValidationCode::Multiple,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testgen::random_solved_grid;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A randomly-generated solved grid is always among the solutions the
    /// solver finds for its own derived clues.
    #[test]
    fn random_solved_grid_is_reproduced_by_the_solver() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let generated = random_solved_grid(&mut rng, 4, 4);
            let report = ReferenceSolver::default().solve(&generated.input).unwrap();
            assert_eq!(report.status, SolverStatus::Solved);
            let found = report.solutions.iter().any(|solution| {
                (0..generated.height).all(|r| {
                    (0..generated.width).all(|c| {
                        solution.grid.get_tile(r, c) == generated.tiles[r * generated.width + c]
                    })
                })
            });
            assert!(found, "solver did not reproduce the original grid");
        }
    }

    /// A 1x1 grid with clue `[1]` on both axes has exactly one solution, a
    /// single filled cell.
    #[test]
    fn single_cell_has_one_solution() {
        let input = InputGrid::new(vec![vec![1]], vec![vec![1]]);
        let report = ReferenceSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Solved);
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].grid.get_tile(0, 0), crate::core::Tile::Filled);
        assert_eq!(report.solutions[0].branching_depth, 0);
        assert!(!report.solutions[0].partial);
    }

    /// A plus-sign shape on a 3x3 grid, fully determined by reduction
    /// alone, no branching required.
    #[test]
    fn plus_sign_is_line_solvable() {
        let input = InputGrid::new(
            vec![vec![1], vec![3], vec![1]],
            vec![vec![1], vec![3], vec![1]],
        );
        let report = LineSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Solved);
        let grid = &report.solutions[0].grid;
        assert_eq!(grid.get_tile(1, 0), crate::core::Tile::Filled);
        assert_eq!(grid.get_tile(1, 1), crate::core::Tile::Filled);
        assert_eq!(grid.get_tile(1, 2), crate::core::Tile::Filled);
        assert_eq!(grid.get_tile(0, 0), crate::core::Tile::Empty);
        assert_eq!(report.solutions[0].branching_depth, 0);
    }

    /// Contradictory clues (rows imply more filled cells than columns can
    /// hold) are rejected at validation, before any solving.
    #[test]
    fn contradictory_input_is_rejected() {
        let input = InputGrid::new(vec![vec![2]], vec![vec![1]]);
        let err = ReferenceSolver::default().solve(&input).unwrap_err();
        assert!(matches!(err, SolverError::RowColTotalMismatch { .. }));
    }

    /// A 2x2 grid with clue `[1]` everywhere is ambiguous (needs branching)
    /// and has exactly two solutions.
    #[test]
    fn fully_ambiguous_2x2_has_multiple_solutions() {
        let input = InputGrid::new(vec![vec![1], vec![1]], vec![vec![1], vec![1]]);
        let report = ReferenceSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Solved);
        assert_eq!(report.solutions.len(), 2);
        assert!(report.solutions.iter().all(|s| s.branching_depth >= 1));
        assert_eq!(validate(&input), ValidationCode::Multiple);
    }

    /// An unsatisfiable grid whose clues individually fit and whose
    /// row/column totals match, but whose forced arrangement still
    /// conflicts once solved. Row 0's clue `[3]` forces every column filled
    /// at row 0, which directly contradicts column 2's clue `[0]`.
    #[test]
    fn unsatisfiable_grid_passes_cheap_validation_but_has_zero_solutions() {
        let input = InputGrid::new(vec![vec![3], vec![1]], vec![vec![2], vec![2], vec![0]]);
        assert!(input.validate().is_ok());
        let report = ReferenceSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Contradictory);
        assert!(report.solutions.is_empty());
        assert_eq!(validate(&input), ValidationCode::Zero);
    }

    /// An empty line (clue `[]`) is entirely empty cells.
    #[test]
    fn empty_clue_means_all_empty() {
        let input = InputGrid::new(vec![vec![]], vec![vec![], vec![]]);
        let report = LineSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Solved);
        let grid = &report.solutions[0].grid;
        assert_eq!(grid.get_tile(0, 0), crate::core::Tile::Empty);
        assert_eq!(grid.get_tile(0, 1), crate::core::Tile::Empty);
    }

    /// Declaring a row clue as `[]` or as `[0]` must produce identical
    /// solution sets -- zeros are stripped as non-meaningful separators.
    #[test]
    fn zero_clue_is_equivalent_to_empty_clue() {
        let blank = InputGrid::new(vec![vec![]], vec![vec![], vec![]]);
        let zero = InputGrid::new(vec![vec![0]], vec![vec![0], vec![0]]);
        let blank_report = LineSolver::default().solve(&blank).unwrap();
        let zero_report = LineSolver::default().solve(&zero).unwrap();
        assert_eq!(blank_report.solutions[0].grid.get_tile(0, 0), zero_report.solutions[0].grid.get_tile(0, 0));
        assert_eq!(blank_report.solutions[0].grid.get_tile(0, 1), zero_report.solutions[0].grid.get_tile(0, 1));
    }

    /// "Smile": a 2x4 grid not solvable by reduction alone -- branching
    /// picks out the single arrangement satisfying every clue.
    #[test]
    fn smile_puzzle_requires_branching_and_has_one_solution() {
        let input = InputGrid::new(
            vec![vec![1, 1], vec![2]],
            vec![vec![1], vec![1], vec![1], vec![1]],
        );
        let report = ReferenceSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Solved);
        assert_eq!(report.solutions.len(), 1);
        let solution = &report.solutions[0];
        assert!(solution.branching_depth >= 1);
        let grid = &solution.grid;
        let expected = ["#..#", ".##."];
        for (r, row) in expected.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let expect = if ch == '#' {
                    crate::core::Tile::Filled
                } else {
                    crate::core::Tile::Empty
                };
                assert_eq!(grid.get_tile(r, c), expect, "mismatch at ({r},{c})");
            }
        }
    }

    /// "Note": a 6x6 grid fully determined by reduction alone.
    #[test]
    fn note_puzzle_is_line_solvable() {
        let input = InputGrid::new(
            vec![vec![3], vec![1, 1], vec![1, 1], vec![3], vec![3], vec![]],
            vec![vec![], vec![2], vec![2], vec![5], vec![1], vec![3]],
        );
        let report = LineSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Solved);
        let solution = &report.solutions[0];
        assert_eq!(solution.branching_depth, 0);
        assert!(!solution.partial);
        let grid = &solution.grid;
        let expected = ["...###", "...#.#", "...#.#", ".###..", ".###..", "......"];
        for (r, row) in expected.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let expect = if ch == '#' {
                    crate::core::Tile::Filled
                } else {
                    crate::core::Tile::Empty
                };
                assert_eq!(grid.get_tile(r, c), expect, "mismatch at ({r},{c})");
            }
        }
    }

    /// "Notes": two stacked copies of "Note" and its reverse, ambiguous as
    /// to which half holds which -- exactly two solutions.
    #[test]
    fn ambiguous_notes_puzzle_has_two_solutions() {
        let input = InputGrid::new(
            vec![
                vec![3],
                vec![1, 1],
                vec![1, 1],
                vec![3],
                vec![3],
                vec![3],
                vec![1, 1],
                vec![1, 1],
                vec![3],
                vec![3],
            ],
            vec![
                vec![2],
                vec![2],
                vec![5],
                vec![1],
                vec![3],
                vec![2],
                vec![2],
                vec![5],
                vec![1],
                vec![3],
            ],
        );
        let report = ReferenceSolver::default().solve(&input).unwrap();
        assert_eq!(report.status, SolverStatus::Solved);
        assert_eq!(report.solutions.len(), 2);
        assert_ne!(report.solutions[0].grid, report.solutions[1].grid);
        assert_eq!(validate(&input), ValidationCode::Multiple);
    }

    /// `solve_with_callback`'s stop contract: returning `false` after the
    /// first solution halts the search even when more solutions remain.
    #[test]
    fn solve_with_callback_stops_when_callback_returns_false() {
        let input = InputGrid::new(vec![vec![1], vec![1]], vec![vec![1], vec![1]]);
        let mut seen = 0;
        let report = ReferenceSolver::default()
            .solve_with_callback(&input, None, None, usize::MAX, |_solution| {
                seen += 1;
                false
            })
            .unwrap();
        assert_eq!(seen, 1);
        assert_eq!(report.solutions.len(), 1);
    }
}
