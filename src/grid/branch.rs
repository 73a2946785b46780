//! Branching search: when reduction alone reaches a fixed point with cells
//! still unknown, pick the least-ambiguous incomplete line and try each of
//! its remaining arrangements in turn.
//!
//! Grounded in `original_source/src/picross/src/work_grid.cpp`'s `branch()`,
//! which clones the whole `WorkGrid` per candidate rather than pushing and
//! popping an undo record -- the same clone-then-mutate shape as the
//! teacher's `Sentinel::branch` in `game/src/model/solver.rs` and
//! `Grid::try_adjust_at`/`adjust_at` in `game/src/model/grid.rs`. `spec.md`
//! §9 rules out a mutable undo stack explicitly; this module never uses one.

use crate::grid::grid::Grid;
use crate::grid::work_grid::{LineSolveOutcome, WorkGrid};
use crate::solver::observer::{AbortSignal, Observer, ObserverEvent};
use crate::solver::stats::GridStats;

/// How a `branch_and_search` call concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search explored everything it was going to (possibly capped by
    /// `max_solutions`).
    Completed,
    /// `on_solution` returned `false`, requesting an early stop.
    Stopped,
    /// The caller's `abort` signal fired.
    Aborted,
}

/// Exhaustively searches `work` for solutions, up to `max_solutions`,
/// invoking `on_solution(grid, branching_depth)` for each. `on_solution`
/// returns `false` to request that the search stop after that solution,
/// mirroring the callback's "return false to stop" contract.
///
/// Each recursive branch accumulates its own [`GridStats`] and merges it
/// into `stats` on return, so `stats` always reflects everything explored
/// so far, the same accumulate-on-return shape as the `save_solution`/stats
/// bookkeeping in `original_source/src/picross/src/work_grid.cpp`'s `branch()`.
pub fn branch_and_search(
    mut work: WorkGrid,
    observer: Option<&dyn Observer>,
    abort: Option<&dyn AbortSignal>,
    stats: &mut GridStats,
    max_solutions: usize,
    on_solution: &mut dyn FnMut(Grid, usize) -> bool,
) -> SearchOutcome {
    if let Some(signal) = abort {
        if signal.should_abort() {
            return SearchOutcome::Aborted;
        }
    }

    match work.line_solve(observer, abort, stats) {
        LineSolveOutcome::Contradiction => SearchOutcome::Completed,
        LineSolveOutcome::Aborted => SearchOutcome::Aborted,
        LineSolveOutcome::Solved => {
            stats.nb_solutions += 1;
            if let Some(obs) = observer {
                obs.notify(ObserverEvent::SolvedGrid, None, work.depth());
            }
            if on_solution(work.grid().clone(), work.depth()) {
                SearchOutcome::Completed
            } else {
                SearchOutcome::Stopped
            }
        }
        LineSolveOutcome::NeedsBranching => {
            let candidates = work.incomplete_lines_by_alternatives();
            let Some(&id) = candidates.first() else {
                // every line reports complete but grid isn't -- unreachable
                // for a well-formed constraint set, treated as solved.
                stats.nb_solutions += 1;
                return if on_solution(work.grid().clone(), work.depth()) {
                    SearchOutcome::Completed
                } else {
                    SearchOutcome::Stopped
                };
            };

            let alternatives = work.branch_alternatives(id);
            stats.nb_branching_calls += 1;
            stats.total_nb_branching_alternatives += alternatives.len();
            stats.record_branching_depth(work.depth() + 1);
            stats.record_alternatives_at_depth(work.depth(), alternatives.len() as u32);
            log::debug!(
                "depth {}: branching on {:?} {} with {} alternatives",
                work.depth(),
                id.axis,
                id.index,
                alternatives.len()
            );
            if let Some(obs) = observer {
                obs.notify(ObserverEvent::Branching, None, work.depth());
            }

            for alt in alternatives {
                if stats.nb_solutions >= max_solutions {
                    stats.max_nb_solutions_reached = true;
                    break;
                }
                if let Some(signal) = abort {
                    if signal.should_abort() {
                        return SearchOutcome::Aborted;
                    }
                }

                let mut branch_work = work.clone().with_depth(work.depth() + 1);
                if !branch_work.apply_line(&alt) {
                    continue;
                }

                let mut branch_stats = GridStats::default();
                let remaining = max_solutions.saturating_sub(stats.nb_solutions);
                let outcome = branch_and_search(
                    branch_work,
                    observer,
                    abort,
                    &mut branch_stats,
                    remaining,
                    on_solution,
                );
                stats.merge(&branch_stats);
                match outcome {
                    SearchOutcome::Aborted => return SearchOutcome::Aborted,
                    SearchOutcome::Stopped => return SearchOutcome::Stopped,
                    SearchOutcome::Completed => {}
                }
            }
            SearchOutcome::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LineConstraint;
    use crate::grid::work_grid::SolverPolicy;

    #[test]
    fn finds_both_solutions_of_a_fully_ambiguous_2x2() {
        let grid = Grid::new(2, 2);
        let row_constraints = vec![LineConstraint::new([1]), LineConstraint::new([1])];
        let col_constraints = vec![LineConstraint::new([1]), LineConstraint::new([1])];
        let work = WorkGrid::new(grid, row_constraints, col_constraints, SolverPolicy::default());

        let mut stats = GridStats::default();
        let mut solutions = Vec::new();
        let outcome = branch_and_search(work, None, None, &mut stats, 100, &mut |g, _depth| {
            solutions.push(g);
            true
        });

        assert_eq!(outcome, SearchOutcome::Completed);
        assert_eq!(solutions.len(), 2);
        assert_eq!(stats.nb_solutions, 2);
        assert!(stats.nb_branching_calls >= 1);
    }

    #[test]
    fn stops_at_max_solutions() {
        let grid = Grid::new(2, 2);
        let row_constraints = vec![LineConstraint::new([1]), LineConstraint::new([1])];
        let col_constraints = vec![LineConstraint::new([1]), LineConstraint::new([1])];
        let work = WorkGrid::new(grid, row_constraints, col_constraints, SolverPolicy::default());

        let mut stats = GridStats::default();
        let mut solutions = Vec::new();
        branch_and_search(work, None, None, &mut stats, 1, &mut |g, _depth| {
            solutions.push(g);
            true
        });

        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn callback_returning_false_stops_the_search_early() {
        let grid = Grid::new(2, 2);
        let row_constraints = vec![LineConstraint::new([1]), LineConstraint::new([1])];
        let col_constraints = vec![LineConstraint::new([1]), LineConstraint::new([1])];
        let work = WorkGrid::new(grid, row_constraints, col_constraints, SolverPolicy::default());

        let mut stats = GridStats::default();
        let mut solutions = Vec::new();
        let outcome = branch_and_search(work, None, None, &mut stats, 100, &mut |g, _depth| {
            solutions.push(g);
            false
        });

        assert_eq!(outcome, SearchOutcome::Stopped);
        assert_eq!(solutions.len(), 1);
    }
}
