//! The reduction state machine driving a single solve attempt.
//!
//! Grounded in `original_source/src/picross/src/work_grid.cpp`'s `line_solve`
//! and `full_grid_pass` templates, and its `LineSelectionPolicy_RampUpMaxNbAlternatives`.
//! The de-templated state machine below follows the same iterate-to-a-fixed-point
//! shape as the teacher's `iter_fix` helper in `game/src/model/solver.rs`.

use std::rc::Rc;

use crate::core::{AltCount, Axis, BinomialCache, Line, LineAlternatives, LineConstraint, LineId};
use crate::grid::grid::Grid;
use crate::solver::observer::{AbortSignal, Observer, ObserverEvent};
use crate::solver::stats::GridStats;

/// Ramp-up thresholds for how large a line's alternative count may be before
/// full reduction is attempted on it, mirroring
/// `LineSelectionPolicy_RampUpMaxNbAlternatives` (`work_grid.h`).
#[derive(Debug, Clone, Copy)]
pub struct SolverPolicy {
    pub initial_max_alternatives: AltCount,
    pub min_max_alternatives: AltCount,
    pub max_max_alternatives: AltCount,
    /// Number of outermost segments `partial_reduction` considers.
    pub partial_reduction_segments: usize,
}

impl Default for SolverPolicy {
    fn default() -> Self {
        SolverPolicy {
            initial_max_alternatives: 1 << 6,
            min_max_alternatives: 1 << 6,
            max_max_alternatives: 1 << 24,
            partial_reduction_segments: 2,
        }
    }
}

/// Outcome of bringing a grid to a reduction fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSolveOutcome {
    /// No arrangement satisfies every line; the grid is unsatisfiable.
    Contradiction,
    /// Every cell is determined: this is a complete solution.
    Solved,
    /// Reached a fixed point with cells still unknown; branching is needed.
    NeedsBranching,
    /// The caller's [`AbortSignal`] returned `true`.
    Aborted,
}

enum LineStep {
    Contradiction,
    Changed,
    Skipped,
    NoChange,
}

enum GridPassError {
    Contradiction,
    Aborted,
}

/// Mutable solving state for one grid: its tiles, clues, per-line alternative
/// counts, and the shared binomial cache. Cloning a `WorkGrid` (as branching
/// does) deep-copies everything except the binomial cache, which is shared
/// via [`Rc`] -- mirroring the C++ branching constructor in `work_grid.cpp`
/// that copies the `shared_ptr<BinomialCoefficientsCache>` instead of the
/// cache itself.
#[derive(Clone)]
pub struct WorkGrid {
    grid: Grid,
    row_constraints: Rc<Vec<LineConstraint>>,
    col_constraints: Rc<Vec<LineConstraint>>,
    binomial: Rc<BinomialCache>,
    row_alternatives: Vec<AltCount>,
    col_alternatives: Vec<AltCount>,
    max_alternatives: AltCount,
    policy: SolverPolicy,
    depth: usize,
}

impl WorkGrid {
    pub fn new(
        grid: Grid,
        row_constraints: Vec<LineConstraint>,
        col_constraints: Vec<LineConstraint>,
        policy: SolverPolicy,
    ) -> Self {
        let rows = grid.rows();
        let cols = grid.cols();
        WorkGrid {
            grid,
            row_constraints: Rc::new(row_constraints),
            col_constraints: Rc::new(col_constraints),
            binomial: Rc::new(BinomialCache::new()),
            row_alternatives: vec![AltCount::MAX; rows],
            col_alternatives: vec![AltCount::MAX; cols],
            max_alternatives: policy.initial_max_alternatives,
            policy,
        depth: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn constraint(&self, id: LineId) -> &LineConstraint {
        match id.axis {
            Axis::Row => &self.row_constraints[id.index],
            Axis::Col => &self.col_constraints[id.index],
        }
    }

    fn alternatives(&self, id: LineId) -> AltCount {
        match id.axis {
            Axis::Row => self.row_alternatives[id.index],
            Axis::Col => self.col_alternatives[id.index],
        }
    }

    fn alternatives_mut(&mut self, id: LineId) -> &mut AltCount {
        match id.axis {
            Axis::Row => &mut self.row_alternatives[id.index],
            Axis::Col => &mut self.col_alternatives[id.index],
        }
    }

    fn all_line_ids(&self) -> Vec<LineId> {
        let mut ids: Vec<LineId> = (0..self.grid.rows())
            .map(|r| LineId::new(Axis::Row, r))
            .collect();
        ids.extend((0..self.grid.cols()).map(|c| LineId::new(Axis::Col, c)));
        ids
    }

    /// Lines not yet fully determined, sorted by ascending alternative
    /// count -- the order `grid::branch` picks from, mirroring
    /// `WorkGrid::sort_by_nb_alternatives` in `work_grid.cpp`.
    pub(crate) fn incomplete_lines_by_alternatives(&self) -> Vec<LineId> {
        let mut ids: Vec<LineId> = self
            .all_line_ids()
            .into_iter()
            .filter(|&id| !self.grid.view_line(id).to_owned_line().is_complete())
            .collect();
        ids.sort_by_key(|&id| match id.axis {
            Axis::Row => self.row_alternatives[id.index],
            Axis::Col => self.col_alternatives[id.index],
        });
        ids
    }

    fn reduce_one_line(
        &mut self,
        id: LineId,
        observer: Option<&dyn Observer>,
        stats: &mut GridStats,
    ) -> LineStep {
        let known = self.grid.view_line(id).to_owned_line();
        let constraint = self.constraint(id).clone();
        if known.is_complete() {
            return if constraint.compatible(known.tiles()) {
                LineStep::NoChange
            } else {
                LineStep::Contradiction
            };
        }

        stats.nb_single_line_pass_calls += 1;

        let linear = LineAlternatives::new(&constraint, known.tiles()).linear_reduction();
        let mut merged = known.tiles().to_vec();
        for (m, &l) in merged.iter_mut().zip(linear.iter()) {
            if let Some(combined) = m.add(l) {
                *m = combined;
            } else {
                return LineStep::Contradiction;
            }
        }

        let estimate = constraint.trivial_nb_alternatives(known.size(), &self.binomial);
        if self.alternatives(id) == AltCount::MAX {
            // line not yet touched by any reduction: this is its INITIAL_PASS estimate.
            stats.max_initial_nb_alternatives = stats.max_initial_nb_alternatives.max(estimate);
        }
        let (final_tiles, exact_count, attempted_full) = if estimate <= self.max_alternatives {
            stats.nb_reduce_and_count_alternatives_calls += 1;
            let reduction = LineAlternatives::new(&constraint, &merged).full_reduction(&self.binomial);
            (reduction.reduced_line, Some(reduction.nb_alternatives), true)
        } else if constraint.segments().len() > 2 * self.policy.partial_reduction_segments {
            // too costly to fully reduce this round; still worth narrowing
            // down its outermost segments cheaply.
            let reduction = LineAlternatives::new(&constraint, &merged)
                .partial_reduction(self.policy.partial_reduction_segments, &self.binomial);
            (reduction.reduced_line, None, false)
        } else {
            (merged, None, false)
        };

        if let Some(0) = exact_count {
            log::debug!("depth {}: {:?} {} has zero alternatives, contradiction", self.depth, id.axis, id.index);
            return LineStep::Contradiction;
        }

        let new_line = Line::new(id.axis, id.index, final_tiles);
        let changed = new_line.tiles() != known.tiles();

        if changed {
            stats.total_lines_reduced += 1;
            if let Some(obs) = observer {
                obs.notify(ObserverEvent::DeltaLine, Some(&new_line), self.depth);
            }
            if !self.grid.set_line(&new_line) {
                return LineStep::Contradiction;
            }
            if new_line.is_complete() {
                if let Some(obs) = observer {
                    obs.notify(ObserverEvent::KnownLine, Some(&new_line), self.depth);
                }
            }
        }

        if let Some(count) = exact_count {
            *self.alternatives_mut(id) = count;
        }

        if changed {
            LineStep::Changed
        } else if attempted_full {
            LineStep::NoChange
        } else {
            LineStep::Skipped
        }
    }

    /// Reduces every line once, returning whether anything changed and
    /// whether any line was skipped due to the ramp-up threshold.
    fn full_grid_pass(
        &mut self,
        observer: Option<&dyn Observer>,
        abort: Option<&dyn AbortSignal>,
        stats: &mut GridStats,
    ) -> Result<(bool, bool), GridPassError> {
        stats.nb_full_grid_pass_calls += 1;
        let mut changed = false;
        let mut skipped = false;
        for id in self.all_line_ids() {
            if let Some(signal) = abort {
                if signal.should_abort() {
                    return Err(GridPassError::Aborted);
                }
            }
            match self.reduce_one_line(id, observer, stats) {
                LineStep::Contradiction => return Err(GridPassError::Contradiction),
                LineStep::Changed => changed = true,
                LineStep::Skipped => skipped = true,
                LineStep::NoChange => {}
            }
        }
        Ok((changed, skipped))
    }

    /// Runs the reduction loop to a fixed point: repeatedly reduces every
    /// line, shrinking the alternatives threshold whenever a pass changes
    /// the grid and growing it whenever a pass skips a line without
    /// changing anything else, until a pass does neither -- at that point
    /// the grid is either solved or needs branching.
    pub fn line_solve(
        &mut self,
        observer: Option<&dyn Observer>,
        abort: Option<&dyn AbortSignal>,
        stats: &mut GridStats,
    ) -> LineSolveOutcome {
        loop {
            if let Some(signal) = abort {
                if signal.should_abort() {
                    return LineSolveOutcome::Aborted;
                }
            }

            let (changed, skipped) = match self.full_grid_pass(observer, abort, stats) {
                Ok(result) => result,
                Err(GridPassError::Contradiction) => return LineSolveOutcome::Contradiction,
                Err(GridPassError::Aborted) => return LineSolveOutcome::Aborted,
            };

            if let Some(obs) = observer {
                obs.notify_progress(self.max_alternatives, self.depth);
            }

            if changed {
                self.max_alternatives =
                    (self.max_alternatives >> 2).max(self.policy.min_max_alternatives);
                stats.max_nb_alternatives_w_change =
                    stats.max_nb_alternatives_w_change.max(self.max_alternatives);
                log::trace!(
                    "depth {}: pass changed the grid, shrinking max_alternatives to {}",
                    self.depth,
                    self.max_alternatives
                );
                continue;
            }
            if skipped {
                self.max_alternatives =
                    (self.max_alternatives << 2).min(self.policy.max_max_alternatives);
                log::trace!(
                    "depth {}: pass skipped a line, growing max_alternatives to {}",
                    self.depth,
                    self.max_alternatives
                );
                continue;
            }
            break;
        }

        stats.max_nb_alternatives = stats.max_nb_alternatives.max(self.max_alternatives);

        if self.grid.is_complete() {
            log::debug!("depth {}: grid fully determined by reduction alone", self.depth);
            LineSolveOutcome::Solved
        } else {
            log::debug!("depth {}: reduction reached a fixed point, branching required", self.depth);
            LineSolveOutcome::NeedsBranching
        }
    }

    /// All ways to fix one more cell on the given line, for branching: every
    /// arrangement of `id`'s constraint compatible with its current known
    /// tiles.
    pub(crate) fn branch_alternatives(&self, id: LineId) -> Vec<Line> {
        let known = self.grid.view_line(id).to_owned_line();
        let constraint = self.constraint(id);
        constraint
            .build_all_possible_lines(known.size())
            .into_iter()
            .filter(|candidate| {
                candidate
                    .iter()
                    .zip(known.tiles().iter())
                    .all(|(&c, &k)| c.compatible(k))
            })
            .map(|tiles| Line::new(id.axis, id.index, tiles))
            .collect()
    }

    pub(crate) fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub(crate) fn apply_line(&mut self, line: &Line) -> bool {
        self.grid.set_line(line)
    }
}
