//! Solve-run counters, reported back to the caller alongside the solutions.
//!
//! Grounded in `original_source/src/picross/include/picross/picross_stats.h`'s
//! `GridStats` struct. Field set carried in full; `Vec`-of-per-depth fields
//! use `Vec::default()` (empty) instead of a pre-sized array.

/// Counters accumulated over the course of one [`crate::solver::facade::ReferenceSolver::solve`] call.
#[derive(Debug, Clone, Default)]
pub struct GridStats {
    pub nb_solutions: usize,
    pub max_nb_solutions_reached: bool,
    pub max_branching_depth: usize,
    pub nb_branching_calls: usize,
    pub total_nb_branching_alternatives: usize,
    pub max_initial_nb_alternatives: u32,
    pub max_nb_alternatives: u32,
    pub max_nb_alternatives_w_change: u32,
    pub nb_reduce_list_of_lines_calls: usize,
    pub max_reduce_list_size: usize,
    pub total_lines_reduced: usize,
    pub nb_reduce_and_count_alternatives_calls: usize,
    pub nb_full_grid_pass_calls: usize,
    pub nb_single_line_pass_calls: usize,
    pub nb_single_line_pass_calls_w_change: usize,
    pub nb_observer_callback_calls: usize,
    pub max_nb_alternatives_by_branching_depth: Vec<u32>,
}

impl GridStats {
    pub fn record_branching_depth(&mut self, depth: usize) {
        self.max_branching_depth = self.max_branching_depth.max(depth);
    }

    /// Records the number of alternatives a branching decision faced at
    /// `depth`, growing the per-depth vector as needed.
    pub fn record_alternatives_at_depth(&mut self, depth: usize, alternatives: u32) {
        if self.max_nb_alternatives_by_branching_depth.len() <= depth {
            self.max_nb_alternatives_by_branching_depth.resize(depth + 1, 0);
        }
        let slot = &mut self.max_nb_alternatives_by_branching_depth[depth];
        *slot = (*slot).max(alternatives);
    }

    /// Folds a branch's counters into this (parent) one: sums for call
    /// counts and totals, max for high-water marks.
    pub fn merge(&mut self, other: &GridStats) {
        self.nb_solutions += other.nb_solutions;
        self.max_nb_solutions_reached = self.max_nb_solutions_reached || other.max_nb_solutions_reached;
        self.max_branching_depth = self.max_branching_depth.max(other.max_branching_depth);
        self.nb_branching_calls += other.nb_branching_calls;
        self.total_nb_branching_alternatives += other.total_nb_branching_alternatives;
        self.max_initial_nb_alternatives = self
            .max_initial_nb_alternatives
            .max(other.max_initial_nb_alternatives);
        self.max_nb_alternatives = self.max_nb_alternatives.max(other.max_nb_alternatives);
        self.max_nb_alternatives_w_change = self
            .max_nb_alternatives_w_change
            .max(other.max_nb_alternatives_w_change);
        self.nb_reduce_list_of_lines_calls += other.nb_reduce_list_of_lines_calls;
        self.max_reduce_list_size = self.max_reduce_list_size.max(other.max_reduce_list_size);
        self.total_lines_reduced += other.total_lines_reduced;
        self.nb_reduce_and_count_alternatives_calls += other.nb_reduce_and_count_alternatives_calls;
        self.nb_full_grid_pass_calls += other.nb_full_grid_pass_calls;
        self.nb_single_line_pass_calls += other.nb_single_line_pass_calls;
        self.nb_single_line_pass_calls_w_change += other.nb_single_line_pass_calls_w_change;
        self.nb_observer_callback_calls += other.nb_observer_callback_calls;

        if self.max_nb_alternatives_by_branching_depth.len() < other.max_nb_alternatives_by_branching_depth.len() {
            self.max_nb_alternatives_by_branching_depth
                .resize(other.max_nb_alternatives_by_branching_depth.len(), 0);
        }
        for (slot, &value) in self
            .max_nb_alternatives_by_branching_depth
            .iter_mut()
            .zip(other.max_nb_alternatives_by_branching_depth.iter())
        {
            *slot = (*slot).max(value);
        }
    }
}
