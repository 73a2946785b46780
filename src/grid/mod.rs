//! Assembling lines into a whole puzzle: the grid itself, the reduction
//! state machine, and branching search.

pub mod branch;
pub mod grid;
pub mod work_grid;

pub use branch::{branch_and_search, SearchOutcome};
pub use grid::Grid;
pub use work_grid::{LineSolveOutcome, SolverPolicy, WorkGrid};
