//! Deterministic nonogram (picross) puzzle solver core.
//!
//! Given a grid's row and column clues ([`input::InputGrid`]), this crate
//! enumerates every arrangement of [`core::Tile::Filled`]/[`core::Tile::Empty`]
//! cells that satisfies every line's clue exactly, via line reduction
//! ([`core`]) interleaved with branching search ([`grid`]) when reduction
//! alone cannot fully determine the grid. [`solver::ReferenceSolver`] and
//! [`solver::LineSolver`] are the two public entry points.
//!
//! File parsing, a CLI and GUI rendering are not part of this crate; see
//! `demos/` for example usage a consuming front end would build on.

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod core;
pub mod error;
pub mod grid;
pub mod input;
pub mod output;
pub mod solver;

pub use error::SolverError;
pub use input::InputGrid;
pub use output::{OutputGrid, Solution};
pub use solver::{validate, LineSolver, ReferenceSolver, SolveReport, SolverStatus, ValidationCode};
