//! A solved (or partially solved) grid, as handed back to the caller.
//!
//! Grounded in `original_source/src/picross/include/picross/picross_output_grid.h`'s
//! `OutputGrid` (a pimpl wrapper around the internal `Grid`, exposing only
//! `get_tile`/`get_line`). This crate's `Grid` is already a thin, safe value
//! type, so `OutputGrid` here is a direct read-only wrapper rather than a
//! pimpl -- the opacity the C++ header buys with a pointer is unnecessary in
//! Rust when the wrapped type has no unsafe internals to hide.

use std::fmt;

use crate::core::{Axis, Line, LineId, Tile};
use crate::grid::Grid;

/// One solution to a puzzle: a fully- or partially-reduced grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputGrid {
    grid: Grid,
}

impl OutputGrid {
    pub(crate) fn new(grid: Grid) -> Self {
        OutputGrid { grid }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn get_tile(&self, row: usize, col: usize) -> Tile {
        self.grid.get(row, col)
    }

    pub fn get_row(&self, index: usize) -> Line {
        self.grid.get_line(LineId::new(Axis::Row, index))
    }

    pub fn get_col(&self, index: usize) -> Line {
        self.grid.get_line(LineId::new(Axis::Col, index))
    }

    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }
}

impl fmt::Display for OutputGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl From<Grid> for OutputGrid {
    fn from(grid: Grid) -> Self {
        OutputGrid::new(grid)
    }
}

/// One solution delivered through a solve callback: the grid itself, the
/// branching depth at which the search landed on it (0 = line-solvable, no
/// branching needed), and whether it is a partial result (a line solver's
/// best-effort grid when the puzzle was not fully line-solvable) rather than
/// a complete, verified solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub grid: OutputGrid,
    pub branching_depth: u32,
    pub partial: bool,
}
