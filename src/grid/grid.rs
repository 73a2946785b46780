//! A rectangular grid of tiles, kept in both row-major and column-major
//! order so a row or a column can be read or replaced without walking a
//! strided index.
//!
//! Grounded in the flat-`Vec`-backed `Grid<A>` of
//! `game/src/model/grid.rs`; doubled per axis per `spec.md` §9's "keep both"
//! alternative instead of computing a transposed index on the fly.

use std::fmt;

use crate::core::{Axis, Line, LineId, LineView, Tile};

/// A `rows` x `cols` grid of [`Tile`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    by_row: Vec<Tile>,
    by_col: Vec<Tile>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            by_row: vec![Tile::Unknown; rows * cols],
            by_col: vec![Tile::Unknown; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.by_row[row * self.cols + col]
    }

    /// Writes a single cell, keeping both mirrors in sync. Returns `false`
    /// (leaving the grid untouched) if `tile` conflicts with the existing
    /// value.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        let current = self.get(row, col);
        let Some(merged) = current.add(tile) else {
            return false;
        };
        self.by_row[row * self.cols + col] = merged;
        self.by_col[col * self.rows + row] = merged;
        true
    }

    pub fn line_size(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.cols,
            Axis::Col => self.rows,
        }
    }

    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Col => self.cols,
        }
    }

    pub fn get_line(&self, id: LineId) -> Line {
        self.view_line(id).to_owned_line()
    }

    pub fn view_line(&self, id: LineId) -> LineView<'_> {
        match id.axis {
            Axis::Row => {
                let start = id.index * self.cols;
                LineView::new(Axis::Row, id.index, &self.by_row[start..start + self.cols])
            }
            Axis::Col => {
                let start = id.index * self.rows;
                LineView::new(Axis::Col, id.index, &self.by_col[start..start + self.rows])
            }
        }
    }

    /// Merges `line` into the grid in-place. Returns `false` (leaving the
    /// grid untouched) on the first incompatible cell.
    pub fn set_line(&mut self, line: &Line) -> bool {
        if !self.view_line(line.id).compatible(line) {
            return false;
        }
        match line.axis() {
            Axis::Row => {
                for (col, &tile) in line.tiles().iter().enumerate() {
                    self.set(line.index(), col, tile);
                }
            }
            Axis::Col => {
                for (row, &tile) in line.tiles().iter().enumerate() {
                    self.set(row, line.index(), tile);
                }
            }
        }
        true
    }

    pub fn is_complete(&self) -> bool {
        self.by_row.iter().all(|t| !t.is_unknown())
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = LineView<'_>> {
        (0..self.rows).map(|r| self.view_line(LineId::new(Axis::Row, r)))
    }

    pub fn cols_iter(&self) -> impl Iterator<Item = LineView<'_>> {
        (0..self.cols).map(|c| self.view_line(LineId::new(Axis::Col, c)))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows_iter() {
            for &t in row.tiles() {
                write!(f, "{t}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
