//! The external input to a solve: row and column clues, nothing else.
//!
//! Grounded in `original_source/src/picross/include/picross/picross_input_grid.h`'s
//! `InputGrid` struct (`m_rows`/`m_cols`/`m_name`) and `check_input_grid`. File
//! parsing (native/NIN/NON) stays out of scope per `spec.md` §1/§6 -- this is
//! the parse *target*, not a parser.

use quickcheck::{Arbitrary, Gen};

use crate::core::{LineConstraint, Tile};
use crate::error::SolverError;

/// Row and column clues for one puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputGrid {
    pub name: String,
    pub rows: Vec<Vec<u32>>,
    pub cols: Vec<Vec<u32>>,
}

impl InputGrid {
    pub fn new(rows: Vec<Vec<u32>>, cols: Vec<Vec<u32>>) -> Self {
        InputGrid {
            name: String::new(),
            rows,
            cols,
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.cols.len()
    }

    pub fn row_constraints(&self) -> Vec<LineConstraint> {
        self.rows
            .iter()
            .map(|segs| LineConstraint::new(segs.iter().copied()))
            .collect()
    }

    pub fn col_constraints(&self) -> Vec<LineConstraint> {
        self.cols
            .iter()
            .map(|segs| LineConstraint::new(segs.iter().copied()))
            .collect()
    }

    /// Checks the clues are internally consistent: every row/column clue
    /// must fit within the grid's own dimension, and the total number of
    /// filled cells implied by the rows must equal the total implied by the
    /// columns. This does not prove a solution exists, only that the clues
    /// are not trivially self-contradictory.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.rows.is_empty() || self.cols.is_empty() {
            return Err(SolverError::EmptyGrid);
        }

        let width = self.cols.len();
        for (index, segs) in self.rows.iter().enumerate() {
            let constraint = LineConstraint::new(segs.iter().copied());
            let clue_total: usize = segs.iter().map(|&s| s as usize).sum();
            if constraint.min_line_size() > width {
                return Err(SolverError::RowDoesNotFit {
                    index,
                    clue_total,
                    width,
                });
            }
        }

        let height = self.rows.len();
        for (index, segs) in self.cols.iter().enumerate() {
            let constraint = LineConstraint::new(segs.iter().copied());
            let clue_total: usize = segs.iter().map(|&s| s as usize).sum();
            if constraint.min_line_size() > height {
                return Err(SolverError::ColDoesNotFit {
                    index,
                    clue_total,
                    height,
                });
            }
        }

        let row_filled: u64 = self
            .rows
            .iter()
            .flat_map(|segs| segs.iter())
            .map(|&s| s as u64)
            .sum();
        let col_filled: u64 = self
            .cols
            .iter()
            .flat_map(|segs| segs.iter())
            .map(|&s| s as u64)
            .sum();
        if row_filled != col_filled {
            return Err(SolverError::RowColTotalMismatch {
                row_filled,
                col_filled,
            });
        }

        Ok(())
    }

    /// Derives the clues that describe a fully-known tile grid, in row-major
    /// order. Used by `core::testgen` to build valid-by-construction
    /// fixtures and by tests that round-trip a solved grid through its own
    /// clues.
    pub fn from_solution(width: usize, tiles: &[Tile]) -> Self {
        debug_assert_eq!(tiles.len() % width.max(1), 0);
        let height = if width == 0 { 0 } else { tiles.len() / width };
        let rows: Vec<Vec<u32>> = (0..height)
            .map(|r| runs_of_filled(&tiles[r * width..(r + 1) * width]))
            .collect();
        let cols: Vec<Vec<u32>> = (0..width)
            .map(|c| {
                let column: Vec<Tile> = (0..height).map(|r| tiles[r * width + c]).collect();
                runs_of_filled(&column)
            })
            .collect();
        InputGrid::new(rows, cols)
    }
}

fn runs_of_filled(tiles: &[Tile]) -> Vec<u32> {
    let mut segments = Vec::new();
    let mut run = 0u32;
    for &t in tiles {
        if t == Tile::Filled {
            run += 1;
        } else if run > 0 {
            segments.push(run);
            run = 0;
        }
    }
    if run > 0 {
        segments.push(run);
    }
    segments
}

impl Arbitrary for InputGrid {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = 1 + usize::arbitrary(g) % 6;
        let height = 1 + usize::arbitrary(g) % 6;
        let tiles: Vec<Tile> = (0..width * height)
            .map(|_| {
                if bool::arbitrary(g) {
                    Tile::Filled
                } else {
                    Tile::Empty
                }
            })
            .collect();
        InputGrid::from_solution(width, &tiles)
    }
}
