//! Error types for the parts of the crate that can fail on bad input.
//!
//! The teacher's few fallible paths return `Result<_, String>`
//! (`game/src/model/cnf.rs`, `knf.rs`); this crate needs callers to
//! distinguish *why* a grid was rejected, so it follows the wider example
//! pack's convention of a `thiserror`-derived enum instead.

use thiserror::Error;

/// Why an [`crate::input::InputGrid`] failed validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolverError {
    #[error("grid has no rows")]
    EmptyGrid,

    #[error("row {index} has clue total {clue_total} which cannot fit in {width} columns")]
    RowDoesNotFit {
        index: usize,
        clue_total: usize,
        width: usize,
    },

    #[error("column {index} has clue total {clue_total} which cannot fit in {height} rows")]
    ColDoesNotFit {
        index: usize,
        clue_total: usize,
        height: usize,
    },

    #[error(
        "row clues imply {row_filled} filled cells but column clues imply {col_filled}"
    )]
    RowColTotalMismatch { row_filled: u64, col_filled: u64 },
}
