//! Line-level primitives: tiles, lines, clues, the binomial cache, and the
//! alternatives reducer. Everything in this module reasons about a single
//! row or column in isolation; [`crate::grid`] assembles them into a puzzle.

pub mod alternatives;
pub mod binomial;
pub mod constraint;
pub mod line;
pub mod tile;

#[cfg(test)]
pub mod testgen;

pub use alternatives::{LineAlternatives, Reduction};
pub use binomial::{AltCount, BinomialCache};
pub use constraint::LineConstraint;
pub use line::{Axis, Line, LineId, LineView};
pub use tile::Tile;
