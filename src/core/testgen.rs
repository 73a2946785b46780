//! Random solved-grid generation for property tests.
//!
//! Grounded in the teacher's `game/src/generator/wfc.rs` (randomized
//! generation via `rand`) and in `original_source/src/tests/picross/src/test_solver.cpp`'s
//! use of solved grids as oracle fixtures: a random fully-FILLED/EMPTY tile
//! grid is built, its clues are derived, and the derived [`crate::input::InputGrid`]
//! is handed back to the solver to confirm the original grid is among its
//! solutions.

use rand::Rng;

use crate::core::Tile;
use crate::input::InputGrid;

/// A random solved grid plus the clues derived from it.
pub struct RandomSolvedGrid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
    pub input: InputGrid,
}

/// Builds a random `width x height` grid of [`Tile::Filled`]/[`Tile::Empty`]
/// cells and derives its row/column clues.
pub fn random_solved_grid<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> RandomSolvedGrid {
    let tiles: Vec<Tile> = (0..width * height)
        .map(|_| if rng.gen_bool(0.5) { Tile::Filled } else { Tile::Empty })
        .collect();
    let input = InputGrid::from_solution(width, &tiles);
    RandomSolvedGrid {
        width,
        height,
        tiles,
        input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_grid_has_expected_dimensions() {
        let mut rng = StdRng::seed_from_u64(42);
        let generated = random_solved_grid(&mut rng, 4, 3);
        assert_eq!(generated.tiles.len(), 12);
        assert_eq!(generated.input.width(), 4);
        assert_eq!(generated.input.height(), 3);
    }
}
