//! A row or column of tiles, as both an owning value and a non-owning view.
//!
//! Grounded in `original_source/src/picross/src/line.cpp`/`line.h`; the
//! value/view split follows `spec.md` §9 ("Line as a value vs. a span").

use std::fmt;

use super::tile::Tile;

/// Which dimension a [`Line`] runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    Row,
    Col,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if *self == Axis::Row { "ROW" } else { "COL" })
    }
}

/// Identifies a line within a grid without carrying its tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId {
    pub axis: Axis,
    pub index: usize,
}

impl LineId {
    pub const fn new(axis: Axis, index: usize) -> Self {
        LineId { axis, index }
    }
}

/// An owned row or column: an axis, an index within that axis, and its tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub id: LineId,
    tiles: Vec<Tile>,
}

impl Line {
    pub fn new(axis: Axis, index: usize, tiles: Vec<Tile>) -> Self {
        Line {
            id: LineId::new(axis, index),
            tiles,
        }
    }

    /// A line of the given size filled with a single tile value.
    pub fn filled_with(axis: Axis, index: usize, size: usize, tile: Tile) -> Self {
        Line::new(axis, index, vec![tile; size])
    }

    pub fn axis(&self) -> Axis {
        self.id.axis
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn as_view(&self) -> LineView<'_> {
        LineView {
            id: self.id,
            tiles: &self.tiles,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(|t| !t.is_unknown())
    }

    pub fn is_all_one_color(&self, color: Tile) -> bool {
        self.tiles.iter().all(|&t| t == color)
    }

    /// `true` iff every tile pair between `self` and `other` is compatible,
    /// per [`Tile::compatible`].
    pub fn compatible(&self, other: &Line) -> bool {
        debug_assert_eq!(self.id, other.id);
        self.tiles
            .iter()
            .zip(other.tiles.iter())
            .all(|(&a, &b)| a.compatible(b))
    }

    /// Combines two lines describing the same row/column. Fails (leaving
    /// `self` untouched) if any tile pair disagrees.
    pub fn add_assign(&mut self, other: &Line) -> bool {
        debug_assert_eq!(self.id, other.id);
        if !self.compatible(other) {
            return false;
        }
        for (a, &b) in self.tiles.iter_mut().zip(other.tiles.iter()) {
            *a = a.add(b).expect("checked compatible above");
        }
        true
    }

    /// In-place intersection: position becomes the common value, else unknown.
    pub fn reduce_assign(&mut self, other: &Line) {
        debug_assert_eq!(self.id, other.id);
        for (a, &b) in self.tiles.iter_mut().zip(other.tiles.iter()) {
            *a = a.reduce(b);
        }
    }

    /// The delta between `self` (assumed to dominate) and `other`: unknown
    /// where they agree, the new value where they differ.
    pub fn delta_from(&self, other: &Line) -> Line {
        debug_assert_eq!(self.id, other.id);
        let tiles = self
            .tiles
            .iter()
            .zip(other.tiles.iter())
            .map(|(&a, &b)| b.delta(a))
            .collect();
        Line::new(self.id.axis, self.id.index, tiles)
    }

    /// Extracts the clue this line satisfies, i.e. the lengths of its
    /// maximal runs of [`Tile::Filled`] in order.
    ///
    /// Requires `self.is_complete()`.
    pub fn runs_of_filled(&self) -> Vec<u32> {
        debug_assert!(self.is_complete());
        let mut segments = Vec::new();
        let mut run = 0u32;
        for &t in &self.tiles {
            match t {
                Tile::Filled => run += 1,
                _ => {
                    if run > 0 {
                        segments.push(run);
                        run = 0;
                    }
                }
            }
        }
        if run > 0 {
            segments.push(run);
        }
        segments
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:>3} ", self.axis(), self.index())?;
        for t in &self.tiles {
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

/// A non-owning view into a line's tiles, e.g. a slice borrowed from a [`crate::grid::Grid`].
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    pub id: LineId,
    tiles: &'a [Tile],
}

impl<'a> LineView<'a> {
    pub fn new(axis: Axis, index: usize, tiles: &'a [Tile]) -> Self {
        LineView {
            id: LineId::new(axis, index),
            tiles,
        }
    }

    pub fn axis(&self) -> Axis {
        self.id.axis
    }

    pub fn index(&self) -> usize {
        self.id.index
    }

    pub fn tiles(&self) -> &'a [Tile] {
        self.tiles
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn to_owned_line(self) -> Line {
        Line::new(self.id.axis, self.id.index, self.tiles.to_vec())
    }

    pub fn compatible(&self, other: &Line) -> bool {
        debug_assert_eq!(self.id, other.id);
        self.tiles
            .iter()
            .zip(other.tiles().iter())
            .all(|(&a, &b)| a.compatible(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(s: &str) -> Line {
        let tiles = s
            .chars()
            .map(|c| match c {
                '#' => Tile::Filled,
                '.' => Tile::Empty,
                _ => Tile::Unknown,
            })
            .collect();
        Line::new(Axis::Row, 0, tiles)
    }

    #[test]
    fn runs_of_filled_extracts_clue() {
        assert_eq!(line_of("...###").runs_of_filled(), vec![3]);
        assert_eq!(line_of("...#.#").runs_of_filled(), vec![1, 1]);
        assert_eq!(line_of("......").runs_of_filled(), vec![]);
    }

    #[test]
    fn add_assign_combines_known_information() {
        let mut a = line_of("....##??????");
        let b = line_of("..????##..??");
        assert!(a.add_assign(&b));
        assert_eq!(a, line_of("....####..??"));
    }

    #[test]
    fn add_assign_rejects_conflicting_lines() {
        let mut a = line_of("####");
        let b = line_of("..##");
        assert!(!a.add_assign(&b));
        // untouched on failure
        assert_eq!(a, line_of("####"));
    }

    #[test]
    fn reduce_assign_keeps_only_common_information() {
        let mut a = line_of("??..######..");
        let b = line_of("??....######");
        a.reduce_assign(&b);
        assert_eq!(a, line_of("??..??####??"));
    }

    #[quickcheck]
    fn delta_then_add_reconstructs_dominant_line(tiles: Vec<Tile>) -> bool {
        if tiles.is_empty() {
            return true;
        }
        let full = Line::new(Axis::Row, 0, tiles.clone());
        let empty = Line::filled_with(Axis::Row, 0, tiles.len(), Tile::Unknown);
        let delta = full.delta_from(&empty);
        let mut reconstructed = empty;
        reconstructed.add_assign(&delta);
        reconstructed == full
    }
}
