//! The clue attached to a single line: an ordered list of segment lengths.
//!
//! Grounded in `original_source/src/picross/src/line_constraint.cpp`/`.h`.

use super::binomial::{AltCount, BinomialCache};
use super::tile::Tile;

/// An ordered list of run lengths a line must satisfy, e.g. `[3, 1, 2]` means
/// "a run of 3 filled cells, then at least one empty, then a run of 1, then
/// at least one empty, then a run of 2", in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LineConstraint {
    segments: Vec<u32>,
}

impl LineConstraint {
    /// Builds a constraint from a clue. Leading/trailing/interior zeros are
    /// stripped: a `0` segment never corresponds to a run and spec.md leaves
    /// its meaning to the implementer, resolved here as "not a segment at
    /// all" (see `original_source/` input parsing, which never emits zeros
    /// for an empty line -- an empty line's clue is simply `[]`).
    pub fn new(segments: impl IntoIterator<Item = u32>) -> Self {
        LineConstraint {
            segments: segments.into_iter().filter(|&s| s > 0).collect(),
        }
    }

    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }

    /// Minimum line length that can possibly satisfy this constraint: every
    /// segment plus one mandatory gap between consecutive segments.
    pub fn min_line_size(&self) -> usize {
        if self.segments.is_empty() {
            return 0;
        }
        let sum: usize = self.segments.iter().map(|&s| s as usize).sum();
        sum + self.segments.len() - 1
    }

    /// Number of ways this constraint can be laid out in a line of the given
    /// size, ignoring any existing tile information, via the gap-counting
    /// closed form (`spec.md` §4.1): `slack = line_size - min_line_size`,
    /// distributed across `segments.len() + 1` gaps.
    pub fn trivial_nb_alternatives(&self, line_size: usize, cache: &BinomialCache) -> AltCount {
        let min = self.min_line_size();
        debug_assert!(
            line_size >= min,
            "line_size {line_size} smaller than min_line_size {min}"
        );
        if self.segments.is_empty() {
            return 1;
        }
        let slack = line_size - min;
        let buckets = self.segments.len() + 1;
        cache.partition(slack, buckets)
    }

    /// Cheap, non-recursive reduction that covers the easy cases without
    /// invoking the full alternatives enumerator: a blank constraint fills
    /// the whole line with [`Tile::Empty`]; a constraint whose min size
    /// exactly matches the line size is fully determined; and segments whose
    /// individual slack leaves no room for ambiguity produce a partial
    /// overlap reduction. Returns `None` when none of these trivial cases
    /// apply and the caller must fall back to full/linear reduction.
    pub fn trivial_reduction(&self, line_size: usize) -> Option<Vec<Tile>> {
        let min = self.min_line_size();
        debug_assert!(line_size >= min);

        if self.segments.is_empty() {
            return Some(vec![Tile::Empty; line_size]);
        }

        if min == line_size {
            return Some(self.exact_layout(line_size));
        }

        let slack = line_size - min;
        let max_segment = *self.segments.iter().max().unwrap() as usize;
        if slack >= max_segment {
            // every segment could in principle start anywhere; no cell is
            // forced filled by overlap alone, but cells beyond the last
            // possible start/before the first possible end are still forced
            // empty only at the line's own boundaries -- nothing general to
            // say here without enumerating, so bail out.
            return None;
        }

        let mut result = vec![Tile::Unknown; line_size];
        let mut cursor = 0usize;
        for &seg in &self.segments {
            let seg = seg as usize;
            // forced-filled overlap: [cursor + slack, cursor + seg)
            for i in (cursor + slack)..(cursor + seg) {
                result[i] = Tile::Filled;
            }
            cursor += seg + 1;
        }
        Some(result)
    }

    fn exact_layout(&self, line_size: usize) -> Vec<Tile> {
        let mut result = vec![Tile::Empty; line_size];
        let mut cursor = 0usize;
        for &seg in &self.segments {
            let seg = seg as usize;
            for i in cursor..(cursor + seg) {
                result[i] = Tile::Filled;
            }
            cursor += seg + 1;
        }
        result
    }

    /// `true` iff `line` is a possible, fully-defined completion of a line
    /// governed by this constraint, i.e. its filled runs equal `segments`
    /// exactly.
    pub fn compatible(&self, line: &[Tile]) -> bool {
        let mut segments = Vec::new();
        let mut run = 0u32;
        for &t in line {
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
        segments == self.segments
    }

    /// Exhaustively enumerates every completion of a line of the given size
    /// satisfying this constraint. Intended for tests and small lines only --
    /// production reduction goes through `core::alternatives`.
    pub fn build_all_possible_lines(&self, line_size: usize) -> Vec<Vec<Tile>> {
        let mut out = Vec::new();
        self.enumerate(line_size, &mut vec![Tile::Empty; line_size], 0, 0, &mut out);
        out
    }

    fn enumerate(
        &self,
        line_size: usize,
        current: &mut Vec<Tile>,
        seg_idx: usize,
        pos: usize,
        out: &mut Vec<Vec<Tile>>,
    ) {
        if seg_idx == self.segments.len() {
            for t in current.iter_mut().skip(pos) {
                *t = Tile::Empty;
            }
            out.push(current.clone());
            return;
        }
        let seg = self.segments[seg_idx] as usize;
        let remaining_after: usize = self.segments[seg_idx + 1..]
            .iter()
            .map(|&s| s as usize + 1)
            .sum();
        let last_start = line_size.saturating_sub(seg + remaining_after);
        for start in pos..=last_start {
            for t in current.iter_mut().take(start).skip(pos) {
                *t = Tile::Empty;
            }
            for t in current.iter_mut().skip(start).take(seg) {
                *t = Tile::Filled;
            }
            let next_pos = start + seg + 1;
            if next_pos <= line_size {
                if next_pos - 1 < line_size {
                    current[next_pos - 1] = Tile::Empty;
                }
                self.enumerate(line_size, current, seg_idx + 1, next_pos, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_line_size_sums_segments_and_gaps() {
        assert_eq!(LineConstraint::new([3, 1, 2]).min_line_size(), 3 + 1 + 2 + 2);
        assert_eq!(LineConstraint::new([5]).min_line_size(), 5);
        assert_eq!(LineConstraint::new([]).min_line_size(), 0);
    }

    #[test]
    fn blank_constraint_reduces_to_all_empty() {
        let c = LineConstraint::new([]);
        assert_eq!(c.trivial_reduction(4), Some(vec![Tile::Empty; 4]));
    }

    #[test]
    fn exact_fit_is_fully_determined() {
        let c = LineConstraint::new([3, 1]);
        assert_eq!(
            c.trivial_reduction(5),
            Some(vec![
                Tile::Filled,
                Tile::Filled,
                Tile::Filled,
                Tile::Empty,
                Tile::Filled
            ])
        );
    }

    #[test]
    fn overlap_reduction_forces_middle_of_large_segment() {
        let c = LineConstraint::new([3]);
        // line_size 4, slack 1: overlap forces the middle cell
        let reduced = c.trivial_reduction(4).unwrap();
        assert_eq!(reduced, vec![Tile::Unknown, Tile::Filled, Tile::Filled, Tile::Unknown]);
    }

    #[test]
    fn build_all_possible_lines_matches_trivial_count() {
        let cache = BinomialCache::new();
        let c = LineConstraint::new([2, 1]);
        let all = c.build_all_possible_lines(6);
        assert_eq!(all.len() as u32, c.trivial_nb_alternatives(6, &cache));
        for line in &all {
            assert!(c.compatible(line));
        }
    }

    #[quickcheck]
    fn compatible_accepts_every_enumerated_line(segs: Vec<u8>) -> bool {
        let segs: Vec<u32> = segs.into_iter().take(4).map(|s| (s % 4) as u32).collect();
        let c = LineConstraint::new(segs);
        let size = c.min_line_size() + 3;
        c.build_all_possible_lines(size)
            .iter()
            .all(|line| c.compatible(line))
    }
}
