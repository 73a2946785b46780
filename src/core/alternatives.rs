//! Reducing a line to the information common to every arrangement that
//! satisfies its constraint and agrees with what is already known about it.
//!
//! Grounded in `original_source/src/picross/src/line_alternatives.cpp`'s
//! `LineAlternatives::Impl`/`BidirectionalImpl`. Three strengths are
//! implemented, matching `spec.md` §4.3's "at least full and linear":
//! [`LineAlternatives::full_reduction`] (exact, exponential worst case),
//! [`LineAlternatives::linear_reduction`] (two-pass leftmost/rightmost fit,
//! weaker but linear-ish), and [`LineAlternatives::partial_reduction`]
//! (full reduction bounded to the outermost `m` segments on each side).

use super::binomial::{AltCount, BinomialCache};
use super::constraint::LineConstraint;
use super::tile::Tile;

/// Result of reducing a line: the tiles common to every satisfying
/// arrangement, how many such arrangements exist, and whether every cell
/// ended up determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub reduced_line: Vec<Tile>,
    pub nb_alternatives: AltCount,
    pub is_fully_reduced: bool,
}

pub struct LineAlternatives<'a> {
    constraint: &'a LineConstraint,
    known: &'a [Tile],
}

impl<'a> LineAlternatives<'a> {
    pub fn new(constraint: &'a LineConstraint, known: &'a [Tile]) -> Self {
        LineAlternatives { constraint, known }
    }

    /// Exact reduction: enumerates every arrangement compatible with `known`,
    /// intersecting them all and counting as it goes. Exponential in the
    /// worst case; callers bound its use via `WorkGrid`'s ramp-up policy.
    pub fn full_reduction(&self, cache: &BinomialCache) -> Reduction {
        let n = self.known.len();
        let segments = self.constraint.segments();

        if segments.is_empty() {
            let reduced_line = vec![Tile::Empty; n];
            let compatible = self.known.iter().all(|&t| t != Tile::Filled);
            return Reduction {
                reduced_line,
                nb_alternatives: compatible as AltCount,
                is_fully_reduced: true,
            };
        }

        let mut accumulator: Option<Vec<Tile>> = None;
        let mut count: AltCount = 0;
        let mut current = vec![Tile::Empty; n];
        build_alternatives(
            segments,
            self.known,
            0,
            0,
            &mut current,
            &mut accumulator,
            &mut count,
        );

        let reduced_line = accumulator.unwrap_or_else(|| vec![Tile::Unknown; n]);
        let is_fully_reduced = count > 0 && reduced_line.iter().all(|t| !t.is_unknown());
        let _ = cache; // counts here come from direct enumeration, not the closed form
        Reduction {
            reduced_line,
            nb_alternatives: count,
            is_fully_reduced,
        }
    }

    /// Cheaper, weaker reduction: computes the leftmost- and rightmost-fit
    /// start position of every segment (respecting known [`Tile::Empty`]
    /// cells only, not using known [`Tile::Filled`] cells to force a
    /// placement), then derives forced-filled cells from each segment's own
    /// overlap and forced-empty cells from positions no segment's range can
    /// ever reach. Does not return an alternative count.
    pub fn linear_reduction(&self) -> Vec<Tile> {
        let n = self.known.len();
        let segments = self.constraint.segments();
        let mut result = self.known.to_vec();

        if segments.is_empty() {
            return vec![Tile::Empty; n];
        }

        let (low, high) = match (leftmost_starts(segments, self.known), rightmost_starts(segments, self.known, n)) {
            (Some(low), Some(high)) => (low, high),
            _ => return result,
        };

        for (i, &seg) in segments.iter().enumerate() {
            let seg = seg as usize;
            let (l, h) = (low[i], high[i]);
            if h < l + seg {
                for p in h..(l + seg) {
                    result[p] = Tile::Filled;
                }
            }
        }

        let mut possibly_filled = vec![false; n];
        for (i, &seg) in segments.iter().enumerate() {
            let seg = seg as usize;
            for s in low[i]..=high[i] {
                for p in s..s + seg {
                    possibly_filled[p] = true;
                }
            }
        }
        for (p, &reachable) in possibly_filled.iter().enumerate() {
            if !reachable {
                result[p] = Tile::Empty;
            }
        }

        result
    }

    /// Full reduction restricted to the `m` leading and `m` trailing
    /// segments, leaving the interior of the line untouched. The reported
    /// alternative count is an approximation (the product of each side's
    /// count), not the exact total -- callers should treat it only as a
    /// relative cost estimate, never as an exact answer.
    pub fn partial_reduction(&self, m: usize, cache: &BinomialCache) -> Reduction {
        let segments = self.constraint.segments();
        let n = self.known.len();

        if segments.len() <= 2 * m {
            return self.full_reduction(cache);
        }

        let front_segs = LineConstraint::new(segments[..m].iter().copied());
        let back_segs = LineConstraint::new(segments[segments.len() - m..].iter().copied());
        let front_min = front_segs.min_line_size();
        let back_min = back_segs.min_line_size();

        let front_size = n.saturating_sub(back_min + 1).min(n);
        let back_size = n.saturating_sub(front_min + 1).min(n);

        let front_reduction =
            LineAlternatives::new(&front_segs, &self.known[..front_size]).full_reduction(cache);
        let back_start = n - back_size;
        let back_reduction =
            LineAlternatives::new(&back_segs, &self.known[back_start..]).full_reduction(cache);

        let mut reduced = vec![Tile::Unknown; n];
        reduced[..front_size].copy_from_slice(&front_reduction.reduced_line);
        for (i, &t) in back_reduction.reduced_line.iter().enumerate() {
            let idx = back_start + i;
            reduced[idx] = reduced[idx].add(t).unwrap_or(reduced[idx]);
        }

        Reduction {
            reduced_line: reduced,
            nb_alternatives: front_reduction
                .nb_alternatives
                .saturating_mul(back_reduction.nb_alternatives),
            is_fully_reduced: false,
        }
    }
}

fn is_compatible_prefix(current: &[Tile], known: &[Tile], upto: usize) -> bool {
    current[..upto]
        .iter()
        .zip(known[..upto].iter())
        .all(|(&a, &b)| a.compatible(b))
}

fn accumulate(accumulator: &mut Option<Vec<Tile>>, current: &[Tile]) {
    match accumulator {
        None => *accumulator = Some(current.to_vec()),
        Some(acc) => {
            for (a, &c) in acc.iter_mut().zip(current.iter()) {
                *a = a.reduce(c);
            }
        }
    }
}

fn build_alternatives(
    segments: &[u32],
    known: &[Tile],
    seg_idx: usize,
    pos: usize,
    current: &mut Vec<Tile>,
    accumulator: &mut Option<Vec<Tile>>,
    count: &mut AltCount,
) {
    let line_size = current.len();

    if seg_idx == segments.len() {
        for t in current.iter_mut().skip(pos) {
            *t = Tile::Empty;
        }
        if is_compatible_prefix(current, known, line_size) {
            accumulate(accumulator, current);
            *count = count.saturating_add(1);
        }
        return;
    }

    let seg = segments[seg_idx] as usize;
    let remaining_after: usize = segments[seg_idx + 1..]
        .iter()
        .map(|&s| s as usize + 1)
        .sum();
    if pos + seg + remaining_after > line_size {
        return;
    }
    let last_start = line_size - seg - remaining_after;

    for start in pos..=last_start {
        for t in current.iter_mut().take(start).skip(pos) {
            *t = Tile::Empty;
        }
        for t in current.iter_mut().skip(start).take(seg) {
            *t = Tile::Filled;
        }
        let next_pos = start + seg + 1;
        let gap_end = next_pos.min(line_size);
        if next_pos <= line_size && next_pos >= 1 {
            current[next_pos - 1] = Tile::Empty;
        }
        if is_compatible_prefix(current, known, gap_end) {
            build_alternatives(segments, known, seg_idx + 1, next_pos, current, accumulator, count);
        }
    }
}

fn leftmost_starts(segments: &[u32], known: &[Tile]) -> Option<Vec<usize>> {
    let n = known.len();
    let mut starts = Vec::with_capacity(segments.len());
    let mut cursor = 0usize;
    for &seg in segments {
        let seg = seg as usize;
        let mut start = cursor;
        while start + seg <= n && (start..start + seg).any(|p| known[p] == Tile::Empty) {
            start += 1;
        }
        if start + seg > n {
            return None;
        }
        starts.push(start);
        cursor = start + seg + 1;
    }
    Some(starts)
}

fn rightmost_starts(segments: &[u32], known: &[Tile], n: usize) -> Option<Vec<usize>> {
    let mut starts = vec![0usize; segments.len()];
    let mut upper = n;
    for i in (0..segments.len()).rev() {
        let seg = segments[i] as usize;
        if seg > upper {
            return None;
        }
        let mut end = upper;
        let start = loop {
            let start = end - seg;
            if !(start..end).any(|p| known[p] == Tile::Empty) {
                break start;
            }
            if end == seg {
                return None;
            }
            end -= 1;
        };
        starts[i] = start;
        if i > 0 {
            if start == 0 {
                return None;
            }
            upper = start - 1;
        }
    }
    Some(starts)
}
