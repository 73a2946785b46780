//! Three-valued cell state and the element-wise operators lines are built from.
//!
//! Grounded in `original_source/src/picross/src/line.cpp`'s anonymous
//! `Tiles` namespace (`add`/`compatible`/`delta`/`reduce`).

use std::fmt;

use quickcheck::{Arbitrary, Gen};

/// A single cell of a nonogram grid.
///
/// A cell set to [`Tile::Empty`] or [`Tile::Filled`] is never reset to
/// [`Tile::Unknown`] during forward solving; only branching ever produces a
/// grid that disagrees with another on a previously-known cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Unknown,
    Empty,
    Filled,
}

impl Tile {
    /// Combines two tiles describing the same cell.
    ///
    /// Defined iff the pair is one of `(x, x)`, `(x, Unknown)`, `(Unknown, x)`.
    /// `None` signals the two tiles disagree on a known value.
    pub fn add(self, other: Tile) -> Option<Tile> {
        match (self, other) {
            (a, Tile::Unknown) => Some(a),
            (Tile::Unknown, b) => Some(b),
            (a, b) if a == b => Some(a),
            _ => None,
        }
    }

    /// `true` iff [`Tile::add`] would succeed.
    pub fn compatible(self, other: Tile) -> bool {
        self == Tile::Unknown || other == Tile::Unknown || self == other
    }

    /// The value that turns `self` into `other` under [`Tile::add`], i.e.
    /// `Unknown` where the two agree, otherwise the non-unknown side.
    ///
    /// Only meaningful when `other` is known to dominate `self`
    /// (`self.add(delta) == Some(other)`).
    pub fn delta(self, other: Tile) -> Tile {
        if self == other {
            Tile::Unknown
        } else {
            other
        }
    }

    /// The common value between two tiles, `Unknown` if they disagree.
    ///
    /// Used to intersect a set of candidate completions.
    pub fn reduce(self, other: Tile) -> Tile {
        if self == other {
            self
        } else {
            Tile::Unknown
        }
    }

    pub const fn is_unknown(self) -> bool {
        matches!(self, Tile::Unknown)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Tile::Unknown => '?',
            Tile::Empty => '.',
            Tile::Filled => '#',
        };
        write!(f, "{c}")
    }
}

impl Arbitrary for Tile {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Tile::Unknown, Tile::Empty, Tile::Filled]).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[quickcheck]
    fn add_is_commutative(a: Tile, b: Tile) -> bool {
        a.add(b) == b.add(a)
    }

    #[quickcheck]
    fn add_some_iff_compatible(a: Tile, b: Tile) -> bool {
        a.add(b).is_some() == a.compatible(b)
    }

    #[quickcheck]
    fn reduce_is_commutative(a: Tile, b: Tile) -> bool {
        a.reduce(b) == b.reduce(a)
    }

    #[quickcheck]
    fn reduce_of_equal_is_identity(a: Tile) -> bool {
        a.reduce(a) == a
    }

    #[test]
    fn add_unknown_is_identity() {
        for t in [Tile::Unknown, Tile::Empty, Tile::Filled] {
            assert_eq!(t.add(Tile::Unknown), Some(t));
            assert_eq!(Tile::Unknown.add(t), Some(t));
        }
    }

    #[test]
    fn add_conflicting_known_tiles_fails() {
        assert_eq!(Tile::Empty.add(Tile::Filled), None);
        assert_eq!(Tile::Filled.add(Tile::Empty), None);
    }
}
