//! Winning lines
//!
//! A [`Line`] is four collinear cells. The constructors below cover every
//! family of lines in the cube; [`super::Geometry`] calls them in a fixed order
//! to build the full table of 76.

use crate::bitset::BitSet;
use crate::constants::N;
use crate::coordinate::{position, Axis};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    mask: BitSet,
    label: String,
}

impl Line {
    fn build(label: String, cells: impl Fn(u8) -> (u8, u8, u8)) -> Line {
        let mask = (0..N)
            .map(|i| {
                let (x, y, z) = cells(i);
                position(x, y, z)
            })
            .collect();
        Line { mask, label }
    }

    /// Line running along `axis`, fixed at `(row, column)` on the other two
    pub(crate) fn straight(axis: Axis, row: u8, column: u8) -> Line {
        let label = match axis {
            Axis::X => format!("Straight line: Row: Y = {row} Z = {column}"),
            Axis::Y => format!("Straight line: Column: X = {row} Z = {column}"),
            Axis::Z => format!("Straight line: Pillar: X = {row} Y = {column}"),
        };
        Line::build(label, |i| match axis {
            Axis::X => (i, row, column),
            Axis::Y => (row, i, column),
            Axis::Z => (row, column, i),
        })
    }

    /// Rising diagonal of the slab perpendicular to `axis` at `value`
    pub(crate) fn forward_diagonal(axis: Axis, value: u8) -> Line {
        let label = match axis {
            Axis::X => format!("Forward diagonal: YZ-Plane X = {value}"),
            Axis::Y => format!("Forward diagonal: XZ-Plane Y = {value}"),
            Axis::Z => format!("Forward diagonal: XY-Plane Z = {value}"),
        };
        Line::build(label, |i| match axis {
            Axis::X => (value, i, i),
            Axis::Y => (i, value, i),
            Axis::Z => (i, i, value),
        })
    }

    /// Falling diagonal of the slab perpendicular to `axis` at `value`
    pub(crate) fn reverse_diagonal(axis: Axis, value: u8) -> Line {
        let label = match axis {
            Axis::X => format!("Reverse diagonal: YZ-Plane X = {value}"),
            Axis::Y => format!("Reverse diagonal: XZ-Plane Y = {value}"),
            Axis::Z => format!("Reverse diagonal: XY-Plane Z = {value}"),
        };
        let last = N - 1;
        Line::build(label, |i| match axis {
            Axis::X => (value, i, last - i),
            Axis::Y => (i, value, last - i),
            Axis::Z => (i, last - i, value),
        })
    }

    /// Space diagonal that runs backwards along `axis`
    pub(crate) fn reverse_main_diagonal(axis: Axis) -> Line {
        let label = match axis {
            Axis::X => "Main diagonal: reverse X-Axis",
            Axis::Y => "Main diagonal: reverse Y-Axis",
            Axis::Z => "Main diagonal: reverse Z-Axis",
        };
        let last = N - 1;
        Line::build(label.to_string(), |i| match axis {
            Axis::X => (last - i, i, i),
            Axis::Y => (i, last - i, i),
            Axis::Z => (i, i, last - i),
        })
    }

    /// Space diagonal from `(0,0,0)` to `(3,3,3)`
    pub(crate) fn main_diagonal() -> Line {
        Line::build("Main diagonal".to_string(), |i| (i, i, i))
    }

    /// The four cells of this line
    #[inline]
    pub fn mask(&self) -> BitSet {
        self.mask
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn contains(&self, cell: u8) -> bool {
        self.mask.contains(cell)
    }

    pub fn contains_xyz(&self, x: u8, y: u8, z: u8) -> bool {
        self.contains(position(x, y, z))
    }

    pub fn intersects(&self, other: &Line) -> bool {
        self.mask.intersects(other.mask)
    }

    /// Cell shared with `other`, `None` when the lines are disjoint
    ///
    /// Two distinct lines share at most one cell.
    pub fn intersection(&self, other: &Line) -> Option<u8> {
        (self.mask & other.mask).msb()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.mask)
    }
}
