//! Planes
//!
//! A [`Plane`] is a 16-cell cross-section of the cube: one of the 12 axis
//! aligned slabs or one of the 6 diagonal slabs. Listing a plane's cells in
//! ascending index order always walks it as a 4×4 grid, row by row, so its
//! corners are grid positions 0, 3, 12, 15 and its inner block 5, 6, 9, 10.

use super::line::Line;
use crate::bitset::BitSet;
use crate::constants::N;
use crate::coordinate::{position, Axis};
use std::fmt;

const CORNER_SLOTS: [usize; 4] = [0, 3, 12, 15];
const INNER_SLOTS: [usize; 4] = [5, 6, 9, 10];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Plane {
    mask: BitSet,
    corners: BitSet,
    inner: BitSet,
    label: String,
}

impl Plane {
    fn build(label: String, cells: impl Fn(u8, u8) -> (u8, u8, u8)) -> Plane {
        let mut mask = BitSet::new();
        for i in 0..N {
            for j in 0..N {
                let (x, y, z) = cells(i, j);
                mask.insert(position(x, y, z));
            }
        }

        let grid: Vec<u8> = mask.ones().collect();
        let pick = |slots: [usize; 4]| slots.iter().map(|&slot| grid[slot]).collect::<BitSet>();

        Plane {
            mask,
            corners: pick(CORNER_SLOTS),
            inner: pick(INNER_SLOTS),
            label,
        }
    }

    /// Slab perpendicular to `axis` at `value`
    pub(crate) fn straight(axis: Axis, value: u8) -> Plane {
        let label = match axis {
            Axis::X => format!("YZ-Plane, X = {value}"),
            Axis::Y => format!("XZ-Plane, Y = {value}"),
            Axis::Z => format!("XY-Plane, Z = {value}"),
        };
        Plane::build(label, |i, j| match axis {
            Axis::X => (value, i, j),
            Axis::Y => (i, value, j),
            Axis::Z => (i, j, value),
        })
    }

    /// Diagonal slab containing `axis` and the rising diagonal of the other two
    pub(crate) fn forward_diagonal(axis: Axis) -> Plane {
        let label = match axis {
            Axis::X => "YZ-Forward Diagonal",
            Axis::Y => "XZ-Forward Diagonal",
            Axis::Z => "XY-Forward Diagonal",
        };
        Plane::build(label.to_string(), |i, j| match axis {
            Axis::X => (i, j, j),
            Axis::Y => (j, i, j),
            Axis::Z => (j, j, i),
        })
    }

    /// Diagonal slab containing `axis` and the falling diagonal of the other two
    pub(crate) fn reverse_diagonal(axis: Axis) -> Plane {
        let label = match axis {
            Axis::X => "YZ-Reverse Diagonal",
            Axis::Y => "XZ-Reverse Diagonal",
            Axis::Z => "XY-Reverse Diagonal",
        };
        let last = N - 1;
        Plane::build(label.to_string(), |i, j| match axis {
            Axis::X => (i, j, last - j),
            Axis::Y => (j, i, last - j),
            Axis::Z => (j, last - j, i),
        })
    }

    #[inline]
    pub fn mask(&self) -> BitSet {
        self.mask
    }

    /// The four corner cells of this plane's grid
    #[inline]
    pub fn corners(&self) -> BitSet {
        self.corners
    }

    /// The central 2×2 block of this plane's grid
    #[inline]
    pub fn inner(&self) -> BitSet {
        self.inner
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, cell: u8) -> bool {
        self.mask.contains(cell)
    }

    pub fn contains_line(&self, line: &Line) -> bool {
        line.mask().is_subset_of(self.mask)
    }

    pub fn intersects(&self, other: &Plane) -> bool {
        self.mask.intersects(other.mask)
    }

    /// Highest cell where `line` crosses this plane, `None` if they are disjoint
    pub fn line_intersection(&self, line: &Line) -> Option<u8> {
        (self.mask & line.mask()).msb()
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.mask)
    }
}
