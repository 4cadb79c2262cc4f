//! # Geometry Tables - Every Line and Plane of the Cube
//!
//! ## Overview
//!
//! [`Geometry`] owns the static description of the cube: the 76 winning
//! [`Line`]s, the 18 [`Plane`]s, a reverse index from mask to entity, and for
//! each cell the lines passing through it. The tables are built once and are
//! read-only afterwards, so one instance can be shared by any number of
//! searches.
//!
//! ## Construction Order
//!
//! For each axis X, Y, Z in turn:
//! 1. 16 straight lines along the axis
//! 2. a forward and a reverse face diagonal for each of the 4 slabs across it
//! 3. the space diagonal running backwards along that axis
//!
//! followed by the main space diagonal. That is 3 × (16 + 8 + 1) + 1 = 76.
//! Planes are built per axis as 4 slabs, then the forward and reverse diagonal
//! slab, giving 3 × 6 = 18. Both counts are checked when the tables are built.
//!
//! ## Access
//!
//! Engine functions take `&Geometry` explicitly. [`Geometry::shared`] hands out
//! a process-wide instance for callers that do not want to own one.

mod line;
mod plane;

pub use line::Line;
pub use plane::Plane;

use crate::bitset::BitSet;
use crate::constants::{LINE_COUNT, N, N_CUBED, PLANE_COUNT};
use crate::coordinate::Axis;
use std::array;
use std::collections::HashMap;
use std::sync::OnceLock;

static SHARED: OnceLock<Geometry> = OnceLock::new();

#[derive(Debug)]
pub struct Geometry {
    lines: Vec<Line>,
    planes: Vec<Plane>,
    line_lookup: HashMap<BitSet, usize>,
    plane_lookup: HashMap<BitSet, usize>,
    lines_through: [Vec<usize>; N_CUBED as usize],
}

fn build_lines() -> Vec<Line> {
    let mut lines = Vec::with_capacity(LINE_COUNT);
    for axis in Axis::ALL {
        for row in 0..N {
            for column in 0..N {
                lines.push(Line::straight(axis, row, column));
            }
        }
        for value in 0..N {
            lines.push(Line::forward_diagonal(axis, value));
            lines.push(Line::reverse_diagonal(axis, value));
        }
        lines.push(Line::reverse_main_diagonal(axis));
    }
    lines.push(Line::main_diagonal());
    lines
}

fn build_planes() -> Vec<Plane> {
    let mut planes = Vec::with_capacity(PLANE_COUNT);
    for axis in Axis::ALL {
        for value in 0..N {
            planes.push(Plane::straight(axis, value));
        }
        planes.push(Plane::forward_diagonal(axis));
        planes.push(Plane::reverse_diagonal(axis));
    }
    planes
}

impl Geometry {
    /// Build all tables
    ///
    /// # Panics
    ///
    /// Panics if the construction does not produce exactly 76 distinct lines
    /// and 18 distinct planes. That can only be a bug in the builders.
    pub fn new() -> Self {
        let lines = build_lines();
        let planes = build_planes();

        assert_eq!(lines.len(), LINE_COUNT, "expected {LINE_COUNT} lines");
        assert_eq!(planes.len(), PLANE_COUNT, "expected {PLANE_COUNT} planes");

        let line_lookup: HashMap<BitSet, usize> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (line.mask(), i))
            .collect();
        let plane_lookup: HashMap<BitSet, usize> = planes
            .iter()
            .enumerate()
            .map(|(i, plane)| (plane.mask(), i))
            .collect();

        assert_eq!(line_lookup.len(), LINE_COUNT, "duplicate line");
        assert_eq!(plane_lookup.len(), PLANE_COUNT, "duplicate plane");

        let mut lines_through: [Vec<usize>; N_CUBED as usize] = array::from_fn(|_| Vec::new());
        for (i, line) in lines.iter().enumerate() {
            for cell in line.mask() {
                lines_through[cell as usize].push(i);
            }
        }

        tracing::debug!(
            "[GEOMETRY] Built {} lines and {} planes",
            lines.len(),
            planes.len()
        );

        Geometry {
            lines,
            planes,
            line_lookup,
            plane_lookup,
            lines_through,
        }
    }

    /// Process-wide instance, built on first use
    pub fn shared() -> &'static Geometry {
        SHARED.get_or_init(Geometry::new)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    /// Indices of the lines through `cell`
    #[inline]
    pub fn lines_through(&self, cell: u8) -> &[usize] {
        &self.lines_through[cell as usize]
    }

    /// Line whose mask is exactly `mask`
    pub fn find_line(&self, mask: BitSet) -> Option<&Line> {
        self.line_lookup.get(&mask).map(|&i| &self.lines[i])
    }

    /// Table index of the line whose mask is exactly `mask`
    pub fn line_index(&self, mask: BitSet) -> Option<usize> {
        self.line_lookup.get(&mask).copied()
    }

    /// Plane whose mask is exactly `mask`
    pub fn find_plane(&self, mask: BitSet) -> Option<&Plane> {
        self.plane_lookup.get(&mask).map(|&i| &self.planes[i])
    }

    /// Line where two planes meet
    ///
    /// `None` when the planes are parallel or meet in a set of cells that is
    /// not one of the 76 lines.
    pub fn plane_intersection(&self, a: &Plane, b: &Plane) -> Option<&Line> {
        self.find_line(a.mask() & b.mask())
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new()
    }
}
