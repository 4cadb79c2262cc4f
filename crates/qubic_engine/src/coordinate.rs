//! Cell coordinates
//!
//! Bijection between `(x, y, z)` in `[0,4)³` and the linear cell index
//! `z * 16 + y * 4 + x` used by every bitset in the engine.

use crate::constants::{N, N_CUBED, N_SQUARED};
use crate::error::{EngineError, EngineResult};
use std::fmt;

/// One of the three cube axes
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Zero-based cell coordinate, always in range once constructed
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: u8,
    y: u8,
    z: u8,
}

/// Check if coordinate components are in range
#[inline]
pub fn is_valid(x: i64, y: i64, z: i64) -> bool {
    let n = N as i64;
    (0..n).contains(&x) && (0..n).contains(&y) && (0..n).contains(&z)
}

/// Check if a cell index is in range
#[inline]
pub fn is_valid_index(index: i64) -> bool {
    (0..N_CUBED as i64).contains(&index)
}

/// Cell index for in-range components
///
/// # Panics
///
/// Panics if any component is 4 or more.
#[inline]
pub fn position(x: u8, y: u8, z: u8) -> u8 {
    assert!(
        x < N && y < N && z < N,
        "coordinate ({x},{y},{z}) out of range"
    );
    z * N_SQUARED + y * N + x
}

impl Coordinate {
    /// Checked construction from values entered outside the engine
    pub fn new(x: i64, y: i64, z: i64) -> EngineResult<Self> {
        if !is_valid(x, y, z) {
            return Err(EngineError::InvalidCoordinate { x, y, z });
        }
        Ok(Coordinate {
            x: x as u8,
            y: y as u8,
            z: z as u8,
        })
    }

    /// Checked conversion from a cell index entered outside the engine
    pub fn try_from_index(index: i64) -> EngineResult<Self> {
        if !is_valid_index(index) {
            return Err(EngineError::InvalidCell { index });
        }
        Ok(Self::from_index(index as u8))
    }

    /// # Panics
    ///
    /// Panics if `index` is 64 or more.
    pub fn from_index(index: u8) -> Self {
        assert!(index < N_CUBED, "cell index {index} out of range (0-63)");
        Coordinate {
            x: index % N,
            y: (index / N) % N,
            z: index / N_SQUARED,
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        position(self.x, self.y, self.z)
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    pub fn z(self) -> u8 {
        self.z
    }
}

impl From<Coordinate> for u8 {
    fn from(coordinate: Coordinate) -> u8 {
        coordinate.index()
    }
}

/// One-based `(x,y,z)`, matching what the player types at the console
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x + 1, self.y + 1, self.z + 1)
    }
}
