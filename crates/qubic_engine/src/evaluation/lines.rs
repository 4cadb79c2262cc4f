//! Line classification
//!
//! Sorts every line by how many of one player's pieces it holds. A line that
//! also holds an opponent piece is blocked and ignored.

use crate::bitset::BitSet;
use crate::geometry::Geometry;

/// Open lines for one player, by number of pieces
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineTally {
    pub threes: u32,
    pub twos: u32,
    pub ones: u32,
    /// Table indices of the open two-lines, ascending
    pub two_lines: Vec<usize>,
    /// Table indices of the open three-lines, ascending
    pub three_lines: Vec<usize>,
}

impl LineTally {
    /// Classify all 76 lines from `own`'s side
    pub fn count(own: BitSet, opponent: BitSet, geometry: &Geometry) -> Self {
        let mut tally = LineTally::default();

        for (i, line) in geometry.lines().iter().enumerate() {
            let mask = line.mask();
            if (opponent & mask).count_ones() > 0 {
                continue;
            }
            match (own & mask).count_ones() {
                3 => {
                    tally.threes += 1;
                    tally.three_lines.push(i);
                }
                2 => {
                    tally.twos += 1;
                    tally.two_lines.push(i);
                }
                1 => tally.ones += 1,
                _ => {}
            }
        }

        tally
    }
}
