//! Higher-order patterns: forks, center control, forced wins, plane clustering

use crate::bitset::BitSet;
use crate::constants::{CENTER_CELLS, CENTER_WEIGHT, NEAR_CENTER_CELLS, NEAR_CENTER_WEIGHT};
use crate::geometry::Geometry;

const fn mask_of(cells: &[(u8, u8, u8)]) -> BitSet {
    let mut bits = 0u64;
    let mut i = 0;
    while i < cells.len() {
        let (x, y, z) = cells[i];
        bits |= 1u64 << (z as u32 * 16 + y as u32 * 4 + x as u32);
        i += 1;
    }
    BitSet(bits)
}

const CENTER_MASK: BitSet = mask_of(&CENTER_CELLS);
const NEAR_CENTER_MASK: BitSet = mask_of(&NEAR_CENTER_CELLS);

/// Open threes `own` would hold through `cell` after playing there
fn threats_through(cell: u8, own: BitSet, opponent: BitSet, geometry: &Geometry) -> u32 {
    let after = own.with(cell);
    geometry
        .lines_through(cell)
        .iter()
        .map(|&i| geometry.line(i).mask())
        .filter(|&mask| !opponent.intersects(mask) && (after & mask).count_ones() == 3)
        .count() as u32
}

/// Hypothetical moves that would create two or more open threes at once
///
/// Every empty cell of every open two-line is tried. The threat count includes
/// the two-line itself, so one extra line through the cell makes a fork. A cell
/// shared by several two-lines is counted once per line.
pub fn count_forks(two_lines: &[usize], own: BitSet, opponent: BitSet, geometry: &Geometry) -> u32 {
    let occupied = own | opponent;
    let mut forks = 0;

    for &index in two_lines {
        let empty = geometry.line(index).mask() & !occupied;
        for cell in empty {
            if threats_through(cell, own, opponent, geometry) >= 2 {
                forks += 1;
            }
        }
    }

    forks
}

/// Weighted count of pieces in and around the inner core
pub fn center_control(own: BitSet) -> i32 {
    (own & CENTER_MASK).count_ones() as i32 * CENTER_WEIGHT
        + (own & NEAR_CENTER_MASK).count_ones() as i32 * NEAR_CENTER_WEIGHT
}

/// Positions the opponent cannot stop with a single reply
///
/// - a plane holding exactly `own`'s four corner pieces and nothing else
/// - a plane holding exactly `own`'s inner 2×2 block and nothing else
/// - each pair of open threes waiting on the same empty cell
pub fn forced_wins(
    three_lines: &[usize],
    own: BitSet,
    opponent: BitSet,
    geometry: &Geometry,
) -> u32 {
    let mut wins = 0;

    for plane in geometry.planes() {
        if opponent.intersects(plane.mask()) {
            continue;
        }
        let held = own & plane.mask();
        if held.count_ones() != 4 {
            continue;
        }
        if held == plane.corners() {
            wins += 1;
        }
        if held == plane.inner() {
            wins += 1;
        }
    }

    let occupied = own | opponent;
    let gaps: Vec<BitSet> = three_lines
        .iter()
        .map(|&i| geometry.line(i).mask() & !occupied)
        .collect();
    for (i, gap) in gaps.iter().enumerate() {
        wins += gaps[i + 1..].iter().filter(|other| *other == gap).count() as u32;
    }

    wins
}

/// Sum over planes of `count²` when a plane holds two or more pieces, else `count`
pub fn clustered_pieces(own: BitSet, geometry: &Geometry) -> i32 {
    geometry
        .planes()
        .iter()
        .map(|plane| {
            let count = (own & plane.mask()).count_ones() as i32;
            if count >= 2 {
                count * count
            } else {
                count
            }
        })
        .sum()
}
