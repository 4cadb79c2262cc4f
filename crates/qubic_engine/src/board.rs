//! # Board - Immutable Game State
//!
//! A [`Board`] is two disjoint occupancy masks plus the side to move. Boards are
//! never mutated: [`Board::apply`] returns a new board and leaves its parent
//! intact, so a search can walk the tree and an orchestrator can keep a history
//! stack for undo without any copying beyond 17 bytes per position.
//!
//! ## Invariants
//!
//! - `x & o == 0`: no cell is claimed by both players.
//! - `|x| == |o|` when X is to move, `|x| == |o| + 1` when O is to move.
//!
//! Both are established by every constructor. [`Board::from_masks`] and the
//! layout parser check them and return an error for anything else.
//!
//! ## Layout Format
//!
//! One marker per cell in index order: `X`/`x`, `O`/`o`, or `.` for empty.
//! Spaces, tabs, newlines, `_` and `|` are separators and ignored. Cells not
//! mentioned are empty. `Display` writes the same format with rows of four
//! separated by spaces and layers by ` | `.

use crate::bitset::{BitSet, Ones};
use crate::constants::{N, N_CUBED, N_SQUARED};
use crate::coordinate::is_valid_index;
use crate::error::{EngineError, EngineResult};
use crate::evaluation;
use crate::geometry::{Geometry, Line};
use crate::types::{Outcome, Player, Score};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Copy, Clone, Debug)]
pub struct Board {
    x: BitSet,
    o: BitSet,
    turn: Player,
}

impl Board {
    /// Starting position: empty cube, X to move
    pub const fn new() -> Self {
        Board {
            x: BitSet::EMPTY,
            o: BitSet::EMPTY,
            turn: Player::X,
        }
    }

    /// Build a board from raw occupancy masks, inferring the side to move
    pub fn from_masks(x: BitSet, o: BitSet) -> EngineResult<Self> {
        let overlap = x & o;
        if !overlap.is_empty() {
            return Err(EngineError::OverlappingMasks {
                overlap: overlap.bits(),
            });
        }
        let turn = turn_for_counts(x.count_ones(), o.count_ones())?;
        Ok(Board { x, o, turn })
    }

    /// Board after the side to move plays `cell`
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range or already occupied. Callers holding
    /// untrusted input should use [`Board::try_apply`].
    #[must_use]
    pub fn apply(self, cell: u8) -> Board {
        assert!(self.is_empty(cell), "move on occupied cell {cell}");
        match self.turn {
            Player::X => Board {
                x: self.x.with(cell),
                o: self.o,
                turn: Player::O,
            },
            Player::O => Board {
                x: self.x,
                o: self.o.with(cell),
                turn: Player::X,
            },
        }
    }

    /// Checked variant of [`Board::apply`] for moves entered by a human
    pub fn try_apply(self, cell: i64) -> EngineResult<Board> {
        if !is_valid_index(cell) {
            return Err(EngineError::InvalidCell { index: cell });
        }
        let cell = cell as u8;
        if !self.is_empty(cell) {
            return Err(EngineError::CellOccupied { index: cell });
        }
        Ok(self.apply(cell))
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Cells held by `player`
    #[inline]
    pub fn occupancy(&self, player: Player) -> BitSet {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    #[inline]
    pub fn occupied(&self) -> BitSet {
        self.x | self.o
    }

    #[inline]
    pub fn empty_cells(&self) -> BitSet {
        !self.occupied()
    }

    /// Who holds `cell`, `None` when it is empty
    pub fn occupant(&self, cell: u8) -> Option<Player> {
        if self.x.contains(cell) {
            Some(Player::X)
        } else if self.o.contains(cell) {
            Some(Player::O)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, cell: u8) -> bool {
        !self.occupied().contains(cell)
    }

    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// Legal moves: every empty cell, lowest index first
    #[inline]
    pub fn moves(&self) -> Ones {
        self.empty_cells().ones()
    }

    pub fn outcome(&self, geometry: &Geometry) -> Outcome {
        evaluation::outcome(self, geometry)
    }

    pub fn is_over(&self, geometry: &Geometry) -> bool {
        evaluation::is_over(self, geometry)
    }

    pub fn winner(&self, geometry: &Geometry) -> Option<Player> {
        evaluation::winner(self, geometry)
    }

    /// Terminal score: ±`WIN_SCORE` for a win, 0 otherwise
    pub fn score(&self, geometry: &Geometry) -> Score {
        evaluation::terminal_score(self, geometry)
    }

    /// The completed line, if either player has one
    pub fn winning_line<'g>(&self, geometry: &'g Geometry) -> Option<&'g Line> {
        evaluation::winning_line(self, geometry)
    }
}

fn turn_for_counts(x: u32, o: u32) -> EngineResult<Player> {
    if x == o {
        Ok(Player::X)
    } else if x == o + 1 {
        Ok(Player::O)
    } else {
        Err(EngineError::InvalidPieceCounts { x, o })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

// Side to move follows from the piece counts, so the masks decide identity.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.o == other.o
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.o.hash(state);
    }
}

impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut x = BitSet::new();
        let mut o = BitSet::new();
        let mut cell: usize = 0;

        for (offset, c) in s.chars().enumerate() {
            if c.is_whitespace() || c == '_' || c == '|' {
                continue;
            }
            let player = match (c, Player::from_marker(c)) {
                (_, Some(player)) => Some(player),
                ('.', None) => None,
                _ => return Err(EngineError::InvalidMarker { marker: c, offset }),
            };
            if cell < N_CUBED as usize {
                match player {
                    Some(Player::X) => x.insert(cell as u8),
                    Some(Player::O) => o.insert(cell as u8),
                    None => {}
                }
            }
            cell += 1;
        }

        if cell > N_CUBED as usize {
            return Err(EngineError::TooManyCells { count: cell });
        }
        Board::from_masks(x, o)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in 0..N_CUBED {
            if cell > 0 {
                if cell % N_SQUARED == 0 {
                    f.write_str(" | ")?;
                } else if cell % N == 0 {
                    f.write_str(" ")?;
                }
            }
            let marker = self.occupant(cell).map_or('.', Player::marker);
            write!(f, "{marker}")?;
        }
        Ok(())
    }
}
