//! Core value types shared by the board, evaluation and search
//!
//! - [`Player`]: the two sides. X always moves first and is the maximizing side.
//! - [`Outcome`]: the terminal-state indicator handed to the orchestrator.
//! - [`Score`]: signed evaluation from X's point of view.

use std::fmt;

/// Signed evaluation; positive favours X, negative favours O
pub type Score = i32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// The opponent
    #[inline]
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// X maximizes, O minimizes
    #[inline]
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Player::X)
    }

    /// Character used in board layouts
    pub const fn marker(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Parse a layout marker (case-insensitive)
    pub fn from_marker(c: char) -> Option<Player> {
        match c {
            'x' | 'X' => Some(Player::X),
            'o' | 'O' => Some(Player::O),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Terminal-state indicator
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Tie,
}

impl Outcome {
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("In progress"),
            Outcome::Win(player) => write!(f, "{player} Wins"),
            Outcome::Tie => f.write_str("Tie"),
        }
    }
}
