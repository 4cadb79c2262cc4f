//! Position evaluation
//!
//! Two jobs:
//! - terminal detection and scoring (win, tie, still in progress)
//! - a heuristic score for positions that are not over
//!
//! ## Heuristic
//!
//! Each player's [`Features`] are gathered from the occupancy masks and the
//! geometry tables alone: open threes, twos and ones, forks, center control,
//! and, depending on the [`Strategy`], forced-win patterns or plane clustering.
//! The score is a weighted sum of `X - O` differences, so swapping the two
//! masks negates it exactly.
//!
//! While fewer than ten cells are occupied the standard strategy may add a
//! small random perturbation. That only happens through
//! [`Evaluator::evaluate_with_noise`]; [`Evaluator::evaluate`] is deterministic.
//!
//! ## Module Organization
//!
//! - `lines` - per-line classification
//! - `patterns` - forks, center control, forced wins, clustering
//! - `weights` - the weight table of each strategy

mod lines;
mod patterns;
mod weights;

pub use lines::LineTally;
pub use patterns::{center_control, clustered_pieces, count_forks, forced_wins};
pub use weights::Weights;

use crate::bitset::BitSet;
use crate::board::Board;
use crate::constants::{EARLY_GAME_CELLS, NOISE_SPREAD, WIN_SCORE};
use crate::geometry::{Geometry, Line};
use crate::types::{Outcome, Player, Score};
use rand::Rng;
use std::fmt;

/// Winner of `board`, scanning lines in table order with X checked first
pub fn winner(board: &Board, geometry: &Geometry) -> Option<Player> {
    winning_line_and_player(board, geometry).map(|(_, player)| player)
}

/// The first completed line, in table order
pub fn winning_line<'g>(board: &Board, geometry: &'g Geometry) -> Option<&'g Line> {
    winning_line_and_player(board, geometry).map(|(line, _)| line)
}

fn winning_line_and_player<'g>(
    board: &Board,
    geometry: &'g Geometry,
) -> Option<(&'g Line, Player)> {
    let x = board.occupancy(Player::X);
    let o = board.occupancy(Player::O);
    geometry.lines().iter().find_map(|line| {
        if line.mask().is_subset_of(x) {
            Some((line, Player::X))
        } else if line.mask().is_subset_of(o) {
            Some((line, Player::O))
        } else {
            None
        }
    })
}

pub fn outcome(board: &Board, geometry: &Geometry) -> Outcome {
    match winner(board, geometry) {
        Some(player) => Outcome::Win(player),
        None if board.is_full() => Outcome::Tie,
        None => Outcome::InProgress,
    }
}

/// A player has completed a line or no empty cells remain
pub fn is_over(board: &Board, geometry: &Geometry) -> bool {
    outcome(board, geometry).is_over()
}

/// `+WIN_SCORE` for an X win, `-WIN_SCORE` for an O win, 0 otherwise
pub fn terminal_score(board: &Board, geometry: &Geometry) -> Score {
    match winner(board, geometry) {
        Some(Player::X) => WIN_SCORE,
        Some(Player::O) => -WIN_SCORE,
        None => 0,
    }
}

/// Selectable weight table and term set
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Forced wins, forks, open lines, center control, early noise
    #[default]
    Standard,
    /// Forks, open lines, center control, plane clustering
    Clustered,
}

impl Strategy {
    pub const fn weights(self) -> Weights {
        match self {
            Strategy::Standard => Weights::STANDARD,
            Strategy::Clustered => Weights::CLUSTERED,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Standard => f.write_str("standard"),
            Strategy::Clustered => f.write_str("clustered"),
        }
    }
}

/// Heuristic terms for one player
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Features {
    pub threes: u32,
    pub twos: u32,
    pub ones: u32,
    pub forks: u32,
    pub forced_wins: u32,
    pub center: i32,
    pub clusters: i32,
}

impl Features {
    /// Gather `own`'s terms; terms with a zero weight are skipped
    pub fn collect(own: BitSet, opponent: BitSet, geometry: &Geometry, weights: &Weights) -> Self {
        let tally = LineTally::count(own, opponent, geometry);

        let forks = if weights.fork != 0 {
            count_forks(&tally.two_lines, own, opponent, geometry)
        } else {
            0
        };
        let forced_wins = if weights.forced_win != 0 {
            forced_wins(&tally.three_lines, own, opponent, geometry)
        } else {
            0
        };
        let clusters = if weights.cluster != 0 {
            clustered_pieces(own, geometry)
        } else {
            0
        };

        Features {
            threes: tally.threes,
            twos: tally.twos,
            ones: tally.ones,
            forks,
            forced_wins,
            center: center_control(own),
            clusters,
        }
    }
}

/// Scores boards under one [`Strategy`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluator {
    strategy: Strategy,
}

impl Evaluator {
    pub const fn new(strategy: Strategy) -> Self {
        Evaluator { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Terminal score for finished games, heuristic score otherwise
    pub fn evaluate(&self, board: &Board, geometry: &Geometry) -> Score {
        if is_over(board, geometry) {
            return terminal_score(board, geometry);
        }
        self.heuristic(board, geometry)
    }

    /// [`Evaluator::evaluate`] plus early-game noise in `[-2, 2]`
    ///
    /// Noise applies only to non-terminal positions with fewer than ten
    /// occupied cells, and only for strategies that allow it.
    pub fn evaluate_with_noise<R: Rng + ?Sized>(
        &self,
        board: &Board,
        geometry: &Geometry,
        rng: &mut R,
    ) -> Score {
        if is_over(board, geometry) {
            return terminal_score(board, geometry);
        }
        let score = self.heuristic(board, geometry);
        if self.strategy.weights().early_noise && board.piece_count() < EARLY_GAME_CELLS {
            score + rng.random_range(-NOISE_SPREAD..=NOISE_SPREAD)
        } else {
            score
        }
    }

    /// Heuristic score of a position, ignoring whether it is terminal
    pub fn heuristic(&self, board: &Board, geometry: &Geometry) -> Score {
        self.score_masks(
            board.occupancy(Player::X),
            board.occupancy(Player::O),
            geometry,
        )
    }

    /// Heuristic score for raw masks, from X's side
    pub fn score_masks(&self, x: BitSet, o: BitSet, geometry: &Geometry) -> Score {
        let weights = self.strategy.weights();
        let x_features = Features::collect(x, o, geometry, &weights);
        let o_features = Features::collect(o, x, geometry, &weights);
        weights.combine(&x_features, &o_features)
    }
}
