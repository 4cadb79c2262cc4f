//! Minimax search with alpha-beta pruning
//!
//! This module implements the move choice of the engine:
//! - Recursive minimax over immutable [`Board`] values
//! - Optional alpha-beta pruning (on by default)
//! - Optional move ordering by static evaluation at interior nodes
//!
//! X maximizes and O minimizes. Whose turn a node represents is read from the
//! board itself. Depth is counted in plies.
//!
//! ## Root Tie-Break
//!
//! Root moves are visited in ascending cell order and a move replaces the
//! current best only with a strictly better score, so the lowest cell index
//! wins ties. With pruning on, later root moves are searched inside the window
//! set by earlier ones; a move that cannot beat the best returns a bound that
//! never replaces it, so the chosen move and score match a full-window search.
//! Move ordering is never applied at the root.
//!
//! ## Module Organization
//!
//! - `minimax` - recursive pruned and unpruned search
//! - `ordering` - child ordering heuristic

mod minimax;
mod ordering;

use crate::board::Board;
use crate::constants::{INFINITY, MAX_DEPTH};
use crate::coordinate::Coordinate;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::{Evaluator, Strategy};
use crate::geometry::Geometry;
use crate::types::Score;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

/// Search parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead, 1..=64
    pub depth: u32,
    pub alpha_beta: bool,
    pub ordering: bool,
    pub strategy: Strategy,
    /// Add early-game noise to leaf evaluations
    pub noise: bool,
    /// Seed for the noise source; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            alpha_beta: true,
            ordering: false,
            strategy: Strategy::Standard,
            noise: false,
            seed: None,
        }
    }
}

/// Counters collected during one search
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited below the root
    pub nodes: u64,
    /// Leaf positions scored
    pub evaluations: u64,
    /// Sibling loops cut short by alpha-beta
    pub cutoffs: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: u8,
    pub score: Score,
    pub stats: SearchStats,
}

pub struct Searcher<'g> {
    geometry: &'g Geometry,
    evaluator: Evaluator,
    config: SearchConfig,
    rng: Option<StdRng>,
    stats: SearchStats,
}

impl<'g> Searcher<'g> {
    pub fn new(geometry: &'g Geometry, config: SearchConfig) -> Self {
        let rng = config.noise.then(|| match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        });
        Searcher {
            geometry,
            evaluator: Evaluator::new(config.strategy),
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters of the most recent search
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick a move for the side to move on `board`
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDepth`] when the configured depth is 0 or above 64,
    /// [`EngineError::GameOver`] when `board` is already decided or full.
    pub fn root_search(&mut self, board: &Board) -> EngineResult<SearchResult> {
        let depth = self.config.depth;
        if depth == 0 || depth > MAX_DEPTH {
            return Err(EngineError::InvalidDepth { depth });
        }
        if board.is_over(self.geometry) {
            return Err(EngineError::GameOver);
        }

        self.stats = SearchStats::default();
        let maximizing = board.turn().is_maximizing();
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<(u8, Score)> = None;

        for cell in board.moves() {
            let child = board.apply(cell);
            let score = if self.config.alpha_beta {
                self.minimax(&child, depth - 1, alpha, beta)
            } else {
                self.minimax_full(&child, depth - 1)
            };

            trace!(
                "[SEARCH] Move {} -> score = {}",
                Coordinate::from_index(cell),
                score
            );

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((cell, score));
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        // A position that is not over has at least one empty cell.
        let (best_move, score) = best.ok_or(EngineError::GameOver)?;

        debug!(
            "[SEARCH] Best move {} score {} ({} nodes, {} evaluations, {} cutoffs)",
            Coordinate::from_index(best_move),
            score,
            self.stats.nodes,
            self.stats.evaluations,
            self.stats.cutoffs
        );

        Ok(SearchResult {
            best_move,
            score,
            stats: self.stats,
        })
    }

    /// Leaf evaluation, with noise when configured
    fn leaf(&mut self, board: &Board) -> Score {
        self.stats.evaluations += 1;
        let geometry = self.geometry;
        match self.rng.as_mut() {
            Some(rng) => self.evaluator.evaluate_with_noise(board, geometry, rng),
            None => self.evaluator.evaluate(board, geometry),
        }
    }

    /// Children of `board` in search order
    fn children(&self, board: &Board) -> Vec<Board> {
        let mut children: Vec<Board> = board.moves().map(|cell| board.apply(cell)).collect();
        if self.config.ordering {
            ordering::order_children(&mut children, board.turn(), &self.evaluator, self.geometry);
        }
        children
    }
}

/// Best move for `board` with default options at `depth` plies
pub fn best_move(board: &Board, depth: u32, geometry: &Geometry) -> EngineResult<u8> {
    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    Searcher::new(geometry, config)
        .root_search(board)
        .map(|result| result.best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WIN_SCORE;
    use crate::coordinate::position;
    use crate::types::Player;

    #[test]
    fn test_invalid_depth_is_rejected() {
        let geometry = Geometry::new();
        for depth in [0, 65] {
            let mut searcher = Searcher::new(
                &geometry,
                SearchConfig {
                    depth,
                    ..SearchConfig::default()
                },
            );
            assert_eq!(
                searcher.root_search(&Board::new()),
                Err(EngineError::InvalidDepth { depth })
            );
        }
    }

    #[test]
    fn test_finished_game_is_rejected() {
        let geometry = Geometry::new();
        let won: Board = "XXXX OOO.".parse().expect("valid layout");
        assert_eq!(best_move(&won, 2, &geometry), Err(EngineError::GameOver));
    }

    #[test]
    fn test_takes_immediate_win() {
        let geometry = Geometry::new();
        let board: Board = "XXX. OOO.".parse().expect("valid layout");
        let mut searcher = Searcher::new(&geometry, SearchConfig::default());
        let result = searcher.root_search(&board).expect("search succeeds");
        assert_eq!(result.best_move, 3);
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let geometry = Geometry::new();
        // O threatens the bottom row; X has nothing better than blocking at depth 2
        let board: Board = "OOO. X... X... .... | X".parse().expect("valid layout");
        assert_eq!(board.turn(), Player::X);
        let chosen = best_move(&board, 2, &geometry).expect("search succeeds");
        assert_eq!(chosen, position(3, 0, 0));
    }

    #[test]
    fn test_stats_are_collected() {
        let geometry = Geometry::new();
        let board = Board::new().apply(21).apply(42);
        let config = SearchConfig {
            depth: 2,
            ..SearchConfig::default()
        };
        let mut searcher = Searcher::new(&geometry, config);
        let result = searcher.root_search(&board).expect("search succeeds");
        assert!(result.stats.nodes > 0, "search should visit nodes");
        assert!(result.stats.evaluations > 0);
        assert!(result.stats.cutoffs > 0, "alpha-beta should prune");
        assert_eq!(result.stats, searcher.stats());
    }

    #[test]
    fn test_pruning_and_ordering_keep_the_result() {
        let geometry = Geometry::new();
        let board: Board = "X.O. .X.. ..O. .... | ...X".parse().expect("valid layout");

        let run = |alpha_beta: bool, ordering: bool| {
            let config = SearchConfig {
                depth: 2,
                alpha_beta,
                ordering,
                ..SearchConfig::default()
            };
            Searcher::new(&geometry, config)
                .root_search(&board)
                .expect("search succeeds")
        };

        let full = run(false, false);
        let pruned = run(true, false);
        let ordered = run(true, true);

        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.score, full.score);
        assert_eq!(ordered.best_move, full.best_move);
        assert_eq!(ordered.score, full.score);
        assert!(pruned.stats.nodes <= full.stats.nodes);
        assert_eq!(full.stats.cutoffs, 0);
    }

    #[test]
    fn test_seeded_noise_is_reproducible() {
        let geometry = Geometry::new();
        let config = SearchConfig {
            depth: 1,
            noise: true,
            seed: Some(42),
            ..SearchConfig::default()
        };
        let board = Board::new();
        let first = Searcher::new(&geometry, config).root_search(&board);
        let second = Searcher::new(&geometry, config).root_search(&board);
        assert_eq!(first, second);
    }
}
