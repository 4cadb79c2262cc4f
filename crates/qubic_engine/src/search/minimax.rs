//! Recursive minimax, with and without alpha-beta cutoffs
//!
//! Both variants score a terminal position by the terminal rule before looking
//! at the depth, so a decided position reached at depth 0 is never scored
//! heuristically. The pruned variant returns exactly the value of the unpruned
//! one for any window that contains it.

use super::Searcher;
use crate::board::Board;
use crate::constants::INFINITY;
use crate::types::Score;

impl Searcher<'_> {
    /// Alpha-beta minimax value of `board` searched `depth` plies deep
    pub fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 || board.is_over(self.geometry) {
            return self.leaf(board);
        }

        let children = self.children(board);
        if board.turn().is_maximizing() {
            let mut value = -INFINITY;
            for child in &children {
                value = value.max(self.minimax(child, depth - 1, alpha, beta));
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for child in &children {
                value = value.min(self.minimax(child, depth - 1, alpha, beta));
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        }
    }

    /// Plain minimax value of `board`, visiting every node
    pub fn minimax_full(&mut self, board: &Board, depth: u32) -> Score {
        self.stats.nodes += 1;

        if depth == 0 || board.is_over(self.geometry) {
            return self.leaf(board);
        }

        let children = self.children(board);
        let scores = children
            .iter()
            .map(|child| self.minimax_full(child, depth - 1))
            .collect::<Vec<_>>();

        let best = if board.turn().is_maximizing() {
            scores.into_iter().max()
        } else {
            scores.into_iter().min()
        };
        // Not over means at least one child.
        best.unwrap_or_else(|| self.leaf(board))
    }
}
