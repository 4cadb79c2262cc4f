//! Move ordering for alpha-beta pruning
//!
//! Orders child positions so the most promising one for the side to move is
//! searched first. Cutoffs come earlier; the minimax value does not change.

use crate::board::Board;
use crate::evaluation::Evaluator;
use crate::geometry::Geometry;
use crate::types::{Player, Score};

/// Sort `children` by static evaluation, best for `mover` first
///
/// The sort is stable, so equally scored children keep their move order.
pub(crate) fn order_children(
    children: &mut [Board],
    mover: Player,
    evaluator: &Evaluator,
    geometry: &Geometry,
) {
    let mut scored: Vec<(Score, Board)> = children
        .iter()
        .map(|child| (evaluator.evaluate(child, geometry), *child))
        .collect();

    if mover.is_maximizing() {
        scored.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        scored.sort_by(|a, b| a.0.cmp(&b.0));
    }

    for (slot, (_, board)) in children.iter_mut().zip(scored) {
        *slot = board;
    }
}
