//! Engine Property Tests
//!
//! Tests for engine-wide invariants including:
//! - Board population and disjointness
//! - Geometry counts and containment
//! - Evaluation symmetry
//! - Search equivalence with and without pruning
//! - End-to-end scenarios

use qubic_engine::constants::{INFINITY, WIN_SCORE};
use qubic_engine::{
    BitSet, Board, EngineError, Evaluator, Geometry, Outcome, Player, SearchConfig, Searcher,
    Strategy,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Full board in which neither player owns a line
const TIE_LAYOUT: &str =
    "OOOX OXXO XOOO OOOX XXOX XOXX OXOX OOXO XOXO OOXO OXXO XXOX XOXO XXOX XXOO OXXX";

/// Play up to `moves` random legal moves from the empty board, stopping early if the game ends
fn random_board(rng: &mut StdRng, moves: usize, geometry: &Geometry) -> Board {
    let mut board = Board::new();
    for _ in 0..moves {
        if board.is_over(geometry) {
            break;
        }
        let legal: Vec<u8> = board.moves().collect();
        let cell = legal[rng.random_range(0..legal.len())];
        board = board.apply(cell);
    }
    board
}

fn config(depth: u32, alpha_beta: bool) -> SearchConfig {
    SearchConfig {
        depth,
        alpha_beta,
        ..SearchConfig::default()
    }
}

fn config_with(depth: u32, alpha_beta: bool, strategy: Strategy) -> SearchConfig {
    SearchConfig {
        strategy,
        ..config(depth, alpha_beta)
    }
}

// ============================================================================
// Board Invariants
// ============================================================================

#[test]
fn test_apply_keeps_masks_disjoint_and_adds_one_piece() {
    let geometry = Geometry::shared();
    let mut rng = StdRng::seed_from_u64(1);

    for _ in 0..50 {
        let moves = rng.random_range(0..40);
        let board = random_board(&mut rng, moves, geometry);
        for cell in board.moves() {
            let next = board.apply(cell);
            let x = next.occupancy(Player::X);
            let o = next.occupancy(Player::O);
            assert!(!x.intersects(o), "masks overlap after playing {cell}");
            assert_eq!(next.piece_count(), board.piece_count() + 1);
        }
    }
}

#[test]
fn test_population_sums_to_64() {
    let geometry = Geometry::shared();
    let mut rng = StdRng::seed_from_u64(2);

    for moves in 0..64 {
        let board = random_board(&mut rng, moves, geometry);
        let total = board.occupancy(Player::X).count_ones()
            + board.occupancy(Player::O).count_ones()
            + board.empty_cells().count_ones();
        assert_eq!(total, 64, "population mismatch after {moves} moves");
    }
}

// ============================================================================
// Geometry Invariants
// ============================================================================

#[test]
fn test_geometry_counts_and_containment() {
    let geometry = Geometry::shared();

    assert_eq!(geometry.lines().len(), 76, "cube should have 76 lines");
    assert_eq!(geometry.planes().len(), 18, "cube should have 18 planes");

    for line in geometry.lines() {
        assert_eq!(line.mask().count_ones(), 4, "{line}");
        assert!(
            geometry
                .planes()
                .iter()
                .any(|plane| line.mask().is_subset_of(plane.mask())),
            "{line} should lie in some plane"
        );
    }
    for plane in geometry.planes() {
        assert_eq!(plane.mask().count_ones(), 16, "{plane}");
    }
}

#[test]
fn test_every_line_is_found_by_its_mask() {
    let geometry = Geometry::shared();
    for line in geometry.lines() {
        assert_eq!(geometry.find_line(line.mask()), Some(line));
    }
}

// ============================================================================
// Evaluation Properties
// ============================================================================

#[test]
fn test_swapping_players_negates_heuristic() {
    let geometry = Geometry::shared();
    let mut rng = StdRng::seed_from_u64(3);

    for strategy in [Strategy::Standard, Strategy::Clustered] {
        let evaluator = Evaluator::new(strategy);
        for _ in 0..30 {
            let moves = rng.random_range(0..30);
            let board = random_board(&mut rng, moves, geometry);
            let x = board.occupancy(Player::X);
            let o = board.occupancy(Player::O);
            assert_eq!(
                evaluator.score_masks(x, o, geometry),
                -evaluator.score_masks(o, x, geometry),
                "{strategy} evaluation should be antisymmetric for {board}"
            );
        }
    }
}

#[test]
fn test_terminal_score_dominates_heuristic() {
    let geometry = Geometry::shared();
    let mut rng = StdRng::seed_from_u64(4);
    let evaluator = Evaluator::default();

    for _ in 0..30 {
        let moves = rng.random_range(0..50);
        let board = random_board(&mut rng, moves, geometry);
        if board.is_over(geometry) {
            continue;
        }
        let score = evaluator.evaluate(&board, geometry);
        assert!(score.abs() < WIN_SCORE, "{score} reaches the win score");
    }
}

// ============================================================================
// Search Properties
// ============================================================================

#[test]
fn test_terminal_positions_ignore_depth() {
    let geometry = Geometry::shared();
    let evaluator = Evaluator::default();
    let boards: Vec<Board> = vec![
        "XXXX OOO.".parse().expect("valid layout"),
        "OOOO XXX. X".parse().expect("valid layout"),
        TIE_LAYOUT.parse().expect("valid layout"),
    ];

    let mut searcher = Searcher::new(geometry, SearchConfig::default());
    for board in &boards {
        let expected = evaluator.evaluate(board, geometry);
        for depth in [0, 1, 3, 10] {
            let value = searcher.minimax(board, depth, -INFINITY, INFINITY);
            assert_eq!(value, expected);
            assert_eq!(searcher.minimax(board, depth, -5, 5), expected);
        }
    }
}

#[test]
fn test_alpha_beta_matches_plain_minimax() {
    let geometry = Geometry::shared();
    let mut rng = StdRng::seed_from_u64(5);

    for strategy in [Strategy::Standard, Strategy::Clustered] {
        for round in 0..12 {
            let (moves, depth) = if round % 3 == 0 {
                (44, 3)
            } else {
                (rng.random_range(4..30), 2)
            };
            let board = random_board(&mut rng, moves, geometry);
            if board.is_over(geometry) {
                continue;
            }

            let mut full = Searcher::new(geometry, config_with(depth, false, strategy));
            let mut pruned = Searcher::new(geometry, config_with(depth, true, strategy));
            assert_eq!(
                pruned.minimax(&board, depth, -INFINITY, INFINITY),
                full.minimax_full(&board, depth),
                "{strategy}: pruning changed the value of {board} at depth {depth}"
            );

            let expected = full.root_search(&board).expect("search succeeds");
            let chosen = pruned.root_search(&board).expect("search succeeds");
            assert_eq!(chosen.best_move, expected.best_move, "{strategy}: {board}");
            assert_eq!(chosen.score, expected.score, "{strategy}: {board}");
            assert!(chosen.stats.nodes <= expected.stats.nodes);
        }
    }
}

#[test]
fn test_move_ordering_keeps_root_choice() {
    let geometry = Geometry::shared();
    let mut rng = StdRng::seed_from_u64(6);

    for _ in 0..5 {
        let moves = rng.random_range(6..20);
        let board = random_board(&mut rng, moves, geometry);
        if board.is_over(geometry) {
            continue;
        }
        let plain = Searcher::new(geometry, config(2, true)).root_search(&board);
        let ordering = SearchConfig {
            ordering: true,
            ..config(2, true)
        };
        let ordered = Searcher::new(geometry, ordering).root_search(&board);

        let plain = plain.expect("search succeeds");
        let ordered = ordered.expect("search succeeds");
        assert_eq!(ordered.best_move, plain.best_move, "{board}");
        assert_eq!(ordered.score, plain.score, "{board}");
    }
}

// ============================================================================
// End-to-End Scenarios
// ============================================================================

#[test]
fn test_empty_board_search_returns_legal_move() {
    let geometry = Geometry::shared();
    let board = Board::new();
    let result = Searcher::new(geometry, config(1, true))
        .root_search(&board)
        .expect("search succeeds");
    assert!(result.best_move < 64);
    assert!(board.is_empty(result.best_move));
}

#[test]
fn test_search_completes_every_open_three() {
    let geometry = Geometry::shared();

    for line in geometry.lines() {
        let cells: Vec<u8> = line.mask().ones().collect();
        let gap = cells[3];
        let x: BitSet = cells[..3].iter().copied().collect();

        // Three O pieces off the line so that X is to move
        let o: BitSet = (0..64u8)
            .filter(|&cell| !line.contains(cell))
            .take(3)
            .collect();

        let board = Board::from_masks(x, o).expect("valid masks");
        assert_eq!(board.turn(), Player::X);
        assert!(!board.is_over(geometry));

        let result = Searcher::new(geometry, config(1, true))
            .root_search(&board)
            .expect("search succeeds");
        let after = board.apply(result.best_move);
        assert_eq!(
            after.winner(geometry),
            Some(Player::X),
            "X should win immediately on {}; chose {} (gap {gap})",
            line.label(),
            result.best_move
        );
        assert_eq!(result.score, WIN_SCORE);
    }
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    let geometry = Geometry::shared();
    let board: Board = TIE_LAYOUT.parse().expect("valid layout");

    assert!(board.is_full());
    assert!(board.is_over(geometry));
    assert_eq!(board.outcome(geometry), Outcome::Tie);
    assert_eq!(board.winner(geometry), None);
    assert_eq!(board.score(geometry), 0);
    assert!(board.winning_line(geometry).is_none());
}

#[test]
fn test_layout_turn_inference() {
    // Drop one O from the full tie board: 32 X against 31 O
    let position = TIE_LAYOUT.find('O').expect("layout has an O");
    let mut layout = TIE_LAYOUT.to_string();
    layout.replace_range(position..=position, ".");

    let board: Board = layout.parse().expect("valid layout");
    assert_eq!(board.occupancy(Player::X).count_ones(), 32);
    assert_eq!(board.occupancy(Player::O).count_ones(), 31);
    assert_eq!(board.turn(), Player::O);

    let impossible = format!("{}{}", "X".repeat(32), "O".repeat(20));
    assert_eq!(
        impossible.parse::<Board>(),
        Err(EngineError::InvalidPieceCounts { x: 32, o: 20 })
    );
}
