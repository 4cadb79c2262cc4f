//! # Engine Constants - Cube Dimensions, Table Sizes & Score Scale
//!
//! ## Cube Geometry
//!
//! The board is a fixed 4×4×4 cube. Cells are numbered `z * 16 + y * 4 + x`, so
//! cell 0 is the corner `(0,0,0)` and cell 63 the opposite corner `(3,3,3)`. With
//! exactly 64 cells, one `u64` holds every occupancy set the engine needs.
//!
//! A cube of side 4 has exactly 76 winning lines:
//! - 48 straight lines (16 per axis)
//! - 24 face diagonals (2 per axis-aligned slab, 4 slabs per axis)
//! - 4 space diagonals
//!
//! and 18 planes: 12 axis-aligned slabs plus 6 diagonal slabs.
//!
//! ## Score Scale
//!
//! Scores are signed and always seen from X's side: positive favours X, negative
//! favours O. `WIN_SCORE` is larger than any sum of heuristic terms the
//! evaluation can produce, so a reachable win always beats positional play.

/// Side length of the cube
pub const N: u8 = 4;

/// Cells in one layer
pub const N_SQUARED: u8 = N * N;

/// Cells in the cube
pub const N_CUBED: u8 = N * N * N;

/// Number of winning lines in a 4×4×4 cube
pub const LINE_COUNT: usize = 76;

/// Number of planar cross-sections tracked by the evaluation
pub const PLANE_COUNT: usize = 18;

/// Terminal score for an X win (negated for an O win)
pub const WIN_SCORE: i32 = 500_000_000;

/// Bound used as the initial alpha/beta window
pub const INFINITY: i32 = i32::MAX;

/// Below this many occupied cells the optional early-game noise is applied
pub const EARLY_GAME_CELLS: u32 = 10;

/// Largest absolute noise added to an early-game evaluation
pub const NOISE_SPREAD: i32 = 2;

/// Deepest search the engine accepts (the game cannot last longer)
pub const MAX_DEPTH: u32 = N_CUBED as u32;

/// Inner 2×2×2 core of the cube
pub const CENTER_CELLS: [(u8, u8, u8); 8] = [
    (1, 1, 1),
    (1, 1, 2),
    (1, 2, 1),
    (1, 2, 2),
    (2, 1, 1),
    (2, 1, 2),
    (2, 2, 1),
    (2, 2, 2),
];

/// Face-centre cells touching the inner core along the X and Y axes
pub const NEAR_CENTER_CELLS: [(u8, u8, u8); 16] = [
    (0, 1, 1),
    (0, 1, 2),
    (0, 2, 1),
    (0, 2, 2),
    (3, 1, 1),
    (3, 1, 2),
    (3, 2, 1),
    (3, 2, 2),
    (1, 0, 1),
    (1, 0, 2),
    (1, 3, 1),
    (1, 3, 2),
    (2, 0, 1),
    (2, 0, 2),
    (2, 3, 1),
    (2, 3, 2),
];

/// Weight of a piece on a [`CENTER_CELLS`] cell in center control
pub const CENTER_WEIGHT: i32 = 3;

/// Weight of a piece on a [`NEAR_CENTER_CELLS`] cell in center control
pub const NEAR_CENTER_WEIGHT: i32 = 1;
