//! Engine for 4×4×4 tic-tac-toe
//!
//! Positions are pairs of 64-bit occupancy masks, one per player. The static
//! geometry of the cube (76 winning lines, 18 planes) is built once and passed
//! by reference into evaluation and search.
//!
//! ## Module Organization
//!
//! - `bitset` - 64-bit cell sets
//! - `coordinate` - cell index to `(x, y, z)` mapping
//! - `geometry` - lines, planes and lookup tables
//! - `board` - immutable positions and the layout format
//! - `evaluation` - terminal detection and heuristic scoring
//! - `search` - minimax with alpha-beta pruning
//!
//! ```
//! use qubic_engine::{best_move, Board, Geometry};
//!
//! let geometry = Geometry::shared();
//! let board: Board = "XXX. OOO.".parse().unwrap();
//! assert_eq!(best_move(&board, 2, geometry).unwrap(), 3);
//! ```

pub mod bitset;
pub mod board;
pub mod constants;
pub mod coordinate;
pub mod error;
pub mod evaluation;
pub mod geometry;
pub mod search;
pub mod types;

pub use bitset::BitSet;
pub use board::Board;
pub use coordinate::{Axis, Coordinate};
pub use error::{EngineError, EngineResult};
pub use evaluation::{Evaluator, Strategy};
pub use geometry::{Geometry, Line, Plane};
pub use search::{best_move, SearchConfig, SearchResult, SearchStats, Searcher};
pub use types::{Outcome, Player, Score};
