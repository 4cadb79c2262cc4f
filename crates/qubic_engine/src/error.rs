//! Error types for the engine
//!
//! Covers malformed input arriving from outside the core (board layouts,
//! position lists, coordinates, search depths) and moves a human picked on an
//! occupied cell. Programming errors inside the core are assertions, not variants.

use thiserror::Error;

/// Errors that can occur in the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Cell index out of range
    #[error("Invalid cell index: {index} (must be 0-63)")]
    InvalidCell { index: i64 },

    /// Coordinate component out of range
    #[error("Invalid coordinate: ({x}, {y}, {z}) (each component must be 0-3)")]
    InvalidCoordinate { x: i64, y: i64, z: i64 },

    /// Move on a cell that already holds a piece
    #[error("Cell {index} is not empty")]
    CellOccupied { index: u8 },

    /// Unknown character in a board layout
    #[error("Invalid marker '{marker}' at offset {offset} in board layout")]
    InvalidMarker { marker: char, offset: usize },

    /// Board layout describes more than 64 cells
    #[error("Board layout has {count} cells (maximum 64)")]
    TooManyCells { count: usize },

    /// Piece counts that no sequence of alternating moves can produce
    #[error("Impossible piece counts: {x} X and {o} O")]
    InvalidPieceCounts { x: u32, o: u32 },

    /// Both players claim the same cell
    #[error("Occupancy masks overlap at {overlap:#018x}")]
    OverlappingMasks { overlap: u64 },

    /// Unparseable position list
    #[error("Invalid position list: {input}")]
    InvalidPositionList { input: String },

    /// Search depth outside 1..=64
    #[error("Invalid search depth: {depth} (must be 1-64)")]
    InvalidDepth { depth: u32 },

    /// Search requested on a finished game
    #[error("Game is already over: no moves to search")]
    GameOver,
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
