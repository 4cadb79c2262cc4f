//! Error types for the console application
//!
//! Covers settings persistence, console I/O, invalid settings values and
//! engine errors surfacing from a search or a starting layout.

use qubic_engine::EngineError;
use thiserror::Error;

/// Errors that can occur outside the engine
#[derive(Error, Debug)]
pub enum AppError {
    /// Settings file or console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Settings value outside its allowed range
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Error reported by the engine
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
