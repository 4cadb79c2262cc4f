pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod game;

pub use cli::Cli;
pub use config::{Difficulty, Settings, StrategyKind};
pub use console::{Command, Console};
pub use error::{AppError, AppResult};
pub use game::{GameEnd, Session};
