//! Game settings and their persistence
//!
//! [`Settings`] collects everything that shapes a game: search depth, which
//! side the computer plays, pruning and ordering switches, the evaluation
//! strategy and the noise source. Settings are stored as JSON in
//! `settings.json` under the platform configuration directory and are
//! overridden by command-line flags.
//!
//! # Error Handling
//!
//! Loading never fails: a missing, unreadable or malformed file is logged and
//! replaced by defaults. Saving reports its errors to the caller.
//!
//! # Difficulty Presets
//!
//! | Difficulty | Plies |
//! |------------|-------|
//! | Easy       | 2     |
//! | Medium     | 3     |
//! | Hard       | 4     |

use crate::error::{AppError, AppResult};
use clap::ValueEnum;
use directories::ProjectDirs;
use qubic_engine::constants::MAX_DEPTH;
use qubic_engine::{SearchConfig, Strategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Search depth presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Two plies: sees its own wins and the opponent's immediate threats
    Easy,
    /// Three plies
    Medium,
    /// Four plies: noticeably slower in the opening
    Hard,
}

impl Difficulty {
    pub fn plies(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// Evaluation strategy as written in settings and on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Standard,
    Clustered,
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Standard => Strategy::Standard,
            StrategyKind::Clustered => Strategy::Clustered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Search depth in plies
    pub plies: u32,
    /// Computer plays X and moves first
    pub computer_first: bool,
    pub alpha_beta: bool,
    pub ordering: bool,
    /// Print search statistics after every computer move
    pub statistics: bool,
    pub strategy: StrategyKind,
    /// Early-game evaluation noise
    pub noise: bool,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plies: Difficulty::Medium.plies(),
            computer_first: false,
            alpha_beta: true,
            ordering: false,
            statistics: false,
            strategy: StrategyKind::Standard,
            noise: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Reject values the engine cannot search with
    pub fn validate(&self) -> AppResult<()> {
        if self.plies == 0 || self.plies > MAX_DEPTH {
            return Err(AppError::InvalidSettings {
                message: format!("plies must be in 1..={MAX_DEPTH}, got {}", self.plies),
            });
        }
        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.plies,
            alpha_beta: self.alpha_beta,
            ordering: self.ordering,
            strategy: self.strategy.into(),
            noise: self.noise,
            seed: self.seed,
        }
    }
}

/// Path of `settings.json` in the user's configuration directory
///
/// Falls back to `settings.json` in the working directory if the system
/// config dir cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "Qubic") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`
pub fn read_settings(path: &Path) -> AppResult<Settings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load settings from `path`, using defaults when that fails
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file at {path:?}, using defaults");
        return Settings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Write settings to `path`, creating its directory if needed
pub fn save_settings(settings: &Settings, path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.plies, 3);
        assert!(settings.alpha_beta, "pruning is on by default");
        assert!(!settings.noise, "noise is off by default");
    }

    #[test]
    fn test_zero_plies_is_rejected() {
        let settings = Settings {
            plies: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(AppError::InvalidSettings { .. })
        ));

        let too_deep = Settings {
            plies: 65,
            ..Settings::default()
        };
        assert!(too_deep.validate().is_err());
    }

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.plies(), 2);
        assert_eq!(Difficulty::Medium.plies(), 3);
        assert_eq!(Difficulty::Hard.plies(), 4);
    }

    #[test]
    fn test_search_config_mirrors_settings() {
        let settings = Settings {
            plies: 5,
            alpha_beta: false,
            ordering: true,
            strategy: StrategyKind::Clustered,
            noise: true,
            seed: Some(9),
            ..Settings::default()
        };
        let config = settings.search_config();
        assert_eq!(config.depth, 5);
        assert!(!config.alpha_beta);
        assert!(config.ordering);
        assert_eq!(config.strategy, Strategy::Clustered);
        assert!(config.noise);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_save_and_load_settings() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("nested").join(SETTINGS_FILENAME);
        let settings = Settings {
            plies: 4,
            computer_first: true,
            strategy: StrategyKind::Clustered,
            ..Settings::default()
        };

        save_settings(&settings, &path).expect("save settings");
        assert_eq!(load_settings(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, r#"{ "plies": 2, "strategy": "clustered" }"#).expect("write file");

        let settings = load_settings(&path);
        assert_eq!(settings.plies, 2);
        assert_eq!(settings.strategy, StrategyKind::Clustered);
        assert!(settings.alpha_beta);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, "not json").expect("write file");

        assert!(matches!(
            read_settings(&path),
            Err(AppError::SettingsSerialization(_))
        ));
        assert_eq!(load_settings(&path), Settings::default());
        assert_eq!(
            load_settings(&dir.path().join("missing.json")),
            Settings::default()
        );
    }
}
