//! Command-line interface
//!
//! Flags override the persisted [`Settings`]. Positional arguments are joined
//! into one starting board layout, so `qubic XO.. .... X` and
//! `qubic "XO.. .... X"` describe the same position.

use crate::config::{Difficulty, Settings, StrategyKind};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "qubic", about = "4x4x4 tic-tac-toe against a minimax opponent", version)]
pub struct Cli {
    /// Search depth in plies (overrides --difficulty)
    #[arg(long)]
    pub plies: Option<u32>,

    /// Search depth preset
    #[arg(long, value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Computer plays X and moves first
    #[arg(long, conflicts_with = "second")]
    pub first: bool,

    /// Computer plays O and moves second
    #[arg(long)]
    pub second: bool,

    /// Plain minimax without pruning
    #[arg(long, conflicts_with = "alpha_beta")]
    pub minimax: bool,

    /// Minimax with alpha-beta pruning
    #[arg(long = "alpha-beta")]
    pub alpha_beta: bool,

    /// Order interior moves by static evaluation
    #[arg(long)]
    pub ordering: bool,

    /// Print search statistics after every computer move
    #[arg(long)]
    pub stats: bool,

    /// Log at info level
    #[arg(long)]
    pub verbose: bool,

    /// Log at trace level, including every root move score
    #[arg(long)]
    pub trace: bool,

    /// Evaluation strategy
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Add early-game evaluation noise
    #[arg(long)]
    pub noise: bool,

    /// Seed for the noise source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    pub save_settings: bool,

    /// Print every line and plane with masks in BASE (`--dump-geometry=BASE`), then exit
    #[arg(
        long,
        value_name = "BASE",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "16",
        value_parser = clap::value_parser!(u32).range(2..=36)
    )]
    pub dump_geometry: Option<u32>,

    /// Starting board layout: X, O or . per cell; spaces, _ and | are ignored
    #[arg(value_name = "BOARD")]
    pub board: Vec<String>,
}

impl Cli {
    /// Starting layout, `None` when no positional arguments were given
    pub fn layout(&self) -> Option<String> {
        if self.board.is_empty() {
            None
        } else {
            Some(self.board.concat())
        }
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.trace {
            "trace"
        } else if self.verbose {
            "info"
        } else {
            "warn"
        }
    }

    /// Override `settings` with every flag given on the command line
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(difficulty) = self.difficulty {
            settings.plies = difficulty.plies();
        }
        if let Some(plies) = self.plies {
            settings.plies = plies;
        }
        if self.first {
            settings.computer_first = true;
        }
        if self.second {
            settings.computer_first = false;
        }
        if self.minimax {
            settings.alpha_beta = false;
        }
        if self.alpha_beta {
            settings.alpha_beta = true;
        }
        if self.ordering {
            settings.ordering = true;
        }
        if self.stats {
            settings.statistics = true;
        }
        if let Some(strategy) = self.strategy {
            settings.strategy = strategy;
        }
        if self.noise {
            settings.noise = true;
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn try_parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("qubic").chain(args.iter().copied()))
    }

    fn parse(args: &[&str]) -> Cli {
        try_parse(args).expect("arguments should parse")
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_settings() {
        let mut settings = Settings::default();
        parse(&["--plies", "5", "--first", "--minimax", "--ordering"]).apply_to(&mut settings);
        parse(&["--strategy", "clustered"]).apply_to(&mut settings);

        assert_eq!(settings.plies, 5);
        assert!(settings.computer_first);
        assert!(!settings.alpha_beta);
        assert!(settings.ordering);
        assert_eq!(settings.strategy, StrategyKind::Clustered);
    }

    #[test]
    fn test_plies_beats_difficulty() {
        let mut settings = Settings::default();
        parse(&["--difficulty", "hard"]).apply_to(&mut settings);
        assert_eq!(settings.plies, 4);

        parse(&["--difficulty", "easy", "--plies", "6"]).apply_to(&mut settings);
        assert_eq!(settings.plies, 6);
    }

    #[test]
    fn test_unset_flags_keep_settings() {
        let mut settings = Settings {
            computer_first: true,
            alpha_beta: false,
            ..Settings::default()
        };
        parse(&[]).apply_to(&mut settings);
        assert!(settings.computer_first);
        assert!(!settings.alpha_beta);
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        assert!(try_parse(&["--first", "--second"]).is_err());
        assert!(try_parse(&["--minimax", "--alpha-beta"]).is_err());
    }

    #[test]
    fn test_board_layout_is_concatenated() {
        let cli = parse(&["XO..", "....", "X"]);
        assert_eq!(cli.layout().as_deref(), Some("XO......X"));
        assert_eq!(parse(&[]).layout(), None);
    }

    #[test]
    fn test_dump_geometry_base() {
        assert_eq!(parse(&["--dump-geometry"]).dump_geometry, Some(16));
        assert_eq!(parse(&["--dump-geometry=2"]).dump_geometry, Some(2));
        assert!(try_parse(&["--dump-geometry=40"]).is_err());

        let cli = parse(&["--dump-geometry", "XXX."]);
        assert_eq!(cli.dump_geometry, Some(16));
        let layout = cli.layout();
        assert_eq!(layout.as_deref(), Some("XXX."), "not taken as a base");
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(parse(&[]).log_filter(), "warn");
        assert_eq!(parse(&["--verbose"]).log_filter(), "info");
        assert_eq!(parse(&["--verbose", "--trace"]).log_filter(), "trace");
    }
}
