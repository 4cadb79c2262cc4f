use anyhow::Context;
use clap::Parser;
use qubic::config::{load_settings, save_settings, settings_path};
use qubic::console::render_geometry;
use qubic::{Cli, Console, Session};
use qubic_engine::{Board, Geometry};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_filter());

    let geometry = Geometry::shared();

    if let Some(base) = cli.dump_geometry {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", render_geometry(geometry, base))?;
        return Ok(());
    }

    let path = cli.config.clone().unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);
    cli.apply_to(&mut settings);
    settings.validate()?;

    if cli.save_settings {
        save_settings(&settings, &path)
            .with_context(|| format!("failed to save settings to {}", path.display()))?;
    }

    let start = match cli.layout() {
        Some(layout) => layout
            .parse::<Board>()
            .with_context(|| format!("invalid starting board: {layout}"))?,
        None => Board::new(),
    };
    info!("[GAME] Starting from {}", start);

    let mut session = Session::new(geometry, &settings, start);
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    session.run(&mut console)?;
    Ok(())
}

/// Install the log subscriber on stderr; `RUST_LOG` overrides `default_filter`
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
