//! Tic-tac-toe and connect-four against a minimax opponent
//!
//! A graphical interface for playing either game against the computer.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use duel::config::{AppConfig, GameKind};
use duel::ui::DuelApp;

#[derive(Debug, Parser)]
#[command(version, about = "Play tic-tac-toe or connect-four against the computer")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(long, default_value = "duel.toml")]
    config: PathBuf,

    /// Game to open, overriding `ui.start_game`
    #[arg(long, value_enum)]
    game: Option<GameKind>,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("duel=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load_or_default(&args.config).unwrap_or_else(|err| {
        warn!(%err, path = %args.config.display(), "invalid config, using defaults");
        AppConfig::default()
    });
    if let Some(game) = args.game {
        config.ui.start_game = game;
    }
    info!(game = ?config.ui.start_game, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Duel - You vs Computer"),
        ..Default::default()
    };

    eframe::run_native(
        "Duel",
        options,
        Box::new(move |cc| Ok(Box::new(DuelApp::new(cc, &config)))),
    )
}
