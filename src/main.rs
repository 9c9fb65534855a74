//! Tic-Tac-Toe GUI
//!
//! Play against the minimax computer or against a friend on the same mouse.

use tictactoe::config::AppConfig;
use tictactoe::ui::TicTacToeApp;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    let path = AppConfig::resolve_path();

    // Temporary subscriber until the configured filter is known
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    let loaded = tracing::subscriber::with_default(bootstrap, || AppConfig::load_or_default(&path));

    let filter_directive = match &loaded {
        Ok(config) => config.log.filter.clone(),
        Err(_) => AppConfig::default().log.filter,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = loaded.unwrap_or_else(|e| {
        error!(path = %path.display(), "invalid config, using defaults: {e}");
        AppConfig::default()
    });
    info!(path = %path.display(), computer = %config.game.computer_mark(), "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    let game = config.game;
    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, game)))),
    )
}
