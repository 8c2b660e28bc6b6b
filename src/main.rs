//! Checkers GUI
//!
//! Two players share the mouse: hover over a piece to pick it up, click a
//! square to move it there.

use checkers::config::AppConfig;
use checkers::ui::CheckersApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("checkers=info")).init();

    let config = AppConfig::from_env();
    log::debug!("starting with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(move |cc| Ok(Box::new(CheckersApp::new(cc, config)))),
    )
}
