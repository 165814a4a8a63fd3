use eframe::{run_native, NativeOptions};
use rps2d_lib::{INITIAL_WINDOW_SIZE, WINDOW_TITLE};
use thiserror::Error;

use self::app::RpsApp;

mod app;
mod card;
mod renderer;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("Failed to start the display: {0}")]
    Platform(String),
}

/// Entry point for the gui. Intended to run on the main thread.
/// Doesn't return until the window is closed.
pub fn run() -> Result<(), GuiError> {
    let window_options = NativeOptions {
        initial_window_size: Some(INITIAL_WINDOW_SIZE),
        resizable: true,
        ..Default::default()
    };
    tracing::info!(
        "Opening a {}x{} window",
        INITIAL_WINDOW_SIZE.x,
        INITIAL_WINDOW_SIZE.y
    );

    run_native(
        WINDOW_TITLE,
        window_options,
        Box::new(|_cc| Box::new(RpsApp::new())),
    )
    .map_err(|e| GuiError::Platform(e.to_string()))
}
