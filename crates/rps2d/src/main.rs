#![cfg_attr(
    all(target_os = "windows", not(debug_assertions), not(feature = "console")),
    windows_subsystem = "windows"
)]

use tracing::metadata::LevelFilter;

mod gui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();
    tracing::info!("Rock Paper Scissors 2D version {VERSION}");

    // Start gui on the main thread
    gui::run()?;
    Ok(())
}
