use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use lumen_renderer::{render, save_framebuffer, LogProgress};

mod cli;
mod scene;

use cli::Args;

/// Initialize the logger with the specified level
fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    info!("Lumen {}", env!("CARGO_PKG_VERSION"));

    let config = args.render_config();
    config.validate().context("Invalid render settings")?;

    let world = scene::demo_scene().context("Failed to build demo scene")?;
    let camera = scene::demo_camera(config.aspect_ratio()).context("Failed to build camera")?;

    let image = render(&camera, &world, &config, &LogProgress::default()).context("Render failed")?;

    save_framebuffer(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;

    Ok(())
}
