use anyhow::{Context, Result};
use clap::Parser;

use hero_scene::cli::Cli;
use hero_scene::headless::run_headless;
use hero_scene::window::run_desktop;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.scene_config()?;

    if cli.window {
        let ticks = run_desktop(config, cli.width, cli.height)?;
        log::info!("window closed after {} ticks", ticks);
        return Ok(());
    }

    let report = run_headless(config, cli.viewport(), &cli.route, cli.ticks, !cli.no_container)?;
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize run report")?;
    println!("{}", json);

    Ok(())
}
