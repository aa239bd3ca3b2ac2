// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::SceneConfig;
use crate::types::Viewport;

#[derive(Parser, Debug, Clone)]
#[command(name = "hero-scene")]
#[command(about = "Animated hero scene, headless or in a window", long_about = None)]
pub struct Cli {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Device pixel ratio reported by the host
    #[arg(long = "pixel-ratio", default_value_t = 1.0)]
    pub pixel_ratio: f32,

    /// Frames to run in headless mode
    #[arg(long, default_value_t = 600)]
    pub ticks: u64,

    /// Seed for particle placement (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON scene config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Page path the scene is mounted on
    #[arg(long, default_value = "/")]
    pub route: String,

    /// Open a desktop window instead of running headless
    #[arg(long, default_value = "false")]
    pub window: bool,

    /// Simulate a page without the mount container
    #[arg(long = "no-container", default_value = "false")]
    pub no_container: bool,
}

impl Cli {
    /// Config file values with command-line overrides applied
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::from_json_file(path)?,
            None => SceneConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        Ok(config)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height).with_pixel_ratio(self.pixel_ratio)
    }
}
