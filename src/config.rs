use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Viewport;

pub const DEFAULT_CONTAINER_ID: &str = "canvas-container";
pub const MOBILE_BREAKPOINT: u32 = 768;
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Viewport mode, resolved once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViewportProfile {
    /// Narrow viewport: fewer, smaller particles
    Reduced,
    Standard,
}

impl ViewportProfile {
    /// `width < breakpoint` is reduced, everything else standard
    pub fn resolve(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            ViewportProfile::Reduced
        } else {
            ViewportProfile::Standard
        }
    }
}

/// Renderer options derived from the viewport at construction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
    pub alpha: bool,
    pub antialias: bool,
}

impl RenderSettings {
    pub fn resolve(viewport: &Viewport, breakpoint: u32) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            pixel_ratio: viewport.device_pixel_ratio.min(MAX_PIXEL_RATIO),
            alpha: true,
            // Strictly wider than the breakpoint, unlike the particle profile
            antialias: viewport.width > breakpoint,
        }
    }
}

/// Tunable scene parameters; every field has a default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub container_id: String,
    pub breakpoint: u32,
    pub reduced_particle_count: usize,
    pub standard_particle_count: usize,
    pub reduced_point_size: f32,
    pub standard_point_size: f32,
    /// Edge length of the cube particles are scattered in
    pub particle_spread: f32,
    pub seed: Option<u64>,
    /// Routes on which the scene mounts
    pub routes: Vec<String>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            breakpoint: MOBILE_BREAKPOINT,
            reduced_particle_count: 500,
            standard_particle_count: 1200,
            reduced_point_size: 1.2,
            standard_point_size: 1.5,
            particle_spread: 120.0,
            seed: None,
            routes: vec!["/".to_string(), "/index.html".to_string()],
        }
    }
}

impl SceneConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file; missing fields fall back to defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene config: {:?}", path))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid scene config: {:?}", path))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn profile_for(&self, viewport: &Viewport) -> ViewportProfile {
        ViewportProfile::resolve(viewport.width, self.breakpoint)
    }

    pub fn particle_count(&self, profile: ViewportProfile) -> usize {
        match profile {
            ViewportProfile::Reduced => self.reduced_particle_count,
            ViewportProfile::Standard => self.standard_particle_count,
        }
    }

    pub fn point_size(&self, profile: ViewportProfile) -> f32 {
        match profile {
            ViewportProfile::Reduced => self.reduced_point_size,
            ViewportProfile::Standard => self.standard_point_size,
        }
    }

    /// Whether the scene should mount on the given page path
    pub fn mounts_on(&self, path: &str) -> bool {
        self.routes.iter().any(|route| route == path)
    }
}
