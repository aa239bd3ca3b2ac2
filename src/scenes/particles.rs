use rand::Rng;
use serde::Serialize;

use crate::types::{Blending, PointsMaterial, Transform};

pub const GOLD_PARTICLE: [f32; 3] = [0.83, 0.69, 0.22];
pub const WHITE_PARTICLE: [f32; 3] = [1.0, 1.0, 1.0];

/// Draws above this threshold pick gold (~70%), the rest white
pub const GOLD_THRESHOLD: f32 = 0.3;

/// Fixed-size cloud of colored points
///
/// Positions and colors are parallel arrays of `count` entries each.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleCloud {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
    pub material: PointsMaterial,
    pub transform: Transform,
}

impl ParticleCloud {
    /// Scatter `count` points in an axis-aligned cube of edge `spread`
    ///
    /// Each axis is sampled independently, so the cloud fills a cube and is
    /// denser along the corners than a true sphere would be.
    pub fn generate<R: Rng>(count: usize, spread: f32, point_size: f32, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            positions.push([
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            ]);
            colors.push(pick_color(rng.gen::<f32>()));
        }

        Self {
            positions,
            colors,
            material: PointsMaterial {
                size: point_size,
                transparent: true,
                opacity: 0.6,
                blending: Blending::Additive,
                vertex_colors: true,
                size_attenuation: true,
            },
            transform: Transform::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Raw xyz buffer for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.positions.as_slice())
    }

    /// Raw rgb buffer for GPU upload
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.colors.as_slice())
    }

    /// Share of particles carrying the gold color
    pub fn gold_fraction(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let gold = self.colors.iter().filter(|&&c| c == GOLD_PARTICLE).count();
        gold as f32 / self.len() as f32
    }
}

pub fn pick_color(mix: f32) -> [f32; 3] {
    if mix > GOLD_THRESHOLD {
        GOLD_PARTICLE
    } else {
        WHITE_PARTICLE
    }
}
