use glam::Vec3;
use serde::Serialize;

use crate::math::hex_to_rgb;

/// Position, Euler rotation (radians) and scale of a primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Shaded material for the wireframe meshes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhongMaterial {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub wireframe: bool,
    pub transparent: bool,
    pub opacity: f32,
    pub shininess: f32,
}

impl PhongMaterial {
    pub fn wireframe(color: u32, emissive: u32, emissive_intensity: f32, opacity: f32) -> Self {
        Self {
            color: hex_to_rgb(color),
            emissive: hex_to_rgb(emissive),
            emissive_intensity,
            wireframe: true,
            transparent: true,
            opacity,
            shininess: 30.0,
        }
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Blending {
    Normal,
    Additive,
}

/// Material for point sprites
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointsMaterial {
    pub size: f32,
    pub transparent: bool,
    pub opacity: f32,
    pub blending: Blending,
    pub vertex_colors: bool,
    pub size_attenuation: bool,
}

/// Exponential-squared fog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fog {
    pub color: [f32; 3],
    pub density: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    Point {
        color: [f32; 3],
        intensity: f32,
        position: Vec3,
        range: f32,
    },
}

impl Light {
    pub fn ambient(color: u32, intensity: f32) -> Self {
        Light::Ambient {
            color: hex_to_rgb(color),
            intensity,
        }
    }

    pub fn point(color: u32, intensity: f32, range: f32, position: Vec3) -> Self {
        Light::Point {
            color: hex_to_rgb(color),
            intensity,
            position,
            range,
        }
    }

    pub fn intensity(&self) -> f32 {
        match self {
            Light::Ambient { intensity, .. } | Light::Point { intensity, .. } => *intensity,
        }
    }
}

/// Host viewport size in CSS pixels plus the device pixel ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio: 1.0,
        }
    }

    pub fn with_pixel_ratio(mut self, ratio: f32) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// Width over height; `None` when either side is zero
    pub fn aspect(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}
