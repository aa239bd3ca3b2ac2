use glam::Vec3;

use crate::math::{BRIGHT_GOLD, GOLD, WHITE};
use crate::types::Light;

/// Fixed four-light rig: warm ambient fill, gold key, white accent, gold rim
pub fn lighting_rig() -> Vec<Light> {
    vec![
        Light::ambient(BRIGHT_GOLD, 0.3),
        Light::point(GOLD, 1.5, 150.0, Vec3::new(20.0, 20.0, 20.0)),
        Light::point(WHITE, 1.2, 100.0, Vec3::new(-15.0, -15.0, 15.0)),
        Light::point(BRIGHT_GOLD, 1.0, 120.0, Vec3::new(0.0, 30.0, -30.0)),
    ]
}
