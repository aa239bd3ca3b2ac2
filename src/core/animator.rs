//! Per-tick procedural motion for the hero scene.
//!
//! Positions and the pulse scale are pure functions of the clock time. Mesh
//! rotations and particle heights accumulate a fixed amount every tick.

use glam::Vec3;
use serde::Serialize;

use crate::scene::{EntityId, Primitive, SceneGraph};
use crate::scenes::ParticleCloud;
use crate::types::Transform;

/// Amplitude of the orbital paths
pub const ORBIT_RADIUS: f64 = 5.0;

pub const PRIMARY_SPIN: Vec3 = Vec3::new(0.002, 0.003, 0.0);
pub const SECONDARY_SPIN: Vec3 = Vec3::new(-0.0015, -0.002, 0.0);
pub const PARTICLE_SPIN: Vec3 = Vec3::new(0.0003, 0.0008, 0.0);

pub const PULSE_AMPLITUDE: f64 = 0.08;
pub const DRIFT_AMPLITUDE: f64 = 0.02;

/// Entities the animator drives; any of them may be absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnimationTargets {
    pub primary: Option<EntityId>,
    pub secondary: Option<EntityId>,
    pub particles: Option<EntityId>,
}

/// Three-axis orbit of the primary mesh
pub fn primary_position(time: f64) -> Vec3 {
    let r = ORBIT_RADIUS;
    Vec3::new(
        ((time * 0.5).sin() * r) as f32,
        ((time * 0.3).sin() * r * 0.7) as f32,
        ((time * 0.4).cos() * r * 0.5) as f32,
    )
}

/// Uniform breathing scale of the primary mesh, within [0.92, 1.08]
pub fn primary_scale(time: f64) -> f32 {
    (1.0 + (time * 2.0).sin() * PULSE_AMPLITUDE) as f32
}

/// Counter-orbit of the secondary mesh
pub fn secondary_position(time: f64) -> Vec3 {
    let r = ORBIT_RADIUS;
    Vec3::new(
        (-(time * 0.4).sin() * r * 0.6) as f32,
        (-(time * 0.5).cos() * r * 0.5) as f32,
        ((time * 0.3).sin() * r * 0.4) as f32,
    )
}

/// Vertical nudge for the particle stored at `offset` in the flat xyz buffer
pub fn particle_drift(time: f64, offset: usize) -> f32 {
    ((time + offset as f64).sin() * DRIFT_AMPLITUDE) as f32
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameAnimator;

impl FrameAnimator {
    pub fn new() -> Self {
        Self
    }

    /// Apply one tick of motion at clock time `time`
    pub fn step(&self, time: f64, scene: &mut SceneGraph, targets: &AnimationTargets) {
        if let Some(transform) = mesh_transform(scene, targets.primary) {
            transform.rotation += PRIMARY_SPIN;
            transform.position = primary_position(time);
            transform.set_uniform_scale(primary_scale(time));
        } else {
            log::trace!("primary mesh missing, skipped");
        }

        if let Some(transform) = mesh_transform(scene, targets.secondary) {
            transform.rotation += SECONDARY_SPIN;
            transform.position = secondary_position(time);
        } else {
            log::trace!("secondary mesh missing, skipped");
        }

        if let Some(cloud) = particle_cloud(scene, targets.particles) {
            cloud.transform.rotation += PARTICLE_SPIN;
            drift_particles(cloud, time);
        } else {
            log::trace!("particle cloud missing, skipped");
        }
    }
}

fn mesh_transform(scene: &mut SceneGraph, id: Option<EntityId>) -> Option<&mut Transform> {
    match scene.primitive_mut(id?)? {
        Primitive::Mesh(mesh) => Some(&mut mesh.transform),
        _ => None,
    }
}

fn particle_cloud(scene: &mut SceneGraph, id: Option<EntityId>) -> Option<&mut ParticleCloud> {
    match scene.primitive_mut(id?)? {
        Primitive::Particles(cloud) => Some(cloud),
        _ => None,
    }
}

/// Heights accumulate without bound; nothing wraps them back.
fn drift_particles(cloud: &mut ParticleCloud, time: f64) {
    for (index, position) in cloud.positions.iter_mut().enumerate() {
        position[1] += particle_drift(time, index * 3);
    }
}
