mod geometry;
mod lighting;
mod particles;

pub use geometry::{
    primary_mesh, secondary_mesh, Mesh, MeshRole, Polyhedron, PolyhedronKind, PRIMARY_RADIUS,
    SECONDARY_RADIUS,
};
pub use lighting::lighting_rig;
pub use particles::{pick_color, ParticleCloud, GOLD_PARTICLE, GOLD_THRESHOLD, WHITE_PARTICLE};

use rand::Rng;

use crate::config::{SceneConfig, ViewportProfile};
use crate::core::AnimationTargets;
use crate::math::{hex_to_rgb, BLACK};
use crate::scene::{Primitive, SceneGraph};
use crate::types::Fog;

pub const FOG_DENSITY: f32 = 0.0008;

/// Populate a fresh scene graph with the hero content
///
/// Returns the graph together with the ids the animator drives.
pub fn create_hero_scene<R: Rng>(
    config: &SceneConfig,
    profile: ViewportProfile,
    rng: &mut R,
) -> (SceneGraph, AnimationTargets) {
    let mut scene = SceneGraph::new();
    scene.set_fog(Fog {
        color: hex_to_rgb(BLACK),
        density: FOG_DENSITY,
    });

    let primary = scene.add_primitive(Primitive::Mesh(primary_mesh()));
    let secondary = scene.add_primitive(Primitive::Mesh(secondary_mesh()));

    let cloud = ParticleCloud::generate(
        config.particle_count(profile),
        config.particle_spread,
        config.point_size(profile),
        rng,
    );
    let particles = scene.add_primitive(Primitive::Particles(cloud));

    for light in lighting_rig() {
        scene.add_light(light);
    }

    let targets = AnimationTargets {
        primary: Some(primary),
        secondary: Some(secondary),
        particles: Some(particles),
    };
    (scene, targets)
}
