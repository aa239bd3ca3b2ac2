use glam::Vec3;
use serde::Serialize;

use crate::camera::PerspectiveCamera;
use crate::config::RenderSettings;
use crate::scene::SceneGraph;
use crate::scenes::MeshRole;
use crate::traits::SceneRenderer;
use crate::types::Transform;

/// Snapshot of the last drawn frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSummary {
    pub frame: u64,
    pub aspect: f32,
    pub primary: Option<Transform>,
    pub secondary: Option<Transform>,
    pub particle_count: usize,
    pub particle_rotation: Option<Vec3>,
    pub mean_particle_height: f32,
    pub light_count: usize,
    pub total_light_intensity: f32,
    pub fog_density: Option<f32>,
    /// Bytes of vertex data the frame would upload
    pub upload_bytes: usize,
}

impl FrameSummary {
    fn capture(frame: u64, scene: &SceneGraph, camera: &PerspectiveCamera) -> Self {
        let cloud = scene.particles();
        let (particle_count, mean_particle_height, upload_bytes) = match cloud {
            Some(cloud) if !cloud.is_empty() => {
                let sum: f32 = cloud.positions.iter().map(|p| p[1]).sum();
                let bytes = cloud.position_bytes().len() + cloud.color_bytes().len();
                (cloud.len(), sum / cloud.len() as f32, bytes)
            }
            _ => (0, 0.0, 0),
        };

        Self {
            frame,
            aspect: camera.aspect,
            primary: scene.mesh(MeshRole::Primary).map(|m| m.transform),
            secondary: scene.mesh(MeshRole::Secondary).map(|m| m.transform),
            particle_count,
            particle_rotation: cloud.map(|c| c.transform.rotation),
            mean_particle_height,
            light_count: scene.lights().count(),
            total_light_intensity: scene.lights().map(|l| l.intensity()).sum(),
            fog_density: scene.fog().map(|f| f.density),
            upload_bytes,
        }
    }
}

/// Headless `SceneRenderer`: counts draws and keeps the last frame's summary
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    settings: Option<RenderSettings>,
    size: (u32, u32),
    frames: u64,
    resizes: u32,
    disposed: bool,
    last: Option<FrameSummary>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings(&self) -> Option<&RenderSettings> {
        self.settings.as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn resizes(&self) -> u32 {
        self.resizes
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn last_frame(&self) -> Option<&FrameSummary> {
        self.last.as_ref()
    }
}

impl SceneRenderer for FrameRecorder {
    fn configure(&mut self, settings: &RenderSettings) {
        self.settings = Some(*settings);
        self.size = (settings.width, settings.height);
        self.disposed = false;
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.resizes += 1;
    }

    fn render(&mut self, scene: &SceneGraph, camera: &PerspectiveCamera) {
        if self.disposed {
            log::warn!("render called on a disposed renderer");
            return;
        }
        self.frames += 1;
        self.last = Some(FrameSummary::capture(self.frames, scene, camera));
    }

    fn dispose(&mut self) {
        self.disposed = true;
        self.last = None;
    }
}
