use crate::camera::PerspectiveCamera;
use crate::config::RenderSettings;
use crate::scene::SceneGraph;

/// Drawing collaborator - turns a scene and camera into pixels
pub trait SceneRenderer {
    /// Apply construction-time options (size, pixel ratio, antialias, alpha)
    fn configure(&mut self, settings: &RenderSettings);

    /// Resize the output surface in CSS pixels
    fn set_size(&mut self, width: u32, height: u32);

    /// Draw one frame
    fn render(&mut self, scene: &SceneGraph, camera: &PerspectiveCamera);

    /// Release graphics resources; no further calls follow
    fn dispose(&mut self);
}
