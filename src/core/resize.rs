use crate::camera::PerspectiveCamera;
use crate::traits::SceneRenderer;
use crate::types::Viewport;

/// Keeps camera aspect and renderer size in step with the viewport
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeReactor {
    last_size: Option<(u32, u32)>,
}

impl ResizeReactor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the size the renderer was configured with
    pub fn with_initial(viewport: &Viewport) -> Self {
        Self {
            last_size: Some((viewport.width, viewport.height)),
        }
    }

    /// Apply a resize event; returns whether camera or renderer changed
    ///
    /// Zero-area viewports are ignored. Repeating an event is a no-op.
    pub fn apply<R: SceneRenderer + ?Sized>(
        &mut self,
        viewport: &Viewport,
        camera: &mut PerspectiveCamera,
        renderer: &mut R,
    ) -> bool {
        let Some(aspect) = viewport.aspect() else {
            log::debug!(
                "ignoring zero-area viewport {}x{}",
                viewport.width,
                viewport.height
            );
            return false;
        };

        let aspect_changed = camera.set_aspect(aspect);

        let size = (viewport.width, viewport.height);
        let size_changed = self.last_size != Some(size);
        if size_changed {
            renderer.set_size(size.0, size.1);
            self.last_size = Some(size);
        }

        if aspect_changed || size_changed {
            log::debug!("resized to {}x{} (aspect {:.3})", size.0, size.1, aspect);
        }
        aspect_changed || size_changed
    }
}
