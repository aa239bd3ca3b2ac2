use super::lifecycle::{LifecycleState, SceneController};
use crate::error::Result;
use crate::traits::{FrameScheduler, SceneRenderer, ViewportHost};

/// One observation of the mount container against the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
    pub intersection_ratio: f32,
}

impl IntersectionEntry {
    pub fn visible() -> Self {
        Self {
            is_intersecting: true,
            intersection_ratio: 1.0,
        }
    }

    pub fn hidden() -> Self {
        Self {
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

/// Builds the scene the first time its container scrolls into view
#[derive(Debug, Clone, Copy, Default)]
pub struct VisibilityGate {
    activations: u32,
    ignored: u32,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a batch of observer entries
    ///
    /// Returns `Ok(true)` when this batch constructed the scene. A failed
    /// construction propagates and leaves the gate open for later entries.
    pub fn observe<R, S>(
        &mut self,
        entries: &[IntersectionEntry],
        controller: &mut SceneController<R, S>,
        host: &mut dyn ViewportHost,
    ) -> Result<bool>
    where
        R: SceneRenderer,
        S: FrameScheduler,
    {
        let mut constructed = false;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if controller.state() != LifecycleState::Uninitialized {
                self.ignored += 1;
                continue;
            }
            controller.construct(host)?;
            self.activations += 1;
            constructed = true;
        }
        Ok(constructed)
    }

    /// Times this gate constructed a scene (0 or 1)
    pub fn activations(&self) -> u32 {
        self.activations
    }

    /// Intersections that arrived after construction
    pub fn ignored(&self) -> u32 {
        self.ignored
    }
}
