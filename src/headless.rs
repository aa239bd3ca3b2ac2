use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{RenderSettings, SceneConfig, ViewportProfile};
use crate::core::{IntersectionEntry, LifecycleState, ManualScheduler, SceneController, VisibilityGate};
use crate::renderer::{FrameRecorder, FrameSummary};
use crate::traits::{ListenerId, ViewportHost};
use crate::types::Viewport;
use crate::typewriter::Typewriter;

/// Simulated display refresh for headless runs
pub const FRAME_SECONDS: f32 = 1.0 / 60.0;

/// In-memory page: a fixed viewport and an optional mount container
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    viewport: Viewport,
    container_id: Option<String>,
    listeners: Vec<ListenerId>,
    next_listener: u64,
}

impl HeadlessHost {
    pub fn new(viewport: Viewport, container_id: impl Into<String>) -> Self {
        Self {
            viewport,
            container_id: Some(container_id.into()),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// A page that never rendered the mount container
    pub fn without_container(viewport: Viewport) -> Self {
        Self {
            viewport,
            container_id: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ViewportHost for HeadlessHost {
    fn container_exists(&self, id: &str) -> bool {
        self.container_id.as_deref() == Some(id)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn subscribe_resize(&mut self) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push(id);
        id
    }

    fn unsubscribe_resize(&mut self, id: ListenerId) {
        self.listeners.retain(|&l| l != id);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub route: String,
    pub mounted: bool,
    pub profile: Option<ViewportProfile>,
    pub render_settings: Option<RenderSettings>,
    pub particle_count: usize,
    pub light_count: usize,
    pub ticks: u64,
    pub time: f64,
    pub last_frame: Option<FrameSummary>,
    pub frames_drawn: u64,
    /// Pending frames cancelled by teardown
    pub frames_cancelled: u64,
    pub final_state: LifecycleState,
    pub tagline: String,
}

/// Mount on `route`, run `ticks` frames, then tear down
pub fn run_headless(
    config: SceneConfig,
    viewport: Viewport,
    route: &str,
    ticks: u64,
    with_container: bool,
) -> Result<RunReport> {
    let mut host = if with_container {
        HeadlessHost::new(viewport, config.container_id.clone())
    } else {
        HeadlessHost::without_container(viewport)
    };

    let mounted = config.mounts_on(route);
    let mut controller = SceneController::new(config, FrameRecorder::new(), ManualScheduler::new());
    let mut typewriter = Typewriter::hero();

    if !mounted {
        log::info!("route {} does not mount the hero scene", route);
        return Ok(RunReport {
            route: route.to_string(),
            mounted,
            profile: None,
            render_settings: None,
            particle_count: 0,
            light_count: 0,
            ticks: 0,
            time: 0.0,
            last_frame: None,
            frames_drawn: 0,
            frames_cancelled: 0,
            final_state: controller.state(),
            tagline: String::new(),
        });
    }

    VisibilityGate::new()
        .observe(&[IntersectionEntry::visible()], &mut controller, &mut host)
        .context("Failed to construct hero scene")?;

    let (particle_count, light_count) = controller
        .scene()
        .map(|s| (s.particles().map_or(0, |p| p.len()), s.lights().count()))
        .unwrap_or_default();
    let profile = controller.profile();
    let render_settings = controller.render_settings().copied();

    for _ in 0..ticks {
        typewriter.advance(FRAME_SECONDS);
        if !controller.step() {
            break;
        }
    }

    let time = controller.time().unwrap_or_default();
    let last_frame = controller.renderer().last_frame().cloned();
    controller.dispose(&mut host);

    Ok(RunReport {
        route: route.to_string(),
        mounted,
        profile,
        render_settings,
        particle_count,
        light_count,
        ticks: controller.ticks(),
        time,
        last_frame,
        frames_drawn: controller.renderer().frames(),
        frames_cancelled: controller.scheduler().cancelled(),
        final_state: controller.state(),
        tagline: typewriter.visible().to_string(),
    })
}
