use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::SceneConfig;
use crate::core::{FixedInterval, IntersectionEntry, ManualScheduler, SceneController, VisibilityGate};
use crate::renderer::FrameRecorder;
use crate::traits::{ListenerId, ViewportHost};
use crate::types::Viewport;
use crate::typewriter::Typewriter;

const TITLE_UPDATE_INTERVAL: f32 = 0.25;

/// Convert a window's physical inner size to a CSS-pixel viewport
pub fn logical_viewport(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    };
    let logical: LogicalSize<u32> = size.to_logical(scale);
    Viewport::new(logical.width, logical.height).with_pixel_ratio(scale as f32)
}

/// A winit window standing in for the page: the window is the mount container
pub struct WindowHost {
    window: Option<Arc<Window>>,
    container_id: String,
    listeners: Vec<ListenerId>,
    next_listener: u64,
}

impl WindowHost {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            window: None,
            container_id: container_id.into(),
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn attach(&mut self, window: Arc<Window>) {
        self.window = Some(window);
    }

    pub fn window(&self) -> Option<&Arc<Window>> {
        self.window.as_ref()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ViewportHost for WindowHost {
    fn container_exists(&self, id: &str) -> bool {
        self.window.is_some() && id == self.container_id
    }

    fn viewport(&self) -> Viewport {
        match &self.window {
            Some(window) => logical_viewport(window.inner_size(), window.scale_factor()),
            None => Viewport::new(0, 0),
        }
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

pub struct DesktopApp {
    host: WindowHost,
    controller: SceneController<FrameRecorder, ManualScheduler>,
    gate: VisibilityGate,
    typewriter: Typewriter,
    title_timer: FixedInterval,
    last_frame_time: Instant,
    initial_size: (u32, u32),
}

impl DesktopApp {
    pub fn new(config: SceneConfig, width: u32, height: u32) -> Self {
        Self {
            host: WindowHost::new(config.container_id.clone()),
            controller: SceneController::new(config, FrameRecorder::new(), ManualScheduler::new()),
            gate: VisibilityGate::new(),
            typewriter: Typewriter::hero(),
            title_timer: FixedInterval::new(TITLE_UPDATE_INTERVAL),
            last_frame_time: Instant::now(),
            initial_size: (width, height),
        }
    }

    pub fn controller(&self) -> &SceneController<FrameRecorder, ManualScheduler> {
        &self.controller
    }

    fn reveal(&mut self, event_loop: &ActiveEventLoop) {
        match self
            .gate
            .observe(&[IntersectionEntry::visible()], &mut self.controller, &mut self.host)
        {
            Ok(true) => self.last_frame_time = Instant::now(),
            Ok(false) => {}
            Err(e) => {
                log::error!("Failed to construct scene: {}", e);
                event_loop.exit();
                return;
            }
        }
        self.keep_ticking();
    }

    fn keep_ticking(&self) {
        if self.controller.scheduler().is_pending() {
            self.host.request_redraw();
        }
    }

    fn teardown(&mut self, event_loop: &ActiveEventLoop) {
        self.controller.dispose(&mut self.host);
        event_loop.exit();
    }

    fn update_title(&self) {
        let Some(window) = self.host.window() else {
            return;
        };
        let frames = self.controller.renderer().frames();
        window.set_title(&format!("{} [{} frames]", self.typewriter.visible(), frames));
    }
}

impl ApplicationHandler for DesktopApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.window().is_none() {
            let (width, height) = self.initial_size;
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Hero Scene")
                    .with_inner_size(LogicalSize::new(width, height)),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.host.attach(window);
        }
        self.reveal(event_loop);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.teardown(event_loop),
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                let viewport = self.host.viewport();
                self.controller.on_resize(viewport);
            }
            WindowEvent::Occluded(false) => self.reveal(event_loop),
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                self.typewriter.advance(delta);
                self.controller.step();
                if self.title_timer.tick(delta) > 0 {
                    self.update_title();
                }
                self.keep_ticking();
            }
            _ => {}
        }
    }
}

/// Open a window and run the scene until it is closed; returns ticks run
pub fn run_desktop(config: SceneConfig, width: u32, height: u32) -> Result<u64> {
    let event_loop = EventLoop::new()?;
    let mut app = DesktopApp::new(config, width, height);

    log::info!("opening {}x{} window, Escape to quit", width, height);
    event_loop.run_app(&mut app)?;

    Ok(app.controller().ticks())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RenderSettings, ViewportProfile, MOBILE_BREAKPOINT};
    use crate::core::LifecycleState;

    #[test]
    fn test_host_without_window_has_no_container() {
        let host = WindowHost::new("canvas-container");
        assert!(!host.container_exists("canvas-container"));
        assert_eq!(host.viewport().aspect(), None);
    }

    #[test]
    fn test_host_tracks_listeners() {
        let mut host = WindowHost::new("canvas-container");
        let a = host.subscribe_resize();
        let b = host.subscribe_resize();
        assert_ne!(a, b);

        host.unsubscribe_resize(a);
        assert_eq!(host.listener_count(), 1);
        host.unsubscribe_resize(a);
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn test_app_starts_uninitialized() {
        let app = DesktopApp::new(SceneConfig::default(), 800, 600);
        assert_eq!(app.controller().state(), LifecycleState::Uninitialized);
        assert_eq!(app.controller().ticks(), 0);
    }

    #[test]
    fn test_logical_viewport_divides_by_scale() {
        let viewport = logical_viewport(PhysicalSize::new(1400, 1200), 2.0);

        assert_eq!((viewport.width, viewport.height), (700, 600));
        assert_eq!(viewport.device_pixel_ratio, 2.0);
        assert_eq!(
            ViewportProfile::resolve(viewport.width, MOBILE_BREAKPOINT),
            ViewportProfile::Reduced
        );
        assert!(!RenderSettings::resolve(&viewport, MOBILE_BREAKPOINT).antialias);
    }

    #[test]
    fn test_logical_viewport_fractional_scale() {
        let viewport = logical_viewport(PhysicalSize::new(1536, 864), 1.5);
        assert_eq!((viewport.width, viewport.height), (1024, 576));
        assert_eq!(viewport.device_pixel_ratio, 1.5);
    }

    #[test]
    fn test_logical_viewport_invalid_scale_is_identity() {
        let viewport = logical_viewport(PhysicalSize::new(800, 600), 0.0);
        assert_eq!((viewport.width, viewport.height), (800, 600));
        assert_eq!(viewport.device_pixel_ratio, 1.0);
    }
}
