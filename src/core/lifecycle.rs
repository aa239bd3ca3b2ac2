//! Lifecycle of the hero scene: construction, the frame loop, and teardown.
//!
//! ```text
//! Uninitialized ──construct──▶ Constructing ──first frame scheduled──▶ Running
//!       ▲                           │                                      │
//!       └──── container missing ────┘                               dispose │
//!                                                                          ▼
//!                                                                     Destroyed
//! ```
//!
//! The loop is cooperative: each fired frame runs one tick and only then asks
//! the scheduler for the next frame, so ticks never overlap. Cancelling the
//! single pending handle is the only way to stop it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use super::animator::{AnimationTargets, FrameAnimator};
use super::clock::TickClock;
use super::resize::ResizeReactor;
use super::scheduler::ManualScheduler;
use crate::camera::PerspectiveCamera;
use crate::config::{RenderSettings, SceneConfig, ViewportProfile};
use crate::error::{Result, SceneError};
use crate::scene::SceneGraph;
use crate::scenes::create_hero_scene;
use crate::traits::{AnimationHandle, FrameScheduler, ListenerId, SceneRenderer, ViewportHost};
use crate::types::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LifecycleState {
    Uninitialized,
    Constructing,
    Running,
    /// Terminal
    Destroyed,
}

/// Everything created at construction and dropped together at teardown
struct SceneRuntime {
    scene: SceneGraph,
    camera: PerspectiveCamera,
    targets: AnimationTargets,
    clock: TickClock,
    resize: ResizeReactor,
    profile: ViewportProfile,
    settings: RenderSettings,
    listener: ListenerId,
}

/// Owns the scene and drives it through its lifecycle
pub struct SceneController<R: SceneRenderer, S: FrameScheduler> {
    config: SceneConfig,
    renderer: R,
    scheduler: S,
    animator: FrameAnimator,
    state: LifecycleState,
    runtime: Option<SceneRuntime>,
    pending: Option<AnimationHandle>,
    ticks_run: u64,
}

impl<R: SceneRenderer, S: FrameScheduler> SceneController<R, S> {
    pub fn new(config: SceneConfig, renderer: R, scheduler: S) -> Self {
        Self {
            config,
            renderer,
            scheduler,
            animator: FrameAnimator::new(),
            state: LifecycleState::Uninitialized,
            runtime: None,
            pending: None,
            ticks_run: 0,
        }
    }

    /// Build the scene and schedule the first frame
    ///
    /// Fails with [`SceneError::MissingContainer`] when the host lacks the
    /// mount container; the controller then stays `Uninitialized`.
    pub fn construct(&mut self, host: &mut dyn ViewportHost) -> Result<()> {
        if self.state != LifecycleState::Uninitialized {
            return Err(SceneError::InvalidState {
                operation: "construct",
                state: self.state,
            });
        }
        self.state = LifecycleState::Constructing;

        if !host.container_exists(&self.config.container_id) {
            self.state = LifecycleState::Uninitialized;
            return Err(SceneError::MissingContainer {
                id: self.config.container_id.clone(),
            });
        }

        let viewport = host.viewport();
        let profile = self.config.profile_for(&viewport);
        let settings = RenderSettings::resolve(&viewport, self.config.breakpoint);
        self.renderer.configure(&settings);

        let camera = PerspectiveCamera::hero(viewport.aspect().unwrap_or(1.0));
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (scene, targets) = create_hero_scene(&self.config, profile, &mut rng);
        let listener = host.subscribe_resize();

        log::info!(
            "hero scene constructed: {}x{}, {:?} profile, {} entities",
            viewport.width,
            viewport.height,
            profile,
            scene.len()
        );

        self.runtime = Some(SceneRuntime {
            scene,
            camera,
            targets,
            clock: TickClock::default(),
            resize: ResizeReactor::with_initial(&viewport),
            profile,
            settings,
            listener,
        });
        self.pending = Some(self.scheduler.request_frame());
        self.state = LifecycleState::Running;
        Ok(())
    }

    /// Run one tick if `handle` is the pending frame
    ///
    /// Returns false for stale handles and outside `Running`.
    pub fn on_frame(&mut self, handle: AnimationHandle) -> bool {
        if self.state != LifecycleState::Running || self.pending != Some(handle) {
            return false;
        }
        self.pending = None;

        let Some(runtime) = self.runtime.as_mut() else {
            return false;
        };

        let time = runtime.clock.tick();
        self.animator.step(time, &mut runtime.scene, &runtime.targets);
        self.renderer.render(&runtime.scene, &runtime.camera);
        self.ticks_run += 1;

        self.pending = Some(self.scheduler.request_frame());
        true
    }

    /// Forward a viewport change; ignored unless `Running`
    pub fn on_resize(&mut self, viewport: Viewport) -> bool {
        if self.state != LifecycleState::Running {
            return false;
        }
        match self.runtime.as_mut() {
            Some(runtime) => runtime
                .resize
                .apply(&viewport, &mut runtime.camera, &mut self.renderer),
            None => false,
        }
    }

    /// Stop the loop, release resources, and enter `Destroyed`
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self, host: &mut dyn ViewportHost) {
        if self.state == LifecycleState::Destroyed {
            return;
        }

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if let Some(runtime) = self.runtime.take() {
            self.renderer.dispose();
            host.unsubscribe_resize(runtime.listener);
            log::info!("hero scene disposed after {} ticks", self.ticks_run);
        }
        self.state = LifecycleState::Destroyed;
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LifecycleState::Running
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Clock time, while the scene exists
    pub fn time(&self) -> Option<f64> {
        self.runtime.as_ref().map(|r| r.clock.time())
    }

    /// Ticks run over the controller's life
    pub fn ticks(&self) -> u64 {
        self.ticks_run
    }

    pub fn scene(&self) -> Option<&SceneGraph> {
        self.runtime.as_ref().map(|r| &r.scene)
    }

    pub fn scene_mut(&mut self) -> Option<&mut SceneGraph> {
        self.runtime.as_mut().map(|r| &mut r.scene)
    }

    pub fn camera(&self) -> Option<&PerspectiveCamera> {
        self.runtime.as_ref().map(|r| &r.camera)
    }

    pub fn targets(&self) -> Option<&AnimationTargets> {
        self.runtime.as_ref().map(|r| &r.targets)
    }

    pub fn profile(&self) -> Option<ViewportProfile> {
        self.runtime.as_ref().map(|r| r.profile)
    }

    pub fn render_settings(&self) -> Option<&RenderSettings> {
        self.runtime.as_ref().map(|r| &r.settings)
    }

    pub fn pending_handle(&self) -> Option<AnimationHandle> {
        self.pending
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl<R: SceneRenderer> SceneController<R, ManualScheduler> {
    /// Fire the due frame, if one is scheduled
    pub fn step(&mut self) -> bool {
        match self.scheduler.take_due() {
            Some(handle) => self.on_frame(handle),
            None => false,
        }
    }

    /// Step up to `count` frames, returning how many ticked
    pub fn run_ticks(&mut self, count: u64) -> u64 {
        let mut ran = 0;
        while ran < count && self.step() {
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::MeshRole;

    #[derive(Default)]
    struct CountingRenderer {
        configured: Option<RenderSettings>,
        renders: usize,
        disposed: usize,
    }

    impl SceneRenderer for CountingRenderer {
        fn configure(&mut self, settings: &RenderSettings) {
            self.configured = Some(*settings);
        }

        fn set_size(&mut self, _width: u32, _height: u32) {}

        fn render(&mut self, _scene: &SceneGraph, _camera: &PerspectiveCamera) {
            self.renders += 1;
        }

        fn dispose(&mut self) {
            self.disposed += 1;
        }
    }

    struct StubHost {
        container: bool,
        viewport: Viewport,
        subscribed: Vec<ListenerId>,
        next_listener: u64,
    }

    impl StubHost {
        fn new(width: u32, height: u32) -> Self {
            Self {
                container: true,
                viewport: Viewport::new(width, height),
                subscribed: Vec::new(),
                next_listener: 0,
            }
        }
    }

    impl ViewportHost for StubHost {
        fn container_exists(&self, _id: &str) -> bool {
            self.container
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }

        fn subscribe_resize(&mut self) -> ListenerId {
            self.next_listener += 1;
            let id = ListenerId(self.next_listener);
            self.subscribed.push(id);
            id
        }

        fn unsubscribe_resize(&mut self, id: ListenerId) {
            self.subscribed.retain(|&l| l != id);
        }
    }

    fn controller() -> SceneController<CountingRenderer, ManualScheduler> {
        SceneController::new(
            SceneConfig::default().with_seed(11),
            CountingRenderer::default(),
            ManualScheduler::new(),
        )
    }

    #[test]
    fn test_new_controller_is_uninitialized() {
        let ctrl = controller();
        assert_eq!(ctrl.state(), LifecycleState::Uninitialized);
        assert!(ctrl.scene().is_none());
        assert!(ctrl.pending_handle().is_none());
    }

    #[test]
    fn test_construct_schedules_first_frame() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);

        ctrl.construct(&mut host).unwrap();

        assert_eq!(ctrl.state(), LifecycleState::Running);
        assert!(ctrl.pending_handle().is_some());
        assert_eq!(ctrl.renderer().renders, 0);
        assert_eq!(host.subscribed.len(), 1);
        assert!(ctrl.renderer().configured.unwrap().antialias);
    }

    #[test]
    fn test_missing_container_stays_uninitialized() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);
        host.container = false;

        let err = ctrl.construct(&mut host).unwrap_err();

        assert!(matches!(err, SceneError::MissingContainer { .. }));
        assert_eq!(ctrl.state(), LifecycleState::Uninitialized);
        assert!(host.subscribed.is_empty());
        assert_eq!(ctrl.scheduler().requested(), 0);
    }

    #[test]
    fn test_construct_twice_is_invalid() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);
        ctrl.construct(&mut host).unwrap();

        let err = ctrl.construct(&mut host).unwrap_err();
        assert_eq!(
            err,
            SceneError::InvalidState {
                operation: "construct",
                state: LifecycleState::Running
            }
        );
    }

    #[test]
    fn test_each_step_renders_once_and_reschedules() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);
        ctrl.construct(&mut host).unwrap();

        assert_eq!(ctrl.run_ticks(5), 5);
        assert_eq!(ctrl.renderer().renders, 5);
        assert_eq!(ctrl.ticks(), 5);
        assert!(ctrl.scheduler().is_pending());
        assert!((ctrl.time().unwrap() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_stale_handle_does_not_tick() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);
        ctrl.construct(&mut host).unwrap();

        let first = ctrl.pending_handle().unwrap();
        assert!(ctrl.on_frame(first));
        assert!(!ctrl.on_frame(first));
        assert_eq!(ctrl.renderer().renders, 1);
    }

    #[test]
    fn test_dispose_stops_loop() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);
        ctrl.construct(&mut host).unwrap();
        ctrl.run_ticks(3);
        let pending = ctrl.pending_handle().unwrap();

        ctrl.dispose(&mut host);

        assert_eq!(ctrl.state(), LifecycleState::Destroyed);
        assert!(!ctrl.on_frame(pending));
        assert_eq!(ctrl.run_ticks(10), 0);
        assert_eq!(ctrl.renderer().renders, 3);
        assert_eq!(ctrl.renderer().disposed, 1);
        assert_eq!(ctrl.scheduler().cancelled(), 1);
        assert!(host.subscribed.is_empty());
        assert!(ctrl.scene().is_none());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);
        ctrl.construct(&mut host).unwrap();

        ctrl.dispose(&mut host);
        ctrl.dispose(&mut host);

        assert_eq!(ctrl.renderer().disposed, 1);
    }

    #[test]
    fn test_dispose_before_construct() {
        let mut ctrl = controller();
        let mut host = StubHost::new(1024, 768);

        ctrl.dispose(&mut host);

        assert_eq!(ctrl.state(), LifecycleState::Destroyed);
        assert_eq!(ctrl.renderer().disposed, 0);
        assert!(ctrl.construct(&mut host).is_err());
    }

    #[test]
    fn test_resize_ignored_when_not_running() {
        let mut ctrl = controller();
        assert!(!ctrl.on_resize(Viewport::new(800, 600)));
    }

    #[test]
    fn test_seeded_construction_is_reproducible() {
        let mut a = controller();
        let mut b = controller();
        a.construct(&mut StubHost::new(1024, 768)).unwrap();
        b.construct(&mut StubHost::new(1024, 768)).unwrap();

        assert_eq!(
            a.scene().unwrap().particles().unwrap().positions,
            b.scene().unwrap().particles().unwrap().positions
        );
        assert!(a.scene().unwrap().mesh(MeshRole::Primary).is_some());
    }
}
