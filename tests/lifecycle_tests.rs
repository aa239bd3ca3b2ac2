use hero_scene::camera::PerspectiveCamera;
use hero_scene::config::{RenderSettings, SceneConfig};
use hero_scene::core::{
    primary_scale, IntersectionEntry, LifecycleState, ManualScheduler, SceneController,
    VisibilityGate,
};
use hero_scene::error::SceneError;
use hero_scene::headless::HeadlessHost;
use hero_scene::scene::SceneGraph;
use hero_scene::scenes::MeshRole;
use hero_scene::traits::{SceneRenderer, ViewportHost};
use hero_scene::types::Viewport;

/// Mock renderer counting every call it receives
#[derive(Default)]
struct CountingRenderer {
    configures: usize,
    resizes: Vec<(u32, u32)>,
    draws: usize,
    disposes: usize,
}

impl SceneRenderer for CountingRenderer {
    fn configure(&mut self, _settings: &RenderSettings) {
        self.configures += 1;
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }

    fn render(&mut self, _scene: &SceneGraph, _camera: &PerspectiveCamera) {
        self.draws += 1;
    }

    fn dispose(&mut self) {
        self.disposes += 1;
    }
}

fn controller(seed: u64) -> SceneController<CountingRenderer, ManualScheduler> {
    SceneController::new(
        SceneConfig::default().with_seed(seed),
        CountingRenderer::default(),
        ManualScheduler::new(),
    )
}

fn page(width: u32, height: u32) -> HeadlessHost {
    HeadlessHost::new(Viewport::new(width, height), "canvas-container")
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construct_wide_viewport() {
    let mut ctrl = controller(1);
    let mut host = page(1024, 768);

    ctrl.construct(&mut host).unwrap();
    assert_eq!(ctrl.run_ticks(1), 1);

    let scene = ctrl.scene().unwrap();
    assert_eq!(scene.particles().unwrap().len(), 1200);
    assert!(scene.mesh(MeshRole::Primary).is_some());
    assert_eq!(scene.lights().count(), 4);
    assert_eq!(ctrl.state(), LifecycleState::Running);
    assert_eq!(ctrl.renderer().configures, 1);
}

#[test]
fn test_construct_missing_container() {
    let mut ctrl = controller(1);
    let mut host = HeadlessHost::without_container(Viewport::new(1024, 768));

    let err = ctrl.construct(&mut host).unwrap_err();

    assert_eq!(
        err,
        SceneError::MissingContainer {
            id: "canvas-container".to_string()
        }
    );
    assert_eq!(ctrl.state(), LifecycleState::Uninitialized);
    assert_eq!(ctrl.renderer().configures, 0);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_particle_count_by_width() {
    for width in [320u32, 500, 767] {
        let mut ctrl = controller(2);
        ctrl.construct(&mut page(width, 600)).unwrap();
        assert_eq!(ctrl.scene().unwrap().particles().unwrap().len(), 500, "width {}", width);
    }
    for width in [768u32, 1024, 2560] {
        let mut ctrl = controller(2);
        ctrl.construct(&mut page(width, 600)).unwrap();
        assert_eq!(ctrl.scene().unwrap().particles().unwrap().len(), 1200, "width {}", width);
    }
}

// ============================================================================
// Ticking
// ============================================================================

#[test]
fn test_thousand_ticks_rotation() {
    let mut ctrl = controller(3);
    ctrl.construct(&mut page(1024, 768)).unwrap();

    assert_eq!(ctrl.run_ticks(1000), 1000);

    let primary = ctrl.scene().unwrap().mesh(MeshRole::Primary).unwrap();
    assert!((primary.transform.rotation.x - 1000.0 * 0.002).abs() < 1e-3);
    assert!((primary.transform.rotation.y - 1000.0 * 0.003).abs() < 1e-3);
    assert!((ctrl.time().unwrap() - 10.0).abs() < 1e-9);
}

#[test]
fn test_primary_scale_stays_bounded() {
    let mut ctrl = controller(4);
    ctrl.construct(&mut page(1024, 768)).unwrap();

    for _ in 0..500 {
        ctrl.step();
        let scale = ctrl.scene().unwrap().mesh(MeshRole::Primary).unwrap().transform.scale;
        assert!((0.92..=1.08).contains(&scale.x));
        assert_eq!(scale.x, scale.y);
        assert_eq!(scale.y, scale.z);
        assert_eq!(scale.x, primary_scale(ctrl.time().unwrap()));
    }
}

#[test]
fn test_one_pending_frame_at_a_time() {
    let mut ctrl = controller(5);
    ctrl.construct(&mut page(1024, 768)).unwrap();

    ctrl.run_ticks(10);

    // One initial request plus one per tick
    assert_eq!(ctrl.scheduler().requested(), 11);
    assert!(ctrl.scheduler().is_pending());
}

// ============================================================================
// Teardown
// ============================================================================

#[test]
fn test_teardown_halts_ticks() {
    let mut ctrl = controller(6);
    let mut host = page(1024, 768);
    ctrl.construct(&mut host).unwrap();
    ctrl.run_ticks(25);
    let draws = ctrl.renderer().draws;

    ctrl.dispose(&mut host);

    assert_eq!(ctrl.run_ticks(100), 0);
    assert_eq!(ctrl.renderer().draws, draws);
    assert_eq!(ctrl.renderer().disposes, 1);
    assert!(!ctrl.scheduler().is_pending());
    assert_eq!(host.listener_count(), 0);
    assert_eq!(ctrl.state(), LifecycleState::Destroyed);
}

#[test]
fn test_construct_after_dispose_fails() {
    let mut ctrl = controller(7);
    let mut host = page(1024, 768);
    ctrl.construct(&mut host).unwrap();
    ctrl.dispose(&mut host);

    let err = ctrl.construct(&mut host).unwrap_err();
    assert!(matches!(
        err,
        SceneError::InvalidState {
            state: LifecycleState::Destroyed,
            ..
        }
    ));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_while_running() {
    let mut ctrl = controller(8);
    let mut host = page(1024, 768);
    ctrl.construct(&mut host).unwrap();

    assert!(ctrl.on_resize(Viewport::new(800, 400)));
    assert_eq!(ctrl.camera().unwrap().aspect, 2.0);

    assert!(!ctrl.on_resize(Viewport::new(800, 400)));
    assert_eq!(ctrl.camera().unwrap().aspect, 2.0);
    assert_eq!(ctrl.renderer().resizes, vec![(800, 400)]);
}

#[test]
fn test_resize_to_construction_size_is_noop() {
    let mut ctrl = controller(9);
    let mut host = page(1024, 512);
    ctrl.construct(&mut host).unwrap();

    assert!(!ctrl.on_resize(host.viewport()));
    assert!(ctrl.renderer().resizes.is_empty());
}

#[test]
fn test_resize_after_dispose_ignored() {
    let mut ctrl = controller(10);
    let mut host = page(1024, 768);
    ctrl.construct(&mut host).unwrap();
    ctrl.dispose(&mut host);

    assert!(!ctrl.on_resize(Viewport::new(640, 480)));
    assert!(ctrl.renderer().resizes.is_empty());
}

// ============================================================================
// Visibility gate
// ============================================================================

#[test]
fn test_gate_constructs_once() {
    let mut ctrl = controller(11);
    let mut host = page(1024, 768);
    let mut gate = VisibilityGate::new();

    assert!(gate
        .observe(&[IntersectionEntry::visible()], &mut ctrl, &mut host)
        .unwrap());
    for _ in 0..5 {
        assert!(!gate
            .observe(&[IntersectionEntry::visible()], &mut ctrl, &mut host)
            .unwrap());
    }

    assert_eq!(gate.activations(), 1);
    assert_eq!(gate.ignored(), 5);
    assert_eq!(ctrl.renderer().configures, 1);
    assert_eq!(host.listener_count(), 1);
}

#[test]
fn test_gate_ignores_hidden_entries() {
    let mut ctrl = controller(12);
    let mut host = page(1024, 768);
    let mut gate = VisibilityGate::new();

    assert!(!gate
        .observe(&[IntersectionEntry::hidden()], &mut ctrl, &mut host)
        .unwrap());
    assert_eq!(ctrl.state(), LifecycleState::Uninitialized);
    assert_eq!(gate.ignored(), 0);
}

#[test]
fn test_gate_batch_with_several_visible_entries() {
    let mut ctrl = controller(13);
    let mut host = page(1024, 768);
    let mut gate = VisibilityGate::new();
    let batch = [
        IntersectionEntry::hidden(),
        IntersectionEntry::visible(),
        IntersectionEntry::visible(),
    ];

    assert!(gate.observe(&batch, &mut ctrl, &mut host).unwrap());
    assert_eq!(gate.activations(), 1);
    assert_eq!(gate.ignored(), 1);
}

#[test]
fn test_gate_stays_open_after_failure() {
    let mut ctrl = controller(14);
    let mut gate = VisibilityGate::new();
    let mut missing = HeadlessHost::without_container(Viewport::new(1024, 768));

    assert!(gate
        .observe(&[IntersectionEntry::visible()], &mut ctrl, &mut missing)
        .is_err());
    assert_eq!(gate.activations(), 0);

    let mut host = page(1024, 768);
    assert!(gate
        .observe(&[IntersectionEntry::visible()], &mut ctrl, &mut host)
        .unwrap());
    assert_eq!(ctrl.state(), LifecycleState::Running);
}

#[test]
fn test_gate_after_teardown_does_not_rebuild() {
    let mut ctrl = controller(15);
    let mut host = page(1024, 768);
    let mut gate = VisibilityGate::new();
    gate.observe(&[IntersectionEntry::visible()], &mut ctrl, &mut host)
        .unwrap();
    ctrl.dispose(&mut host);

    assert!(!gate
        .observe(&[IntersectionEntry::visible()], &mut ctrl, &mut host)
        .unwrap());
    assert_eq!(ctrl.renderer().configures, 1);
}
