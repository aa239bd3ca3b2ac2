pub mod animator;
pub mod clock;
pub mod lifecycle;
pub mod resize;
pub mod scheduler;
pub mod timer;
pub mod visibility;

pub use animator::{
    particle_drift, primary_position, primary_scale, secondary_position, AnimationTargets,
    FrameAnimator, ORBIT_RADIUS, PARTICLE_SPIN, PRIMARY_SPIN, SECONDARY_SPIN,
};
pub use clock::{TickClock, TICK_STEP};
pub use lifecycle::{LifecycleState, SceneController};
pub use resize::ResizeReactor;
pub use scheduler::ManualScheduler;
pub use timer::{Countdown, FixedInterval};
pub use visibility::{IntersectionEntry, VisibilityGate};
