pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod headless;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;
pub mod typewriter;
pub mod window;

pub use crate::config::SceneConfig;
pub use crate::core::{LifecycleState, SceneController, VisibilityGate};
pub use crate::error::SceneError;
pub use crate::scenes::create_hero_scene;
