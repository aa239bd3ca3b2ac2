pub mod host;
pub mod renderer;
pub mod scheduler;

pub use host::*;
pub use renderer::*;
pub use scheduler::*;
