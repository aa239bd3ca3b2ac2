use crate::types::Viewport;

/// Identifies one resize subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Page or window the scene mounts into
pub trait ViewportHost {
    /// Whether the mount container with this id exists
    fn container_exists(&self, id: &str) -> bool;

    /// Current viewport size
    fn viewport(&self) -> Viewport;

    /// Start delivering resize events
    fn subscribe_resize(&mut self) -> ListenerId;

    /// Stop delivering resize events for this subscription
    fn unsubscribe_resize(&mut self, id: ListenerId);
}
