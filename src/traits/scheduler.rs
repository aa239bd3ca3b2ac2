use serde::Serialize;

/// Token for a scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AnimationHandle(pub u64);

/// Per-display-frame callback source
///
/// The host fires the returned handle back into the controller roughly once
/// per display refresh.
pub trait FrameScheduler {
    /// Request one callback on the next frame
    fn request_frame(&mut self) -> AnimationHandle;

    /// Cancel a pending request; unknown handles are ignored
    fn cancel_frame(&mut self, handle: AnimationHandle);
}
