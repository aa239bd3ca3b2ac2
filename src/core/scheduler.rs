use crate::traits::{AnimationHandle, FrameScheduler};

/// Scheduler the host drives by hand
///
/// Holds at most one pending request. Hosts (and tests) take the due handle
/// and fire it into the controller, which makes frame timing fully
/// deterministic.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<AnimationHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending handle, if any, so it can be fired
    pub fn take_due(&mut self) -> Option<AnimationHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<AnimationHandle> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total frames requested so far
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total pending requests cancelled so far
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> AnimationHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = AnimationHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: AnimationHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
