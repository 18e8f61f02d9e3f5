//! Frame-boundary coalescing of side effects.

/// Holds the latest requested value until the next frame boundary.
///
/// Any number of [`request`](FrameCoalescer::request) calls between two
/// [`take`](FrameCoalescer::take) calls collapse into one: the last value wins.
#[derive(Debug, Clone)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `value`, replacing anything already pending.
    ///
    /// Returns `true` when nothing was pending, i.e. a frame must be requested.
    pub fn request(&mut self, value: T) -> bool {
        self.pending.replace(value).is_none()
    }

    /// Takes the pending value at the frame boundary.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending value without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
