use crate::error::HostError;

/// Token for a frame callback that hasn't run yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Runs a callback right before the next display refresh.
///
/// The callback receives the refresh timestamp in milliseconds. Each counter
/// has at most one request in flight. Implementations must not run the
/// callback from inside `request_frame`.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Result<FrameHandle, HostError>;

    /// Cancelling a handle that already ran is a no-op.
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Watches one element and calls back when it enters the expanded viewport.
pub trait ViewportObserver {
    fn observe(&mut self, on_enter: Box<dyn FnMut()>) -> Result<(), HostError>;

    fn disconnect(&mut self);
}
