use crate::shared::frame::Frame;

/// An on-screen window that shows frames and reports key presses.
///
/// Implementations close their window when dropped.
pub trait FrameDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Waits up to `timeout_ms` for a key press and returns its code, if any.
    fn poll_key(&mut self, timeout_ms: i32) -> Result<Option<i32>, Box<dyn std::error::Error>>;
}
