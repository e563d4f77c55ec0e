use crate::shared::frame::Frame;

/// A live source of frames, typically a camera device.
///
/// `read` blocks until the device delivers the next frame. An empty frame
/// (zero pixels) is a normal result; an `Err` means the device can no longer
/// produce frames. Implementations release the device when dropped.
pub trait FrameSource {
    fn read(&mut self) -> Result<Frame, Box<dyn std::error::Error>>;
}
