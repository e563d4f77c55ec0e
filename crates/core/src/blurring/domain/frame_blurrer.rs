use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for applying blur to specified regions within a frame.
///
/// Implementations modify the frame in-place (`&mut Frame`) and must not
/// touch pixels outside the given regions.
pub trait FrameBlurrer {
    fn blur(&self, frame: &mut Frame, regions: &[Region])
        -> Result<(), Box<dyn std::error::Error>>;
}
