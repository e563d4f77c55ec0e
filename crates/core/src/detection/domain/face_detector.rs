use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for face detection.
///
/// Returns regions in detector order. Implementations may keep scratch state
/// between calls, hence `&mut self`, but must not carry regions across frames.
pub trait FaceDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
