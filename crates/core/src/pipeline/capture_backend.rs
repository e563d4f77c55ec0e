use std::path::Path;

use crate::annotation::domain::label_renderer::LabelRenderer;
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::frame_display::FrameDisplay;
use crate::video::domain::frame_source::FrameSource;

/// Provider of the external capabilities the live loop consumes.
///
/// Each method acquires one resource; dropping the returned value releases it.
pub trait CaptureBackend {
    fn open_source(&self, device_id: i32) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>>;

    fn load_detector(
        &self,
        model_path: &Path,
    ) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>>;

    fn label_renderer(&self) -> Result<Box<dyn LabelRenderer>, Box<dyn std::error::Error>>;

    fn open_display(&self, title: &str) -> Result<Box<dyn FrameDisplay>, Box<dyn std::error::Error>>;
}
