use std::path::Path;

use crate::annotation::domain::label_renderer::LabelRenderer;
use crate::annotation::infrastructure::hershey_label_renderer::HersheyLabelRenderer;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::infrastructure::haar_cascade_detector::{CascadeParams, HaarCascadeDetector};
use crate::display::domain::frame_display::FrameDisplay;
use crate::display::infrastructure::highgui_display::HighguiDisplay;
use crate::pipeline::capture_backend::CaptureBackend;
use crate::video::domain::frame_source::FrameSource;
use crate::video::infrastructure::opencv_camera::OpencvCamera;

/// Camera, Haar cascade, Hershey labels and highgui window, all from OpenCV.
pub struct OpencvBackend {
    cascade_params: CascadeParams,
}

impl OpencvBackend {
    pub fn new(cascade_params: CascadeParams) -> Self {
        Self { cascade_params }
    }
}

impl CaptureBackend for OpencvBackend {
    fn open_source(&self, device_id: i32) -> Result<Box<dyn FrameSource>, Box<dyn std::error::Error>> {
        Ok(Box::new(OpencvCamera::open(device_id)?))
    }

    fn load_detector(
        &self,
        model_path: &Path,
    ) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
        Ok(Box::new(HaarCascadeDetector::load(model_path, self.cascade_params)?))
    }

    fn label_renderer(&self) -> Result<Box<dyn LabelRenderer>, Box<dyn std::error::Error>> {
        Ok(Box::new(HersheyLabelRenderer::default()))
    }

    fn open_display(&self, title: &str) -> Result<Box<dyn FrameDisplay>, Box<dyn std::error::Error>> {
        Ok(Box::new(HighguiDisplay::open(title)?))
    }
}
