use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio;

use crate::shared::frame::Frame;
use crate::shared::opencv_mat::frame_from_bgr;
use crate::video::domain::frame_source::FrameSource;

/// Camera device opened through OpenCV's `VideoCapture`.
pub struct OpencvCamera {
    capture: videoio::VideoCapture,
    device_id: i32,
    buffer: Mat,
    next_index: usize,
}

impl OpencvCamera {
    pub fn open(device_id: i32) -> Result<Self, Box<dyn std::error::Error>> {
        let capture = videoio::VideoCapture::new(device_id, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(format!("video capture device {device_id} could not be opened").into());
        }
        log::info!("Opened video capture device {device_id}");
        Ok(Self {
            capture,
            device_id,
            buffer: Mat::default(),
            next_index: 0,
        })
    }
}

impl FrameSource for OpencvCamera {
    fn read(&mut self) -> Result<Frame, Box<dyn std::error::Error>> {
        if !self.capture.read(&mut self.buffer)? {
            return Err(format!("device {} stopped producing frames", self.device_id).into());
        }
        let frame = frame_from_bgr(&self.buffer, self.next_index)?;
        self.next_index += 1;
        Ok(frame)
    }
}

impl Drop for OpencvCamera {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            log::warn!("Failed to release device {}: {}", self.device_id, e);
        }
    }
}
