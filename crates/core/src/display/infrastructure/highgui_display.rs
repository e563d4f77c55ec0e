use opencv::highgui;

use crate::display::domain::frame_display::FrameDisplay;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::bgr_from_frame;

/// A native window managed by OpenCV's highgui module.
pub struct HighguiDisplay {
    title: String,
}

impl HighguiDisplay {
    pub fn open(title: &str) -> Result<Self, Box<dyn std::error::Error>> {
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE)?;
        log::debug!("Opened window '{title}'");
        Ok(Self {
            title: title.to_string(),
        })
    }
}

impl FrameDisplay for HighguiDisplay {
    fn show(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let image = bgr_from_frame(frame)?;
        highgui::imshow(&self.title, &image)?;
        Ok(())
    }

    fn poll_key(&mut self, timeout_ms: i32) -> Result<Option<i32>, Box<dyn std::error::Error>> {
        let key = highgui::wait_key(timeout_ms)?;
        Ok((key >= 0).then_some(key))
    }
}

impl Drop for HighguiDisplay {
    fn drop(&mut self) {
        if let Err(e) = highgui::destroy_window(&self.title) {
            log::warn!("Failed to close window '{}': {}", self.title, e);
        }
    }
}
