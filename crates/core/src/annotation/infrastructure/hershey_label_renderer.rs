use opencv::core::{Point, Scalar};
use opencv::imgproc;

use crate::annotation::domain::label_renderer::{LabelRenderer, TextSize};
use crate::shared::constants::{ANNOTATION_COLOR, LABEL_FONT_SCALE, LABEL_THICKNESS};
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::{copy_into_frame, rgb_from_frame};

/// Text labels in OpenCV's Hershey "plain" stroke font.
pub struct HersheyLabelRenderer {
    font_scale: f64,
    thickness: i32,
    color: [u8; 3],
}

impl HersheyLabelRenderer {
    pub fn new(font_scale: f64, thickness: i32, color: [u8; 3]) -> Self {
        Self {
            font_scale,
            thickness,
            color,
        }
    }
}

impl Default for HersheyLabelRenderer {
    fn default() -> Self {
        Self::new(LABEL_FONT_SCALE, LABEL_THICKNESS, ANNOTATION_COLOR)
    }
}

impl LabelRenderer for HersheyLabelRenderer {
    fn measure(&self, text: &str) -> Result<TextSize, Box<dyn std::error::Error>> {
        let mut baseline = 0;
        let size = imgproc::get_text_size(
            text,
            imgproc::FONT_HERSHEY_PLAIN,
            self.font_scale,
            self.thickness,
            &mut baseline,
        )?;
        Ok(TextSize {
            width: size.width,
            height: size.height,
        })
    }

    fn render(
        &self,
        frame: &mut Frame,
        text: &str,
        origin: (i32, i32),
    ) -> Result<(), Box<dyn std::error::Error>> {
        // The Mat keeps the frame's RGB order, so the color goes in as RGB too
        let mut canvas = rgb_from_frame(frame)?;
        let [r, g, b] = self.color;
        imgproc::put_text(
            &mut canvas,
            text,
            Point::new(origin.0, origin.1),
            imgproc::FONT_HERSHEY_PLAIN,
            self.font_scale,
            Scalar::new(r as f64, g as f64, b as f64, 0.0),
            self.thickness,
            imgproc::LINE_8,
            false,
        )?;
        copy_into_frame(&canvas, frame)?;
        Ok(())
    }
}
