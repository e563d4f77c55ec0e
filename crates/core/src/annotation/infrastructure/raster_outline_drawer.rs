use image::{ImageBuffer, Rgb};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::annotation::domain::outline_drawer::OutlineDrawer;
use crate::shared::constants::{ANNOTATION_COLOR, OUTLINE_THICKNESS};
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Draws outlines directly into the frame buffer with `imageproc`.
///
/// A thickness of `t` paints the `t` outermost pixel rings inside the region,
/// so the outline's bounding box is exactly the (frame-clipped) region.
pub struct RasterOutlineDrawer {
    color: Rgb<u8>,
    thickness: u32,
}

impl RasterOutlineDrawer {
    pub fn new(color: [u8; 3], thickness: u32) -> Self {
        Self {
            color: Rgb(color),
            thickness: thickness.max(1),
        }
    }
}

impl Default for RasterOutlineDrawer {
    fn default() -> Self {
        Self::new(ANNOTATION_COLOR, OUTLINE_THICKNESS)
    }
}

impl OutlineDrawer for RasterOutlineDrawer {
    fn draw(&self, frame: &mut Frame, region: &Region) -> Result<(), Box<dyn std::error::Error>> {
        if frame.channels() != 3 {
            return Err(format!("expected an RGB frame, got {} channels", frame.channels()).into());
        }
        let Some(visible) = region.clamp_to(frame.width(), frame.height()) else {
            return Ok(());
        };

        let (width, height) = (frame.width(), frame.height());
        let mut canvas = ImageBuffer::<Rgb<u8>, &mut [u8]>::from_raw(width, height, frame.data_mut())
            .ok_or("frame buffer does not match its dimensions")?;

        for ring in 0..self.thickness as i32 {
            let w = visible.width - 2 * ring;
            let h = visible.height - 2 * ring;
            if w <= 0 || h <= 0 {
                break;
            }
            let rect = Rect::at(visible.x + ring, visible.y + ring).of_size(w as u32, h as u32);
            draw_hollow_rect_mut(&mut canvas, rect, self.color);
        }
        Ok(())
    }
}
