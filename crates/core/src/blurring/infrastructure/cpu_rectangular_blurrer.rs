use std::cell::RefCell;

use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::shared::constants::BLUR_KERNEL_SIZE;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

use super::gaussian::{self, RoiRect};

/// CPU rectangular blurrer using separable Gaussian blur.
///
/// Each region is smoothed using its surrounding frame pixels as context,
/// but only pixels inside the region are written, so the rest of the frame
/// is left untouched.
pub struct CpuRectangularBlurrer {
    kernel: Vec<f32>,
    roi_buf: RefCell<Vec<u8>>,
    blur_temp: RefCell<Vec<f32>>,
}

impl CpuRectangularBlurrer {
    pub fn new(kernel_size: usize) -> Self {
        let kernel_size = kernel_size.max(1) | 1; // ensure odd
        Self {
            kernel: gaussian::gaussian_kernel_1d(kernel_size),
            roi_buf: RefCell::new(Vec::new()),
            blur_temp: RefCell::new(Vec::new()),
        }
    }

    pub fn kernel_size(&self) -> usize {
        self.kernel.len()
    }
}

impl Default for CpuRectangularBlurrer {
    fn default() -> Self {
        Self::new(BLUR_KERNEL_SIZE)
    }
}

impl FrameBlurrer for CpuRectangularBlurrer {
    fn blur(
        &self,
        frame: &mut Frame,
        regions: &[Region],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let fw = frame.width() as usize;
        let fh = frame.height() as usize;
        let channels = frame.channels() as usize;
        let half = self.kernel.len() / 2;
        let data = frame.data_mut();

        for r in regions {
            let Some(visible) = r.clamp_to(fw as u32, fh as u32) else {
                continue;
            };
            let inner = RoiRect {
                x: visible.x as usize,
                y: visible.y as usize,
                w: visible.width as usize,
                h: visible.height as usize,
            };
            let padded = gaussian::padded_rect(inner, half, fw, fh);

            let mut roi = self.roi_buf.borrow_mut();
            gaussian::extract_roi(data, fw, channels, padded, &mut roi);

            let mut temp = self.blur_temp.borrow_mut();
            gaussian::separable_gaussian_blur_with_kernel(
                &mut roi,
                padded.w,
                padded.h,
                channels,
                &self.kernel,
                &mut temp,
            );

            gaussian::write_inner_back(data, &roi, fw, channels, padded, inner);
        }

        Ok(())
    }
}
