//! Conversions between [`Frame`] and OpenCV `Mat` at the backend boundary.
//!
//! OpenCV hands out BGR images; the rest of the crate works in RGB.

use opencv::core::{Mat, Scalar, CV_8UC3};
use opencv::imgproc;
use opencv::prelude::*;

use crate::shared::frame::Frame;

/// Copies a BGR capture into an RGB [`Frame`]. An empty `Mat` becomes an empty frame.
pub fn frame_from_bgr(mat: &Mat, index: usize) -> opencv::Result<Frame> {
    if mat.empty() {
        return Ok(Frame::empty(index));
    }
    let mut rgb = Mat::default();
    imgproc::cvt_color_def(mat, &mut rgb, imgproc::COLOR_BGR2RGB)?;
    let width = rgb.cols() as u32;
    let height = rgb.rows() as u32;
    let data = if rgb.is_continuous() {
        rgb.data_bytes()?.to_vec()
    } else {
        rgb.try_clone()?.data_bytes()?.to_vec()
    };
    Ok(Frame::new(data, width, height, 3, index))
}

/// Builds a BGR `Mat` for OpenCV routines that expect native channel order.
pub fn bgr_from_frame(frame: &Frame) -> opencv::Result<Mat> {
    let rgb = rgb_from_frame(frame)?;
    let mut bgr = Mat::default();
    imgproc::cvt_color_def(&rgb, &mut bgr, imgproc::COLOR_RGB2BGR)?;
    Ok(bgr)
}

/// Builds a `Mat` holding the frame bytes unchanged (RGB order).
pub fn rgb_from_frame(frame: &Frame) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        CV_8UC3,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(frame.data());
    Ok(mat)
}

/// Writes an RGB `Mat` of identical geometry back into the frame buffer.
pub fn copy_into_frame(mat: &Mat, frame: &mut Frame) -> opencv::Result<()> {
    let bytes = mat.data_bytes()?;
    if bytes.len() != frame.data().len() {
        return Err(opencv::Error::new(
            opencv::core::StsUnmatchedSizes,
            "mat and frame sizes differ",
        ));
    }
    frame.data_mut().copy_from_slice(bytes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::Vec3b;

    fn sample_frame(width: u32, height: u32) -> Frame {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[x as u8 * 10, y as u8 * 20, 200]);
            }
        }
        Frame::new(data, width, height, 3, 4)
    }

    #[test]
    fn test_bgr_mat_swaps_channel_order() {
        let frame = sample_frame(3, 2);
        let bgr = bgr_from_frame(&frame).unwrap();
        assert_eq!((bgr.cols(), bgr.rows()), (3, 2));
        let px = bgr.at_2d::<Vec3b>(1, 2).unwrap();
        assert_eq!([px[0], px[1], px[2]], [200, 20, 20]);
    }

    #[test]
    fn test_bgr_round_trip_restores_frame() {
        let frame = sample_frame(5, 4);
        let restored = frame_from_bgr(&bgr_from_frame(&frame).unwrap(), 9).unwrap();
        assert_eq!((restored.width(), restored.height()), (5, 4));
        assert_eq!(restored.index(), 9);
        assert_eq!(restored.data(), frame.data());
    }

    #[test]
    fn test_empty_mat_becomes_empty_frame() {
        let frame = frame_from_bgr(&Mat::default(), 2).unwrap();
        assert!(frame.is_empty());
        assert_eq!(frame.index(), 2);
    }

    #[test]
    fn test_copy_into_frame_writes_pixels_back() {
        let mut frame = sample_frame(4, 3);
        let painted = Mat::new_rows_cols_with_default(3, 4, CV_8UC3, Scalar::all(7.0)).unwrap();
        copy_into_frame(&painted, &mut frame).unwrap();
        assert!(frame.data().iter().all(|&v| v == 7));
    }

    #[test]
    fn test_copy_into_frame_rejects_size_mismatch() {
        let mut frame = sample_frame(3, 3);
        let original = frame.data().to_vec();
        let small = rgb_from_frame(&sample_frame(2, 2)).unwrap();
        assert!(copy_into_frame(&small, &mut frame).is_err());
        assert_eq!(frame.data(), &original[..]);
    }
}
