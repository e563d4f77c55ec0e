/// ROI rectangle within a frame, used to pass region coordinates without many arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoiRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

/// Sigma OpenCV derives for a kernel when the caller passes `sigma = 0`.
pub fn sigma_for_kernel(kernel_size: usize) -> f64 {
    0.3 * ((kernel_size as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Precompute a normalized 1D Gaussian kernel of the given (odd) size.
pub fn gaussian_kernel_1d(kernel_size: usize) -> Vec<f32> {
    debug_assert!(kernel_size >= 1 && kernel_size % 2 == 1);
    let sigma = sigma_for_kernel(kernel_size);
    let half = (kernel_size / 2) as f64;
    let mut kernel_f64: Vec<f64> = (0..kernel_size)
        .map(|i| {
            let x = i as f64 - half;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let sum: f64 = kernel_f64.iter().sum();
    for v in &mut kernel_f64 {
        *v /= sum;
    }
    kernel_f64.iter().map(|&v| v as f32).collect()
}

/// Mirror an out-of-range index back into `0..len` without repeating the edge
/// pixel (`gfedcb|abcdefgh|gfedcba`).
fn reflect_101(mut i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Apply a separable Gaussian blur to a whole buffer, reusing `temp`.
pub fn separable_gaussian_blur_with_kernel(
    data: &mut [u8],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[f32],
    temp: &mut Vec<f32>,
) {
    let kernel_size = kernel.len();
    if kernel_size <= 1 || width == 0 || height == 0 {
        return;
    }
    let half = (kernel_size / 2) as isize;

    temp.resize(width * height * channels, 0.0);

    // Horizontal pass: data → temp
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - half, width);
                    sum += data[(y * width + sx) * channels + c] as f32 * w;
                }
                temp[(y * width + x) * channels + c] = sum;
            }
        }
    }

    // Vertical pass: temp → data
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut sum = 0.0f32;
                for (k, &w) in kernel.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - half, height);
                    sum += temp[(sy * width + x) * channels + c] * w;
                }
                data[(y * width + x) * channels + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Extract a rectangular ROI from frame data into a reusable buffer.
pub fn extract_roi(
    data: &[u8],
    frame_width: usize,
    channels: usize,
    rect: RoiRect,
    roi: &mut Vec<u8>,
) {
    roi.resize(rect.w * rect.h * channels, 0);
    for row in 0..rect.h {
        let src_offset = ((rect.y + row) * frame_width + rect.x) * channels;
        let dst_offset = row * rect.w * channels;
        roi[dst_offset..dst_offset + rect.w * channels]
            .copy_from_slice(&data[src_offset..src_offset + rect.w * channels]);
    }
}

/// Copy the `inner` part of a `padded` ROI buffer back into frame data.
///
/// `inner` must lie within `padded`; both are in frame coordinates.
pub fn write_inner_back(
    data: &mut [u8],
    roi: &[u8],
    frame_width: usize,
    channels: usize,
    padded: RoiRect,
    inner: RoiRect,
) {
    let dx = inner.x - padded.x;
    let dy = inner.y - padded.y;
    for row in 0..inner.h {
        let dst_offset = ((inner.y + row) * frame_width + inner.x) * channels;
        let src_offset = ((dy + row) * padded.w + dx) * channels;
        data[dst_offset..dst_offset + inner.w * channels]
            .copy_from_slice(&roi[src_offset..src_offset + inner.w * channels]);
    }
}

/// The ROI grown by `margin` on every side, clipped to the frame.
pub fn padded_rect(rect: RoiRect, margin: usize, frame_width: usize, frame_height: usize) -> RoiRect {
    let x = rect.x.saturating_sub(margin);
    let y = rect.y.saturating_sub(margin);
    let x2 = (rect.x + rect.w + margin).min(frame_width);
    let y2 = (rect.y + rect.h + margin).min(frame_height);
    RoiRect {
        x,
        y,
        w: x2 - x,
        h: y2 - y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn blur(data: &mut [u8], width: usize, height: usize, channels: usize, kernel_size: usize) {
        let kernel = gaussian_kernel_1d(kernel_size);
        let mut temp = Vec::new();
        separable_gaussian_blur_with_kernel(data, width, height, channels, &kernel, &mut temp);
    }

    #[test]
    fn test_sigma_matches_opencv_rule() {
        assert_relative_eq!(sigma_for_kernel(75), 11.6, epsilon = 1e-9);
        assert_relative_eq!(sigma_for_kernel(3), 0.8, epsilon = 1e-9);
    }

    #[test]
    fn test_kernel_sums_to_one() {
        let k = gaussian_kernel_1d(75);
        let sum: f32 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_kernel_is_symmetric_with_peak_in_center() {
        let k = gaussian_kernel_1d(7);
        for i in 0..k.len() / 2 {
            assert!((k[i] - k[k.len() - 1 - i]).abs() < 1e-6);
            assert!(k[3] >= k[i]);
        }
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        assert_eq!(reflect_101(2, 5), 2);
        assert_eq!(reflect_101(-7, 1), 0);
        // Wider than the buffer: keeps bouncing until it lands inside
        assert_eq!(reflect_101(-9, 4), 3);
    }

    #[test]
    fn test_blur_uniform_image_unchanged() {
        let mut data = vec![128u8; 10 * 10 * 3];
        blur(&mut data, 10, 10, 3, 5);
        assert!(data.iter().all(|&v| (v as i32 - 128).abs() <= 1));
    }

    #[test]
    fn test_blur_spreads_single_bright_pixel() {
        let mut data = vec![0u8; 10 * 10 * 3];
        let cx = 5 * 10 + 5;
        data[cx * 3] = 255;

        blur(&mut data, 10, 10, 3, 5);

        assert!(data[cx * 3] < 255);
        assert!(data[(5 * 10 + 6) * 3] > 0);
        // Other channels stay dark
        assert_eq!(data[cx * 3 + 1], 0);
    }

    #[test]
    fn test_kernel_size_1_is_identity() {
        let mut data: Vec<u8> = (0..75).map(|v| v as u8).collect();
        let original = data.clone();
        blur(&mut data, 5, 5, 3, 1);
        assert_eq!(data, original);
    }

    #[test]
    fn test_kernel_larger_than_image() {
        let mut data = vec![0u8, 255, 0, 255, 0, 255];
        blur(&mut data, 6, 1, 1, 75);
        assert!(data.iter().all(|&v| v > 0 && v < 255));
    }

    #[test]
    fn test_padded_rect_clips_to_frame() {
        let rect = RoiRect { x: 2, y: 50, w: 10, h: 10 };
        let padded = padded_rect(rect, 5, 100, 58);
        assert_eq!(padded, RoiRect { x: 0, y: 45, w: 17, h: 13 });
    }

    #[test]
    fn test_extract_and_write_inner_back() {
        // 4x4 single-channel frame with values 0..16
        let mut data: Vec<u8> = (0..16).collect();
        let padded = RoiRect { x: 0, y: 0, w: 3, h: 3 };
        let inner = RoiRect { x: 1, y: 1, w: 1, h: 1 };
        let mut roi = Vec::new();
        extract_roi(&data, 4, 1, padded, &mut roi);
        assert_eq!(roi, vec![0, 1, 2, 4, 5, 6, 8, 9, 10]);

        roi.iter_mut().for_each(|v| *v = 99);
        write_inner_back(&mut data, &roi, 4, 1, padded, inner);
        assert_eq!(data[5], 99);
        assert_eq!(data.iter().filter(|&&v| v == 99).count(), 1);
    }
}
