use ndarray::{s, ArrayView3};

use crate::shared::region::Region;

/// One image pulled from a capture device, stored as packed RGB rows.
///
/// A frame may hold zero pixels: cameras occasionally deliver nothing while
/// warming up or between hiccups, and the loop skips such frames.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    /// What a device read yields when no image data arrived.
    pub fn empty(index: usize) -> Self {
        Self::new(Vec::new(), 0, 0, 3, index)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Position of this frame in its source's read sequence, empty reads included.
    pub fn index(&self) -> usize {
        self.index
    }

    /// (height, width, channels) view over the pixel buffer.
    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        let shape = (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        );
        ArrayView3::from_shape(shape, &self.data).expect("Frame data length must match dimensions")
    }

    /// The three color bytes at column `x`, row `y`, or `None` off-frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height || self.channels < 3 {
            return None;
        }
        let px = self.as_ndarray().slice_move(s![y as usize, x as usize, ..3]);
        Some([px[0], px[1], px[2]])
    }

    /// View of the part of `region` that lies on this frame.
    pub fn crop(&self, region: &Region) -> Option<ArrayView3<'_, u8>> {
        let visible = region.clamp_to(self.width, self.height)?;
        let (x, y) = (visible.x as usize, visible.y as usize);
        let (w, h) = (visible.width as usize, visible.height as usize);
        Some(self.as_ndarray().slice_move(s![y..y + h, x..x + w, ..]))
    }
}
