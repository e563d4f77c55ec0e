use std::path::Path;

use opencv::core::{Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::bgr_from_frame;
use crate::shared::region::Region;

/// Multi-scale search parameters passed to `detectMultiScale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CascadeParams {
    pub scale_factor: f64,
    pub min_neighbors: i32,
    pub flags: i32,
    /// `(0, 0)` leaves the bound open.
    pub min_size: (i32, i32),
    pub max_size: (i32, i32),
}

impl Default for CascadeParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 3,
            flags: 0,
            min_size: (0, 0),
            max_size: (0, 0),
        }
    }
}

/// Frontal-face detector backed by a pretrained Haar cascade file.
pub struct HaarCascadeDetector {
    classifier: CascadeClassifier,
    params: CascadeParams,
    hits: Vector<Rect>,
}

impl HaarCascadeDetector {
    pub fn load(path: &Path, params: CascadeParams) -> Result<Self, Box<dyn std::error::Error>> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("cascade path is not valid UTF-8: {}", path.display()))?;
        let mut classifier = CascadeClassifier::default()?;
        if !classifier.load(path_str)? {
            return Err(format!("no cascade could be parsed from {}", path.display()).into());
        }
        log::info!("Loaded Haar cascade from {}", path.display());
        Ok(Self {
            classifier,
            params,
            hits: Vector::new(),
        })
    }
}

impl FaceDetector for HaarCascadeDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let image = bgr_from_frame(frame)?;
        self.hits.clear();
        self.classifier.detect_multi_scale(
            &image,
            &mut self.hits,
            self.params.scale_factor,
            self.params.min_neighbors,
            self.params.flags,
            Size::new(self.params.min_size.0, self.params.min_size.1),
            Size::new(self.params.max_size.0, self.params.max_size.1),
        )?;
        Ok(self
            .hits
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect())
    }
}
