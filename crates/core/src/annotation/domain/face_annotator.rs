use crate::annotation::domain::label_layout::label_origin;
use crate::annotation::domain::label_renderer::LabelRenderer;
use crate::annotation::domain::outline_drawer::OutlineDrawer;
use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::shared::constants::FACE_LABEL;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Marks detected faces on a frame: outline, optional blur, then a label,
/// region by region in detection order.
///
/// With blur on, the outline is drawn again over the blurred region so the
/// box stays crisp in the annotation color.
pub struct FaceAnnotator {
    outline: Box<dyn OutlineDrawer>,
    blurrer: Option<Box<dyn FrameBlurrer>>,
    labels: Box<dyn LabelRenderer>,
}

impl FaceAnnotator {
    /// `blurrer` is `None` when face blurring is disabled.
    pub fn new(
        outline: Box<dyn OutlineDrawer>,
        blurrer: Option<Box<dyn FrameBlurrer>>,
        labels: Box<dyn LabelRenderer>,
    ) -> Self {
        Self {
            outline,
            blurrer,
            labels,
        }
    }

    pub fn blurs(&self) -> bool {
        self.blurrer.is_some()
    }

    pub fn annotate(
        &self,
        frame: &mut Frame,
        regions: &[Region],
    ) -> Result<(), Box<dyn std::error::Error>> {
        for region in regions {
            self.outline.draw(frame, region)?;
            if let Some(blurrer) = &self.blurrer {
                blurrer.blur(frame, std::slice::from_ref(region))?;
                self.outline.draw(frame, region)?;
            }
            let size = self.labels.measure(FACE_LABEL)?;
            self.labels
                .render(frame, FACE_LABEL, label_origin(region, size.width))?;
        }
        Ok(())
    }
}
