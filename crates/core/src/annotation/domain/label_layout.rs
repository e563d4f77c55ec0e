use crate::shared::constants::LABEL_BASELINE_GAP;
use crate::shared::region::Region;

/// Baseline origin for a region's label of measured width `label_width`.
///
/// Horizontal position is `x + x/2 - w/2` with truncating division. This
/// offsets by half the region's *x origin*, not half its width, so labels
/// drift right on faces far from the left edge.
pub fn label_origin(region: &Region, label_width: i32) -> (i32, i32) {
    let x = region.x + region.x / 2 - label_width / 2;
    let y = region.y - LABEL_BASELINE_GAP;
    (x, y)
}
