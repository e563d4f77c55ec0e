use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Draws a rectangle outline around one detected region.
pub trait OutlineDrawer {
    fn draw(&self, frame: &mut Frame, region: &Region) -> Result<(), Box<dyn std::error::Error>>;
}
