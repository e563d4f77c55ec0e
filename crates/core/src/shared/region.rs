/// An axis-aligned face rectangle detected in one frame.
///
/// Regions carry no identity: they are produced fresh for every frame and
/// dropped with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Intersection with a `frame_width` x `frame_height` frame, or `None`
    /// when nothing of the region is visible.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> Option<Region> {
        let x1 = self.x.max(0);
        let y1 = self.y.max(0);
        let x2 = self.x.saturating_add(self.width).min(frame_width as i32);
        let y2 = self.y.saturating_add(self.height).min(frame_height as i32);
        let visible = Region::new(x1, y1, x2 - x1, y2 - y1);
        (!visible.is_empty()).then_some(visible)
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.width && py < self.y + self.height
    }
}
