use crate::shared::frame::Frame;

/// Rendered extent of a text string, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

/// Measures and draws text labels in one fixed font, scale and color.
pub trait LabelRenderer {
    fn measure(&self, text: &str) -> Result<TextSize, Box<dyn std::error::Error>>;

    /// Draws `text` with its baseline starting at `origin` (x, y).
    fn render(
        &self,
        frame: &mut Frame,
        text: &str,
        origin: (i32, i32),
    ) -> Result<(), Box<dyn std::error::Error>>;
}
