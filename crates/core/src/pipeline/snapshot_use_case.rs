use std::path::Path;

use crate::video::domain::frame_source::FrameSource;
use crate::video::domain::image_writer::ImageWriter;

/// Single still capture: read one frame from the source → write it to disk.
pub struct SnapshotUseCase {
    source: Box<dyn FrameSource>,
    image_writer: Box<dyn ImageWriter>,
}

impl SnapshotUseCase {
    pub fn new(source: Box<dyn FrameSource>, image_writer: Box<dyn ImageWriter>) -> Self {
        Self {
            source,
            image_writer,
        }
    }

    /// Captures the next frame and writes it to `output_path`.
    ///
    /// Fails without writing anything if the device hands back an empty frame.
    pub fn execute(&mut self, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let frame = self.source.read()?;
        if frame.is_empty() {
            return Err(format!("frame {} is empty, nothing to save", frame.index()).into());
        }
        self.image_writer.write(output_path, &frame)?;
        log::info!(
            "Saved {}x{} snapshot to {}",
            frame.width(),
            frame.height(),
            output_path.display()
        );
        Ok(())
    }
}
