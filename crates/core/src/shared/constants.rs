pub const WINDOW_TITLE: &str = "Face Detect";

pub const FACE_LABEL: &str = "Human - Face";

/// Outline and label color (RGB).
pub const ANNOTATION_COLOR: [u8; 3] = [0, 255, 0];

pub const OUTLINE_THICKNESS: u32 = 3;

/// Gaussian kernel edge length used when blurring faces.
pub const BLUR_KERNEL_SIZE: usize = 75;

pub const LABEL_FONT_SCALE: f64 = 1.2;
pub const LABEL_THICKNESS: i32 = 2;

/// Pixels between the label baseline and the top edge of the face.
pub const LABEL_BASELINE_GAP: i32 = 2;

/// How long the display waits for a key press each frame.
pub const KEY_POLL_MS: i32 = 1;

/// Value of the blur argument that turns face blurring on.
pub const BLUR_ENABLED_OPTION: i32 = 1;
