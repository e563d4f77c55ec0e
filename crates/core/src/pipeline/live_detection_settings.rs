use std::path::PathBuf;

use crate::shared::constants::BLUR_ENABLED_OPTION;

/// What to capture from and how to treat detected faces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveDetectionSettings {
    pub device_id: i32,
    pub model_path: PathBuf,
    pub blur: bool,
}

impl LiveDetectionSettings {
    pub fn new(device_id: i32, model_path: impl Into<PathBuf>, blur: bool) -> Self {
        Self {
            device_id,
            model_path: model_path.into(),
            blur,
        }
    }

    /// Builds settings from the numeric blur option used on the command line:
    /// `1` enables blurring, any other value disables it.
    pub fn from_blur_option(device_id: i32, model_path: impl Into<PathBuf>, blur_option: i32) -> Self {
        Self::new(device_id, model_path, blur_option == BLUR_ENABLED_OPTION)
    }
}
