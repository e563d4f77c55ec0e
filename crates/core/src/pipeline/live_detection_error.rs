use std::path::PathBuf;

use thiserror::Error;

/// Why a live detection run could not start or had to stop.
///
/// Every variant is fatal; nothing is retried.
#[derive(Error, Debug)]
pub enum LiveDetectionError {
    #[error("cannot open device {device}: {source}")]
    DeviceOpen {
        device: i32,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("Error reading cascade file: {}", path.display())]
    ClassifierLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("cannot read device {device}")]
    DeviceRead {
        device: i32,
        #[source]
        source: Box<dyn std::error::Error>,
    },
    #[error("face detection failed: {0}")]
    Detection(#[source] Box<dyn std::error::Error>),
    #[error("annotation failed: {0}")]
    Annotation(#[source] Box<dyn std::error::Error>),
    #[error("display failed: {0}")]
    Display(#[source] Box<dyn std::error::Error>),
}

impl LiveDetectionError {
    /// True for failures that happen before the first frame is read.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            LiveDetectionError::DeviceOpen { .. } | LiveDetectionError::ClassifierLoad { .. }
        )
    }
}
