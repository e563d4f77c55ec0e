use std::time::Instant;

use crate::annotation::domain::face_annotator::FaceAnnotator;
use crate::annotation::infrastructure::raster_outline_drawer::RasterOutlineDrawer;
use crate::blurring::domain::frame_blurrer::FrameBlurrer;
use crate::blurring::infrastructure::cpu_rectangular_blurrer::CpuRectangularBlurrer;
use crate::detection::domain::face_detector::FaceDetector;
use crate::display::domain::frame_display::FrameDisplay;
use crate::pipeline::capture_backend::CaptureBackend;
use crate::pipeline::live_detection_error::LiveDetectionError;
use crate::pipeline::live_detection_settings::LiveDetectionSettings;
use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::constants::{KEY_POLL_MS, WINDOW_TITLE};
use crate::video::domain::frame_source::FrameSource;

/// Counters reported when a run ends on a key press.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub frames_shown: usize,
    pub empty_frames: usize,
    pub faces_detected: usize,
    pub exit_key: Option<i32>,
}

/// Live pipeline: capture → detect → annotate → display, until a key is pressed.
///
/// Owns every resource it uses; they are released when the use case is
/// dropped, whichever way the run ended.
pub struct LiveDetectionUseCase {
    device_id: i32,
    source: Box<dyn FrameSource>,
    detector: Box<dyn FaceDetector>,
    annotator: FaceAnnotator,
    display: Box<dyn FrameDisplay>,
    logger: Box<dyn PipelineLogger>,
}

impl LiveDetectionUseCase {
    pub fn new(
        device_id: i32,
        source: Box<dyn FrameSource>,
        detector: Box<dyn FaceDetector>,
        annotator: FaceAnnotator,
        display: Box<dyn FrameDisplay>,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            device_id,
            source,
            detector,
            annotator,
            display,
            logger,
        }
    }

    /// Acquires all resources from `backend` in startup order: device,
    /// classifier, label font, window.
    ///
    /// A failure drops whatever was already acquired, so a bad classifier
    /// path never opens a window and leaves the device released.
    pub fn open(
        settings: &LiveDetectionSettings,
        backend: &dyn CaptureBackend,
        logger: Box<dyn PipelineLogger>,
    ) -> Result<Self, LiveDetectionError> {
        let source = backend
            .open_source(settings.device_id)
            .map_err(|source| LiveDetectionError::DeviceOpen {
                device: settings.device_id,
                source,
            })?;

        let detector = backend
            .load_detector(&settings.model_path)
            .map_err(|source| LiveDetectionError::ClassifierLoad {
                path: settings.model_path.clone(),
                source,
            })?;

        let labels = backend
            .label_renderer()
            .map_err(LiveDetectionError::Annotation)?;
        let blurrer: Option<Box<dyn FrameBlurrer>> = if settings.blur {
            Some(Box::new(CpuRectangularBlurrer::default()))
        } else {
            None
        };
        let annotator = FaceAnnotator::new(Box::new(RasterOutlineDrawer::default()), blurrer, labels);

        let display = backend
            .open_display(WINDOW_TITLE)
            .map_err(LiveDetectionError::Display)?;

        log::info!(
            "Ready: device {}, cascade {}, blur {}",
            settings.device_id,
            settings.model_path.display(),
            if settings.blur { "on" } else { "off" }
        );

        Ok(Self::new(
            settings.device_id,
            source,
            detector,
            annotator,
            display,
            logger,
        ))
    }

    pub fn blurs_faces(&self) -> bool {
        self.annotator.blurs()
    }

    /// Runs until a key is pressed (`Ok`) or a capability fails (`Err`).
    pub fn execute(&mut self) -> Result<RunStats, LiveDetectionError> {
        self.logger
            .info(&format!("start reading camera device: {}", self.device_id));
        let result = self.run_loop();
        self.logger.summary();
        result
    }

    fn run_loop(&mut self) -> Result<RunStats, LiveDetectionError> {
        let mut stats = RunStats::default();
        loop {
            let mut frame = self
                .source
                .read()
                .map_err(|source| LiveDetectionError::DeviceRead {
                    device: self.device_id,
                    source,
                })?;

            if frame.is_empty() {
                stats.empty_frames += 1;
                self.logger.info(&format!(
                    "empty image on device {}...continuing...",
                    self.device_id
                ));
                continue;
            }

            let started = Instant::now();
            let regions = self
                .detector
                .detect(&frame)
                .map_err(LiveDetectionError::Detection)?;
            self.logger.timing("detect", elapsed_ms(started));
            self.logger.metric("faces", regions.len() as f64);
            if !regions.is_empty() {
                self.logger
                    .info(&format!("{} face(s) found...", regions.len()));
            }
            stats.faces_detected += regions.len();

            let started = Instant::now();
            self.annotator
                .annotate(&mut frame, &regions)
                .map_err(LiveDetectionError::Annotation)?;
            self.logger.timing("annotate", elapsed_ms(started));

            self.display
                .show(&frame)
                .map_err(LiveDetectionError::Display)?;
            stats.frames_shown += 1;

            if let Some(key) = self
                .display
                .poll_key(KEY_POLL_MS)
                .map_err(LiveDetectionError::Display)?
            {
                log::debug!("Key {key} pressed after frame {}", frame.index());
                stats.exit_key = Some(key);
                return Ok(stats);
            }
        }
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
