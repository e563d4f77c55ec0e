use std::path::PathBuf;
use std::process;

use clap::Parser;

use facedet_core::pipeline::capture_backend::CaptureBackend;
use facedet_core::pipeline::live_detection_error::LiveDetectionError;
use facedet_core::pipeline::live_detection_settings::LiveDetectionSettings;
use facedet_core::pipeline::live_detection_use_case::LiveDetectionUseCase;
use facedet_core::pipeline::pipeline_logger::StdoutPipelineLogger;

/// Live webcam face detection with optional face blurring.
///
/// Opens the camera, outlines and labels every detected face, and shows the
/// result in a window until any key is pressed.
#[derive(Parser, Debug)]
#[command(name = "face-detect", allow_negative_numbers = true)]
struct Cli {
    /// Camera device index.
    device_id: i32,

    /// Haar cascade classifier file (e.g. haarcascade_frontalface_default.xml).
    classifier: PathBuf,

    /// 1 blurs detected faces, any other value leaves them sharp.
    blur_option: i32,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        println!("{e}");
        log::debug!("Stopped during {}: {e:?}", failure_stage(e.as_ref()));
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = LiveDetectionSettings::from_blur_option(cli.device_id, cli.classifier, cli.blur_option);

    let backend = capture_backend()?;
    let mut use_case = LiveDetectionUseCase::open(
        &settings,
        backend.as_ref(),
        Box::new(StdoutPipelineLogger::new()),
    )?;
    let stats = use_case.execute()?;

    log::info!(
        "Stopped on key {:?}: {} frames shown, {} empty, {} faces",
        stats.exit_key,
        stats.frames_shown,
        stats.empty_frames,
        stats.faces_detected
    );
    Ok(())
}

/// Which part of the run a fatal error came from, for the debug log.
fn failure_stage(err: &(dyn std::error::Error + 'static)) -> &'static str {
    match err.downcast_ref::<LiveDetectionError>() {
        Some(e) if e.is_startup() => "startup",
        Some(_) => "capture loop",
        None => "setup",
    }
}

#[cfg(feature = "opencv")]
fn capture_backend() -> Result<Box<dyn CaptureBackend>, Box<dyn std::error::Error>> {
    use facedet_core::detection::infrastructure::haar_cascade_detector::CascadeParams;
    use facedet_core::pipeline::infrastructure::opencv_backend::OpencvBackend;
    Ok(Box::new(OpencvBackend::new(CascadeParams::default())))
}

#[cfg(not(feature = "opencv"))]
fn capture_backend() -> Result<Box<dyn CaptureBackend>, Box<dyn std::error::Error>> {
    Err("no capture backend available: built without the `opencv` feature".into())
}
