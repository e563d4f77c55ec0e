//! Live face detection: capture frames from a camera, find faces with a
//! Haar cascade, outline, optionally blur and label them, and show the result.
//!
//! Domain traits carry no backend dependency. The OpenCV-backed capture,
//! detection, label and window implementations are compiled with the
//! `opencv` feature.

pub mod annotation {
    pub mod domain {
        pub mod face_annotator;
        pub mod label_layout;
        pub mod label_renderer;
        pub mod outline_drawer;
    }
    pub mod infrastructure {
        #[cfg(feature = "opencv")]
        pub mod hershey_label_renderer;
        pub mod raster_outline_drawer;
    }
}

pub mod blurring {
    pub mod domain {
        pub mod frame_blurrer;
    }
    pub mod infrastructure;
}

pub mod detection {
    pub mod domain {
        pub mod face_detector;
    }
    pub mod infrastructure;
}

pub mod display {
    pub mod domain {
        pub mod frame_display;
    }
    pub mod infrastructure {
        #[cfg(feature = "opencv")]
        pub mod highgui_display;
    }
}

pub mod pipeline {
    pub mod capture_backend;
    pub mod live_detection_error;
    pub mod live_detection_settings;
    pub mod live_detection_use_case;
    pub mod pipeline_logger;
    pub mod snapshot_use_case;
    pub mod infrastructure {
        #[cfg(feature = "opencv")]
        pub mod opencv_backend;
    }
}

pub mod shared {
    pub mod constants;
    pub mod frame;
    #[cfg(feature = "opencv")]
    pub mod opencv_mat;
    pub mod region;
}

pub mod video {
    pub mod domain {
        pub mod frame_source;
        pub mod image_writer;
    }
    pub mod infrastructure {
        pub mod image_file_writer;
        #[cfg(feature = "opencv")]
        pub mod opencv_camera;
    }
}
