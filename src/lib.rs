//! os-detector: Operating System and CPU Architecture Detection
//!
//! Normalizes the host platform into a canonical vocabulary and a
//! classifier string (`linux-x86_64`, `osx-aarch_64`,
//! `linux-x86_64-fedora`) for selecting platform-specific artifacts.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use os_detector::prelude::*;
//!
//! let detector = Detector::host();
//! let detected = detector.detect(&["debian", "rhel"]);
//! println!("{}", detected.classifier());
//! ```

pub use os_detector_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use os_detector_core::{
        Architecture, Detected, DetectedProperties, DetectionError, Detector, DetectorConfig,
        FileOperations, LinuxRelease, Logger, OperatingSystem, SystemPropertyProvider,
    };
}
