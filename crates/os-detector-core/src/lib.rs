// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # os-detector-core
//!
//! Operating system and CPU architecture detection for build tooling.
//!
//! This crate turns the raw, vendor-specific platform identity of a host
//! into a small canonical vocabulary and a classifier string such as
//! `linux-x86_64` or `linux-aarch_64-fedora`:
//!
//! - [`normalize_os`] and [`normalize_arch`] map free-form names onto
//!   [`OperatingSystem`] and [`Architecture`]
//! - [`resolve_linux_release`] reads `/etc/os-release` (or
//!   `/etc/redhat-release`) into a [`LinuxRelease`]
//! - [`Detector`] orchestrates detection and publishes the
//!   `os.detected.*` [`DetectedProperties`]
//! - [`DetectorConfig`] carries classifier "like" preferences from TOML
//!   or from properties
//!
//! All host access goes through the [`SystemPropertyProvider`],
//! [`FileOperations`] and [`Logger`] capabilities, so detection is
//! deterministic under test.
//!
//! ## Example
//!
//! ```rust,no_run
//! use os_detector_core::{DetectedProperties, Detector};
//!
//! let detector = Detector::host();
//! let mut props = DetectedProperties::new();
//! detector.detect_properties(&mut props, &["debian", "rhel"])?;
//! println!("{}", props.classifier().unwrap_or_default());
//! # Ok::<(), os_detector_core::DetectionError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod detector;
pub mod error;
pub mod normalize;
pub mod properties;
pub mod provider;
pub mod release;
pub mod types;

pub use config::{CLASSIFIER_WITH_LIKES_PROPERTY, DetectorConfig, parse_classifier_with_likes};
pub use detector::{Detected, Detector, FAIL_ON_UNKNOWN_OS};
pub use error::{DetectionError, Result};
pub use normalize::{
    canonicalize, determine_bitness, guess_bitness_from_architecture, normalize_arch,
    normalize_os,
};
pub use properties::{
    DETECTED_ARCH, DETECTED_BITNESS, DETECTED_CLASSIFIER, DETECTED_NAME, DETECTED_RELEASE,
    DETECTED_RELEASE_LIKE_PREFIX, DETECTED_RELEASE_VERSION, DETECTED_VERSION,
    DETECTED_VERSION_MAJOR, DETECTED_VERSION_MINOR, DetectedProperties, ReleaseView,
};
pub use provider::{
    FileOperations, HostFileOperations, HostSystemProperties, Logger, NoopLogger, OS_ARCH,
    OS_NAME, OS_VERSION, SystemPropertyProvider, TracingLogger,
};
pub use release::{LinuxRelease, resolve_linux_release};
pub use types::{Architecture, OperatingSystem};
