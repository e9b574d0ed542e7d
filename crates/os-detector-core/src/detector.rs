//! Detection orchestration.
//!
//! [`Detector::detect`] reads `os.name`, `os.arch` and `os.version`,
//! normalizes them, resolves the Linux release when running on Linux, and
//! composes the classifier. [`Detector::detect_properties`] additionally
//! publishes the result under the `os.detected.*` keys.

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};
use crate::normalize::{determine_bitness, normalize_arch, normalize_os};
use crate::properties::{
    DETECTED_ARCH, DETECTED_BITNESS, DETECTED_CLASSIFIER, DETECTED_NAME, DETECTED_RELEASE,
    DETECTED_RELEASE_LIKE_PREFIX, DETECTED_RELEASE_VERSION, DETECTED_VERSION,
    DETECTED_VERSION_MAJOR, DETECTED_VERSION_MINOR, DetectedProperties, parse_major_minor,
};
use crate::provider::{
    FileOperations, HostFileOperations, HostSystemProperties, Logger, OS_ARCH, OS_NAME,
    OS_VERSION, SystemPropertyProvider, TracingLogger,
};
use crate::release::{LinuxRelease, resolve_linux_release};
use crate::types::{Architecture, OperatingSystem};

/// Switch controlling whether an unknown OS or architecture is fatal.
/// Anything other than `"false"` (case-insensitive) keeps it on.
pub const FAIL_ON_UNKNOWN_OS: &str = "failOnUnknownOS";

const BANNER: &str = "------------------------------------------------------------------------";

/// Result of one detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detected {
    bitness: u32,
    version: String,
    classifier: String,
    os: OperatingSystem,
    arch: Architecture,
    linux_release: Option<LinuxRelease>,
}

impl Detected {
    /// Pointer width, normally 32 or 64.
    #[must_use]
    pub const fn bitness(&self) -> u32 {
        self.bitness
    }

    /// Raw `os.version`, empty if unavailable.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// `<os>-<arch>[-<like>]`.
    #[must_use]
    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    /// Normalized operating system.
    #[must_use]
    pub const fn os(&self) -> OperatingSystem {
        self.os
    }

    /// Normalized architecture.
    #[must_use]
    pub const fn arch(&self) -> Architecture {
        self.arch
    }

    /// Resolved Linux release, only ever present on Linux.
    #[must_use]
    pub const fn linux_release(&self) -> Option<&LinuxRelease> {
        self.linux_release.as_ref()
    }
}

/// Operating system and architecture detector.
///
/// Holds no state between calls; every detection re-reads its inputs and
/// builds a fresh [`Detected`].
pub struct Detector {
    props: Box<dyn SystemPropertyProvider>,
    files: Box<dyn FileOperations>,
    logger: Box<dyn Logger>,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector").finish_non_exhaustive()
    }
}

impl Detector {
    /// Creates a detector over the given capabilities.
    pub fn new(
        props: impl SystemPropertyProvider + 'static,
        files: impl FileOperations + 'static,
        logger: impl Logger + 'static,
    ) -> Self {
        Self {
            props: Box::new(props),
            files: Box::new(files),
            logger: Box::new(logger),
        }
    }

    /// Creates a detector for the running host, logging through `tracing`.
    #[must_use]
    pub fn host() -> Self {
        Self::with_logger(TracingLogger)
    }

    /// Creates a detector for the running host with a custom logger.
    pub fn with_logger(logger: impl Logger + 'static) -> Self {
        Self::new(HostSystemProperties::new(), HostFileOperations, logger)
    }

    /// Property accessor this detector reads from and mirrors into.
    #[must_use]
    pub fn system_properties(&self) -> &dyn SystemPropertyProvider {
        self.props.as_ref()
    }

    /// Detects without any classifier "like" preference.
    #[must_use]
    pub fn detect_default(&self) -> Detected {
        self.detect::<&str>(&[])
    }

    /// Detects the platform.
    ///
    /// On Linux, the first entry of `likes` that the resolved release is
    /// like is appended to the classifier. Later entries are ignored once
    /// one matches, so `likes` expresses a preference order.
    pub fn detect<S: AsRef<str>>(&self, likes: &[S]) -> Detected {
        let os_name = self.props.get(OS_NAME);
        let os_arch = self.props.get(OS_ARCH);
        let version = self.props.get(OS_VERSION).unwrap_or_default();

        let os = normalize_os(os_name.as_deref());
        let arch = normalize_arch(os_arch.as_deref());
        let bitness = determine_bitness(self.props.as_ref(), arch);

        let mut classifier = format!("{os}-{arch}");

        let linux_release = if os == OperatingSystem::Linux {
            resolve_linux_release(self.files.as_ref())
        } else {
            None
        };

        if let Some(release) = &linux_release {
            // First one wins.
            if let Some(like) = likes
                .iter()
                .map(|like| like.as_ref())
                .find(|like| release.is_like(like))
            {
                classifier.push('-');
                classifier.push_str(like);
            }
        }

        tracing::debug!(
            os = %os,
            arch = %arch,
            bitness,
            classifier = %classifier,
            release = linux_release.as_ref().map(LinuxRelease::id),
            "platform detected"
        );

        Detected {
            bitness,
            version,
            classifier,
            os,
            arch,
            linux_release,
        }
    }

    /// Detects the platform and publishes it into `out`.
    ///
    /// Every key written to `out` is mirrored through the property
    /// accessor and logged. Keys are written in a fixed order; on failure
    /// the keys written before the check remain in `out`.
    ///
    /// # Errors
    /// Unless `failOnUnknownOS` is `"false"`, returns
    /// [`DetectionError::UnknownOs`] or [`DetectionError::UnknownArch`]
    /// carrying the raw value that could not be normalized.
    pub fn detect_properties<S: AsRef<str>>(
        &self,
        out: &mut DetectedProperties,
        likes: &[S],
    ) -> Result<()> {
        self.logger.info(BANNER);
        self.logger
            .info("Detecting the operating system and CPU architecture");
        self.logger.info(BANNER);

        let detected = self.detect(likes);

        self.publish(out, DETECTED_NAME, detected.os.name());
        self.publish(out, DETECTED_ARCH, detected.arch.name());
        self.publish(out, DETECTED_BITNESS, &detected.bitness.to_string());

        if let Some((major, minor)) = parse_major_minor(&detected.version) {
            self.publish(out, DETECTED_VERSION, &format!("{major}.{minor}"));
            self.publish(out, DETECTED_VERSION_MAJOR, major);
            self.publish(out, DETECTED_VERSION_MINOR, minor);
        }

        if self.fail_on_unknown_os() {
            if detected.os.is_unknown() {
                let raw = self.props.get(OS_NAME).unwrap_or_default();
                return Err(DetectionError::unknown_os(raw));
            }
            if detected.arch.is_unknown() {
                let raw = self.props.get(OS_ARCH).unwrap_or_default();
                return Err(DetectionError::unknown_arch(raw));
            }
        }

        if let Some(release) = &detected.linux_release {
            self.publish(out, DETECTED_RELEASE, release.id());
            if let Some(version) = release.version() {
                self.publish(out, DETECTED_RELEASE_VERSION, version);
            }
            for like in release.like() {
                let key = format!("{DETECTED_RELEASE_LIKE_PREFIX}{like}");
                self.publish(out, &key, "true");
            }
        }

        self.publish(out, DETECTED_CLASSIFIER, &detected.classifier);
        Ok(())
    }

    /// Whether an unknown OS or architecture fails [`detect_properties`].
    ///
    /// [`detect_properties`]: Self::detect_properties
    #[must_use]
    pub fn fail_on_unknown_os(&self) -> bool {
        self.props
            .get(FAIL_ON_UNKNOWN_OS)
            .is_none_or(|v| !v.eq_ignore_ascii_case("false"))
    }

    fn publish(&self, out: &mut DetectedProperties, name: &str, value: &str) {
        out.insert(name, value);
        self.props.set(name, value);
        self.logger.info(&format!("{name}: {value}"));
    }
}
