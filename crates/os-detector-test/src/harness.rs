//! Detector test harness.
//!
//! Builds a [`Detector`] over in-memory fakes so a host can be described
//! declaratively and detection observed end to end.

use os_detector_core::release::{OS_RELEASE_FILES, REDHAT_RELEASE_FILE};
use os_detector_core::{
    DetectedProperties, Detector, FAIL_ON_UNKNOWN_OS, OS_ARCH, OS_NAME, OS_VERSION,
};

use crate::error::{Result, TestError};
use crate::fakes::{FakeFileOperations, FakeSystemProperties, RecordingLogger};

/// Test harness for detection runs.
#[derive(Debug, Clone)]
pub struct DetectorTestHarness {
    props: FakeSystemProperties,
    files: FakeFileOperations,
    logger: RecordingLogger,
}

impl DetectorTestHarness {
    /// Creates a new test harness builder.
    #[must_use]
    pub fn builder() -> DetectorTestHarnessBuilder {
        DetectorTestHarnessBuilder::default()
    }

    /// Creates a detector sharing this harness's fakes.
    #[must_use]
    pub fn detector(&self) -> Detector {
        Detector::new(
            self.props.clone(),
            self.files.clone(),
            self.logger.clone(),
        )
    }

    /// Property store the detector reads and mirrors into.
    #[must_use]
    pub const fn properties(&self) -> &FakeSystemProperties {
        &self.props
    }

    /// File system the detector reads release files from.
    #[must_use]
    pub const fn files(&self) -> &FakeFileOperations {
        &self.files
    }

    /// Logger the detector narrates through.
    #[must_use]
    pub const fn logger(&self) -> &RecordingLogger {
        &self.logger
    }

    /// Runs [`Detector::detect_properties`] into a fresh property set.
    ///
    /// # Errors
    /// Returns the detection error, if any.
    pub fn detect_properties<S: AsRef<str>>(&self, likes: &[S]) -> Result<DetectedProperties> {
        let mut out = DetectedProperties::new();
        self.detector().detect_properties(&mut out, likes)?;
        Ok(out)
    }

    /// Asserts the published classifier.
    ///
    /// # Errors
    /// Returns an assertion error on mismatch, or the detection error.
    pub fn assert_classifier<S: AsRef<str>>(&self, likes: &[S], expected: &str) -> Result<()> {
        let out = self.detect_properties(likes)?;
        match out.classifier() {
            Some(actual) if actual == expected => Ok(()),
            actual => Err(TestError::assertion(format!(
                "expected classifier {expected:?}, got {actual:?}"
            ))),
        }
    }
}

/// Builder for test harness.
#[derive(Debug, Default)]
pub struct DetectorTestHarnessBuilder {
    props: FakeSystemProperties,
    files: FakeFileOperations,
}

impl DetectorTestHarnessBuilder {
    /// Sets `os.name`.
    #[must_use]
    pub fn with_os_name(self, name: &str) -> Self {
        self.with_property(OS_NAME, name)
    }

    /// Sets `os.arch`.
    #[must_use]
    pub fn with_os_arch(self, arch: &str) -> Self {
        self.with_property(OS_ARCH, arch)
    }

    /// Sets `os.version`.
    #[must_use]
    pub fn with_os_version(self, version: &str) -> Self {
        self.with_property(OS_VERSION, version)
    }

    /// Sets `failOnUnknownOS`.
    #[must_use]
    pub fn with_fail_on_unknown_os(self, fail: bool) -> Self {
        self.with_property(FAIL_ON_UNKNOWN_OS, if fail { "true" } else { "false" })
    }

    /// Sets an arbitrary property.
    #[must_use]
    pub fn with_property(mut self, name: &str, value: &str) -> Self {
        self.props = self.props.with(name, value);
        self
    }

    /// Provides `/etc/os-release`.
    #[must_use]
    pub fn with_os_release(mut self, content: &str) -> Self {
        self.files = self.files.with_file(OS_RELEASE_FILES[0], content);
        self
    }

    /// Provides `/usr/lib/os-release`.
    #[must_use]
    pub fn with_usr_lib_os_release(mut self, content: &str) -> Self {
        self.files = self.files.with_file(OS_RELEASE_FILES[1], content);
        self
    }

    /// Provides `/etc/redhat-release`.
    #[must_use]
    pub fn with_redhat_release(mut self, content: &str) -> Self {
        self.files = self.files.with_file(REDHAT_RELEASE_FILE, content);
        self
    }

    /// Provides an arbitrary file as raw bytes.
    #[must_use]
    pub fn with_file(mut self, path: &str, content: impl Into<Vec<u8>>) -> Self {
        self.files = self.files.with_file(path, content);
        self
    }

    /// Makes opening `path` fail with permission denied.
    #[must_use]
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.files = self
            .files
            .with_error(path, std::io::ErrorKind::PermissionDenied);
        self
    }

    /// Builds the test harness.
    #[must_use]
    pub fn build(self) -> DetectorTestHarness {
        DetectorTestHarness {
            props: self.props,
            files: self.files,
            logger: RecordingLogger::new(),
        }
    }
}
