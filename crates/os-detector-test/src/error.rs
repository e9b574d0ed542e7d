//! Test error types.

/// Result type alias for test operations.
pub type Result<T> = std::result::Result<T, TestError>;

/// Testing errors.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    /// Assertion failed.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// Detection error.
    #[error("detection error: {0}")]
    Detection(#[from] os_detector_core::DetectionError),
}

impl TestError {
    /// Creates an assertion error.
    #[must_use]
    pub fn assertion(msg: impl Into<String>) -> Self {
        Self::Assertion(msg.into())
    }
}
