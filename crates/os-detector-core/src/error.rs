//! Error types for os-detector-core.
//!
//! Detection itself degrades to `unknown` or "no release" wherever it can.
//! The only detection failure is an unresolvable OS or architecture when
//! `failOnUnknownOS` is enabled; everything else here belongs to
//! configuration loading.

/// Result type alias for detection operations.
pub type Result<T> = std::result::Result<T, DetectionError>;

/// Errors raised by the detector and its configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    /// `os.name` normalized to `unknown` while `failOnUnknownOS` is on.
    #[error("unknown os.name: {0}")]
    UnknownOs(String),

    /// `os.arch` normalized to `unknown` while `failOnUnknownOS` is on.
    #[error("unknown os.arch: {0}")]
    UnknownArch(String),

    /// Configuration could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DetectionError {
    /// Creates an unknown OS error carrying the raw `os.name` value.
    #[must_use]
    pub fn unknown_os(raw: impl Into<String>) -> Self {
        Self::UnknownOs(raw.into())
    }

    /// Creates an unknown architecture error carrying the raw `os.arch` value.
    #[must_use]
    pub fn unknown_arch(raw: impl Into<String>) -> Self {
        Self::UnknownArch(raw.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns true if this error reports an unresolvable platform.
    #[must_use]
    pub const fn is_unknown_platform(&self) -> bool {
        matches!(self, Self::UnknownOs(_) | Self::UnknownArch(_))
    }
}
