//! Detector configuration.
//!
//! Configuration is validated at load time, with defaults that match an
//! unconfigured build: no classifier "like" preference and
//! `failOnUnknownOS` left to the property accessor (on by default).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::detector::FAIL_ON_UNKNOWN_OS;
use crate::error::{DetectionError, Result};
use crate::provider::SystemPropertyProvider;

/// Property holding a comma-separated classifier "like" preference list.
pub const CLASSIFIER_WITH_LIKES_PROPERTY: &str = "os.detection.classifierWithLikes";

/// Detector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DetectorConfig {
    /// Distribution families to try appending to the classifier, in
    /// preference order.
    #[serde(default)]
    pub classifier_with_likes: Vec<String>,

    /// Overrides `failOnUnknownOS` when set.
    #[serde(default)]
    pub fail_on_unknown_os: Option<bool>,
}

impl DetectorConfig {
    /// Reads configuration from a property accessor.
    #[must_use]
    pub fn from_properties(props: &dyn SystemPropertyProvider) -> Self {
        Self {
            classifier_with_likes: parse_classifier_with_likes(
                props.get(CLASSIFIER_WITH_LIKES_PROPERTY).as_deref(),
            ),
            fail_on_unknown_os: props
                .get(FAIL_ON_UNKNOWN_OS)
                .map(|v| !v.eq_ignore_ascii_case("false")),
        }
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed or validated.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| DetectionError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if a like entry is empty or contains whitespace or
    /// a comma.
    pub fn validate(&self) -> Result<()> {
        for like in &self.classifier_with_likes {
            if like.is_empty() {
                return Err(DetectionError::config(
                    "classifier-with-likes entries cannot be empty",
                ));
            }
            if like.chars().any(|c| c.is_whitespace() || c == ',') {
                return Err(DetectionError::config(format!(
                    "invalid classifier-with-likes entry: {like:?}"
                )));
            }
        }
        Ok(())
    }

    /// Appends likes from another source, skipping ones already present.
    pub fn merge_likes<I, S>(&mut self, likes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for like in likes {
            let like = like.into();
            if !self.classifier_with_likes.contains(&like) {
                self.classifier_with_likes.push(like);
            }
        }
    }

    /// Publishes `failOnUnknownOS` to the accessor when configured.
    pub fn apply(&self, props: &dyn SystemPropertyProvider) {
        if let Some(fail) = self.fail_on_unknown_os {
            props.set(FAIL_ON_UNKNOWN_OS, if fail { "true" } else { "false" });
        }
    }
}

/// Splits a comma-separated like list, trimming entries and dropping
/// empty ones.
#[must_use]
pub fn parse_classifier_with_likes(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
