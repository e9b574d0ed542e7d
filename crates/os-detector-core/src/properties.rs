//! Output property keys and the materialized property set.
//!
//! The key names are a stable contract read by downstream build steps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Canonical OS name.
pub const DETECTED_NAME: &str = "os.detected.name";
/// Canonical architecture name.
pub const DETECTED_ARCH: &str = "os.detected.arch";
/// `"32"` or `"64"`.
pub const DETECTED_BITNESS: &str = "os.detected.bitness";
/// `<major>.<minor>` of the raw OS version.
pub const DETECTED_VERSION: &str = "os.detected.version";
/// Major component of [`DETECTED_VERSION`].
pub const DETECTED_VERSION_MAJOR: &str = "os.detected.version.major";
/// Minor component of [`DETECTED_VERSION`].
pub const DETECTED_VERSION_MINOR: &str = "os.detected.version.minor";
/// `<os>-<arch>[-<like>]`.
pub const DETECTED_CLASSIFIER: &str = "os.detected.classifier";
/// Linux distribution id.
pub const DETECTED_RELEASE: &str = "os.detected.release";
/// Linux distribution version.
pub const DETECTED_RELEASE_VERSION: &str = "os.detected.release.version";
/// Prefix of the `"true"`-valued keys naming each like-set member.
pub const DETECTED_RELEASE_LIKE_PREFIX: &str = "os.detected.release.like.";

/// Flat, ordered property set produced by
/// [`Detector::detect_properties`](crate::Detector::detect_properties).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectedProperties {
    entries: BTreeMap<String, String>,
}

impl DetectedProperties {
    /// Creates an empty property set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns the value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Canonical OS name.
    #[must_use]
    pub fn os(&self) -> Option<&str> {
        self.get(DETECTED_NAME)
    }

    /// Canonical architecture name.
    #[must_use]
    pub fn arch(&self) -> Option<&str> {
        self.get(DETECTED_ARCH)
    }

    /// Detected bitness.
    #[must_use]
    pub fn bitness(&self) -> Option<u32> {
        self.get(DETECTED_BITNESS).and_then(|b| b.parse().ok())
    }

    /// Composed classifier.
    #[must_use]
    pub fn classifier(&self) -> Option<&str> {
        self.get(DETECTED_CLASSIFIER)
    }

    /// Linux release information, present only when a release was resolved.
    #[must_use]
    pub fn release(&self) -> Option<ReleaseView<'_>> {
        self.contains_key(DETECTED_RELEASE)
            .then_some(ReleaseView { props: self })
    }
}

impl<'a> IntoIterator for &'a DetectedProperties {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Read-only view of the release keys in a [`DetectedProperties`].
#[derive(Debug, Clone, Copy)]
pub struct ReleaseView<'a> {
    props: &'a DetectedProperties,
}

impl<'a> ReleaseView<'a> {
    /// Release id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        self.props.get(DETECTED_RELEASE).unwrap_or_default()
    }

    /// Release version, if known.
    #[must_use]
    pub fn version(&self) -> Option<&'a str> {
        self.props.get(DETECTED_RELEASE_VERSION)
    }

    /// Returns true if this release is a variant of `base` (ubuntu is like
    /// debian).
    #[must_use]
    pub fn is_like(&self, base: &str) -> bool {
        self.props
            .contains_key(&format!("{DETECTED_RELEASE_LIKE_PREFIX}{base}"))
    }
}

/// Splits a raw OS version into `(major, minor)` when it starts with
/// `<digits>.<digits>`.
#[must_use]
pub fn parse_major_minor(version: &str) -> Option<(&str, &str)> {
    let (major, rest) = split_digits(version)?;
    let rest = rest.strip_prefix('.')?;
    let (minor, _) = split_digits(rest)?;
    Some((major, minor))
}

fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then(|| s.split_at(end))
}
