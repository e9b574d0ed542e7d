//! Linux distribution identification.
//!
//! # Resolution Order
//! 1. `/etc/os-release`
//! 2. `/usr/lib/os-release`
//! 3. `/etc/redhat-release` (legacy Red Hat family systems)
//!
//! A missing, unreadable, or unrecognized file is absence of evidence, not
//! an error: resolution moves on to the next candidate and ends in `None`.

use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::provider::FileOperations;

/// os-release files, in priority order.
pub const OS_RELEASE_FILES: [&str; 2] = ["/etc/os-release", "/usr/lib/os-release"];

/// Legacy Red Hat release file.
pub const REDHAT_RELEASE_FILE: &str = "/etc/redhat-release";

const ID_PREFIX: &str = "ID=";
const ID_LIKE_PREFIX: &str = "ID_LIKE=";
const VERSION_ID_PREFIX: &str = "VERSION_ID=";

/// Every legacy Red Hat family release is "like" these.
const DEFAULT_REDHAT_VARIANTS: [&str; 2] = ["rhel", "fedora"];

/// Substring of the lower-cased redhat-release line, and the id it implies.
const REDHAT_VARIANTS: [(&str, &str); 3] = [
    ("centos", "centos"),
    ("fedora", "fedora"),
    ("red hat enterprise linux", "rhel"),
];

/// A resolved Linux distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxRelease {
    id: String,
    version: Option<String>,
    like: IndexSet<String>,
}

impl LinuxRelease {
    /// Distribution id, e.g. `"ubuntu"`. Never empty.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Distribution version, e.g. `"22.04"`.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Distributions this release is compatible with, in declaration order.
    /// Includes the release's own id.
    #[must_use]
    pub const fn like(&self) -> &IndexSet<String> {
        &self.like
    }

    /// Returns true if this release is, or is like, `base`.
    #[must_use]
    pub fn is_like(&self, base: &str) -> bool {
        self.like.contains(base)
    }
}

/// Resolves the running distribution from its release files.
#[must_use]
pub fn resolve_linux_release(files: &dyn FileOperations) -> Option<LinuxRelease> {
    for path in OS_RELEASE_FILES {
        if let Some(release) = read_with(files, path, parse_os_release) {
            tracing::debug!(path, id = release.id(), "resolved linux release");
            return Some(release);
        }
    }

    let release = read_with(files, REDHAT_RELEASE_FILE, parse_redhat_release);
    if let Some(release) = &release {
        tracing::debug!(path = REDHAT_RELEASE_FILE, id = release.id(), "resolved linux release");
    }
    release
}

fn read_with(
    files: &dyn FileOperations,
    path: &str,
    parse: fn(&mut dyn BufRead) -> std::io::Result<Option<LinuxRelease>>,
) -> Option<LinuxRelease> {
    let result = files
        .read_file(Path::new(path))
        .and_then(|reader| parse(&mut BufReader::new(reader)));
    match result {
        Ok(release) => release,
        Err(e) => {
            tracing::debug!(path, error = %e, "skipping release file");
            None
        }
    }
}

/// Parses an os-release file from its `ID`, `ID_LIKE` and `VERSION_ID` keys.
///
/// The first non-empty `ID` is authoritative; every `ID` value joins the
/// like-set. Returns `Ok(None)` when there is no usable `ID`.
///
/// # Errors
/// Returns any error from reading `reader`, including invalid UTF-8.
pub fn parse_os_release(reader: &mut dyn BufRead) -> std::io::Result<Option<LinuxRelease>> {
    let mut id: Option<String> = None;
    let mut version = None;
    let mut like = IndexSet::new();

    for line in reader.lines() {
        let line = line?;

        if let Some(value) = line.strip_prefix(ID_PREFIX) {
            let value = normalize_value(value);
            if value.is_empty() {
                continue;
            }
            if id.is_none() {
                id = Some(value.clone());
            }
            like.insert(value);
        } else if let Some(value) = line.strip_prefix(VERSION_ID_PREFIX) {
            version = Some(normalize_value(value));
        } else if let Some(value) = line.strip_prefix(ID_LIKE_PREFIX) {
            like.extend(normalize_value(value).split_whitespace().map(str::to_string));
        }
    }

    Ok(id.map(|id| LinuxRelease { id, version, like }))
}

/// Parses the single line of `/etc/redhat-release`.
///
/// Only CentOS, Fedora and RHEL are recognized; other variants yield
/// `Ok(None)`. The version is the first run of digits on the line.
///
/// # Errors
/// Returns any error from reading `reader`, including invalid UTF-8.
pub fn parse_redhat_release(reader: &mut dyn BufRead) -> std::io::Result<Option<LinuxRelease>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.to_lowercase();

    let Some((_, id)) = REDHAT_VARIANTS
        .iter()
        .find(|(needle, _)| line.contains(needle))
    else {
        return Ok(None);
    };

    let version = first_digit_run(&line).map(str::to_string);

    let mut like: IndexSet<String> = DEFAULT_REDHAT_VARIANTS
        .iter()
        .map(|v| (*v).to_string())
        .collect();
    like.insert((*id).to_string());

    Ok(Some(LinuxRelease {
        id: (*id).to_string(),
        version,
        like,
    }))
}

/// Parses an os-release file from an in-memory string.
#[must_use]
pub fn parse_os_release_str(content: &str) -> Option<LinuxRelease> {
    parse_os_release(&mut content.as_bytes()).ok().flatten()
}

/// Parses a redhat-release line from an in-memory string.
#[must_use]
pub fn parse_redhat_release_str(content: &str) -> Option<LinuxRelease> {
    parse_redhat_release(&mut content.as_bytes()).ok().flatten()
}

fn normalize_value(value: &str) -> String {
    value.trim().replace('"', "")
}

fn first_digit_run(line: &str) -> Option<&str> {
    let start = line.find(|c: char| c.is_ascii_digit())?;
    let rest = &line[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}
