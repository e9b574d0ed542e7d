//! In-memory capabilities for deterministic detection.
//!
//! Every fake is a cheap handle over shared state: clone one, hand the
//! clone to a [`Detector`](os_detector_core::Detector), and inspect the
//! original afterwards.

use std::collections::{BTreeMap, HashMap};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use os_detector_core::{FileOperations, Logger, SystemPropertyProvider};
use parking_lot::RwLock;

/// Property store backed by a map, recording every write.
#[derive(Debug, Clone, Default)]
pub struct FakeSystemProperties {
    values: Arc<RwLock<BTreeMap<String, String>>>,
    writes: Arc<RwLock<Vec<(String, String)>>>,
}

impl FakeSystemProperties {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a property without recording it as a write.
    #[must_use]
    pub fn with(self, name: &str, value: &str) -> Self {
        self.values
            .write()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Removes a property.
    pub fn remove(&self, name: &str) -> Option<String> {
        self.values.write().remove(name)
    }

    /// Current contents, in key order.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.read().clone()
    }

    /// Every `set` call, in call order.
    #[must_use]
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.read().clone()
    }

    /// Names passed to `set`, in call order.
    #[must_use]
    pub fn written_keys(&self) -> Vec<String> {
        self.writes.read().iter().map(|(k, _)| k.clone()).collect()
    }
}

impl SystemPropertyProvider for FakeSystemProperties {
    fn get(&self, name: &str) -> Option<String> {
        self.values.read().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) -> Option<String> {
        self.writes
            .write()
            .push((name.to_string(), value.to_string()));
        self.values
            .write()
            .insert(name.to_string(), value.to_string())
    }
}

#[derive(Debug, Clone)]
enum FakeFile {
    Content(Vec<u8>),
    Error(io::ErrorKind),
}

/// File system with a fixed set of files, recording every open.
#[derive(Debug, Clone, Default)]
pub struct FakeFileOperations {
    files: Arc<RwLock<HashMap<PathBuf, FakeFile>>>,
    opened: Arc<RwLock<Vec<PathBuf>>>,
}

impl FakeFileOperations {
    /// Creates a file system with no files.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a readable file.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files
            .write()
            .insert(path.into(), FakeFile::Content(content.into()));
        self
    }

    /// Adds a file whose open fails with `kind`.
    #[must_use]
    pub fn with_error(self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.files.write().insert(path.into(), FakeFile::Error(kind));
        self
    }

    /// Paths passed to `read_file`, in call order.
    #[must_use]
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.read().clone()
    }
}

impl FileOperations for FakeFileOperations {
    fn read_file(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        self.opened.write().push(path.to_path_buf());
        match self.files.read().get(path) {
            Some(FakeFile::Content(bytes)) => Ok(Box::new(Cursor::new(bytes.clone()))),
            Some(FakeFile::Error(kind)) => Err(io::Error::new(*kind, path.display().to_string())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                path.display().to_string(),
            )),
        }
    }
}

/// Logger that keeps every line.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<RwLock<Vec<String>>>,
}

impl RecordingLogger {
    /// Creates an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines logged so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().clone()
    }

    /// Returns true if `line` was logged verbatim.
    #[must_use]
    pub fn contains(&self, line: &str) -> bool {
        self.lines.read().iter().any(|l| l == line)
    }

    /// Forgets everything logged so far.
    pub fn clear(&self) {
        self.lines.write().clear();
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.lines.write().push(message.to_string());
    }
}
