//! Injectable capabilities the detector depends on.
//!
//! The detector never touches the environment or filesystem directly. It
//! reads raw platform values through a [`SystemPropertyProvider`], reads
//! release files through [`FileOperations`], and narrates through a
//! [`Logger`]. Build-tool integrations supply restricted implementations;
//! tests supply in-memory fakes.

use std::collections::HashMap;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

/// Raw OS name property.
pub const OS_NAME: &str = "os.name";

/// Raw architecture property.
pub const OS_ARCH: &str = "os.arch";

/// Raw OS version property.
pub const OS_VERSION: &str = "os.version";

/// String-keyed property store.
pub trait SystemPropertyProvider {
    /// Returns the property value, if set.
    fn get(&self, name: &str) -> Option<String>;

    /// Returns the property value, or `default` if unset.
    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    /// Sets a property, returning the previous value.
    fn set(&self, name: &str, value: &str) -> Option<String>;
}

impl<T: SystemPropertyProvider + ?Sized> SystemPropertyProvider for Arc<T> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn get_or(&self, name: &str, default: &str) -> String {
        (**self).get_or(name, default)
    }

    fn set(&self, name: &str, value: &str) -> Option<String> {
        (**self).set(name, value)
    }
}

/// Read-only file access.
pub trait FileOperations {
    /// Opens `path` for reading.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::NotFound`] if the file does not exist, or any
    /// other I/O error raised while opening it.
    fn read_file(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;
}

impl<T: FileOperations + ?Sized> FileOperations for Arc<T> {
    fn read_file(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        (**self).read_file(path)
    }
}

/// Diagnostic sink.
pub trait Logger {
    /// Records an informational message.
    fn info(&self, message: &str);
}

impl<F: Fn(&str)> Logger for F {
    fn info(&self, message: &str) {
        self(message);
    }
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn info(&self, _message: &str) {}
}

/// Logger that forwards to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "os_detector", "{message}");
    }
}

/// Reads files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFileOperations;

impl FileOperations for HostFileOperations {
    fn read_file(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let file = std::fs::File::open(path)?;
        Ok(Box::new(file))
    }
}

/// Properties of the running process.
///
/// Lookups consult, in order: values written through [`set`], values
/// derived from the host (`os.name`, `os.arch`, `os.version`,
/// `sun.arch.data.model`), and finally the environment variable with the
/// same name.
///
/// Writes never reach the process environment; they live in this value, so
/// whoever owns it decides how far published properties travel.
///
/// [`set`]: SystemPropertyProvider::set
#[derive(Debug, Default)]
pub struct HostSystemProperties {
    overrides: RwLock<HashMap<String, String>>,
}

impl HostSystemProperties {
    /// Creates an accessor with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every property written through `set`.
    #[must_use]
    pub fn overrides(&self) -> HashMap<String, String> {
        self.overrides.read().clone()
    }

    fn lookup(name: &str) -> Option<String> {
        host_property(name).or_else(|| std::env::var(name).ok())
    }
}

impl SystemPropertyProvider for HostSystemProperties {
    fn get(&self, name: &str) -> Option<String> {
        if let Some(value) = self.overrides.read().get(name) {
            return Some(value.clone());
        }
        Self::lookup(name)
    }

    fn set(&self, name: &str, value: &str) -> Option<String> {
        self.overrides
            .write()
            .insert(name.to_string(), value.to_string())
            .or_else(|| Self::lookup(name))
    }
}

fn host_property(name: &str) -> Option<String> {
    match name {
        OS_NAME => Some(host_os_name().to_string()),
        OS_ARCH => Some(host_arch_name().to_string()),
        OS_VERSION => host_os_version(),
        crate::normalize::DATA_MODEL_PROPERTY => Some(usize::BITS.to_string()),
        _ => None,
    }
}

/// Reports the compile-target OS under the name its vendor uses.
fn host_os_name() -> &'static str {
    match std::env::consts::OS {
        "linux" | "android" => "Linux",
        "macos" => "Mac OS X",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        "solaris" | "illumos" => "SunOS",
        "aix" => "AIX",
        other => other,
    }
}

/// Reports the compile-target architecture, with endianness where the
/// canonical names distinguish it.
fn host_arch_name() -> &'static str {
    let little = cfg!(target_endian = "little");
    match std::env::consts::ARCH {
        "mips" if little => "mipsel",
        "mips64" if little => "mips64el",
        "powerpc" if little => "ppcle",
        "powerpc" => "ppc",
        "powerpc64" if little => "ppc64le",
        "powerpc64" => "ppc64",
        "sparc64" => "sparcv9",
        other => other,
    }
}

#[cfg(unix)]
fn host_os_version() -> Option<String> {
    match nix::sys::utsname::uname() {
        Ok(uts) => Some(uts.release().to_string_lossy().into_owned()),
        Err(e) => {
            tracing::debug!(error = %e, "uname failed, os.version unavailable");
            None
        }
    }
}

#[cfg(not(unix))]
fn host_os_version() -> Option<String> {
    None
}
