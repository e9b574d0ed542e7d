//! # os-detector-test
//!
//! Testing infrastructure for os-detector.
//!
//! This crate provides:
//! - **Fakes**: in-memory property store, file system and logger
//! - **Test harness**: declarative host description, end-to-end detection
//! - **Falsification tests**: numbered tests attempting to refute each
//!   detection claim (see `tests/falsification.rs`)
//!
//! ## Example
//!
//! ```rust
//! use os_detector_test::DetectorTestHarness;
//!
//! let harness = DetectorTestHarness::builder()
//!     .with_os_name("Linux")
//!     .with_os_arch("amd64")
//!     .with_os_release("ID=ubuntu\nID_LIKE=debian\n")
//!     .build();
//!
//! harness.assert_classifier(&["debian"], "linux-x86_64-debian")?;
//! # Ok::<(), os_detector_test::TestError>(())
//! ```

// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod fakes;
pub mod harness;

pub use error::{Result, TestError};
pub use fakes::{FakeFileOperations, FakeSystemProperties, RecordingLogger};
pub use harness::{DetectorTestHarness, DetectorTestHarnessBuilder};
