//! Popperian Falsification Tests for os-detector
//!
//! Category A: normalization (F001-F030)
//! Category B: Linux release resolution (F031-F050)
//! Category C: detection and publication (F051-F080)

// Allow test-specific patterns that are denied in production code
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod normalize;
mod release;
