//! Falsification Tests: Category A - Normalization (F001-F030)
//!
//! Claims about how raw OS and architecture names map onto the canonical
//! vocabulary, and how bitness is decided.

use std::collections::HashSet;

use os_detector_core::normalize::{ARCH_ALIASES, BIT_MODE_PROPERTY, DATA_MODEL_PROPERTY};
use os_detector_core::{
    Architecture, OperatingSystem, canonicalize, determine_bitness,
    guess_bitness_from_architecture, normalize_arch, normalize_os,
};
use os_detector_test::FakeSystemProperties;
use proptest::prelude::*;

// =============================================================================
// F001-F010: Canonical Form
// =============================================================================

/// F001: Canonical form contains only `[a-z0-9]`
///
/// # Falsification Attempt
/// Feed punctuation, whitespace and mixed case.
#[test]
fn f001_canonical_form_charset() {
    for raw in ["Mac OS X", "x86-64", "  Windows_10 ", "Sun.OS/5.11", "IA-64-N"] {
        let value = canonicalize(Some(raw));
        assert!(
            value.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "F001 FALSIFIED: {raw:?} canonicalized to {value:?}"
        );
    }
}

/// F002: Absent input canonicalizes to the empty string
#[test]
fn f002_absent_is_empty() {
    assert_eq!(canonicalize(None), "", "F002 FALSIFIED: None is not empty");
    assert_eq!(canonicalize(Some("")), "", "F002 FALSIFIED: \"\" is not empty");
    assert_eq!(canonicalize(Some("-_ .")), "", "F002 FALSIFIED: punctuation survived");
}

/// F003: Absent OS and architecture normalize to unknown
#[test]
fn f003_absent_is_unknown() {
    assert_eq!(
        normalize_os(None),
        OperatingSystem::Unknown,
        "F003 FALSIFIED: absent OS is not unknown"
    );
    assert_eq!(
        normalize_arch(None),
        Architecture::Unknown,
        "F003 FALSIFIED: absent arch is not unknown"
    );
}

proptest! {
    /// F004: Canonicalization is idempotent
    #[test]
    fn f004_canonicalize_idempotent(raw in any::<String>()) {
        let once = canonicalize(Some(&raw));
        let twice = canonicalize(Some(&once));
        prop_assert_eq!(once, twice, "F004 FALSIFIED");
    }

    /// F005: Normalization is total and agrees with its canonical form
    #[test]
    fn f005_normalization_total(raw in any::<String>()) {
        let canonical = canonicalize(Some(&raw));
        prop_assert_eq!(normalize_os(Some(&raw)), normalize_os(Some(&canonical)), "F005 FALSIFIED: os");
        prop_assert_eq!(normalize_arch(Some(&raw)), normalize_arch(Some(&canonical)), "F005 FALSIFIED: arch");
    }

    /// F006: Every OS prefix tolerates arbitrary trailing version text
    #[test]
    fn f006_os_prefix_tolerates_suffix(suffix in "[a-z]{0,8}") {
        prop_assert_eq!(normalize_os(Some(&format!("linux{suffix}"))), OperatingSystem::Linux, "F006 FALSIFIED");
        prop_assert_eq!(normalize_os(Some(&format!("Windows {suffix}"))), OperatingSystem::Windows, "F006 FALSIFIED");
    }
}

// =============================================================================
// F011-F020: Operating Systems
// =============================================================================

/// F011: Well-known raw OS names map to their canonical OS
#[test]
fn f011_known_os_names() {
    let cases = [
        ("AIX", OperatingSystem::Aix),
        ("HP-UX", OperatingSystem::Hpux),
        ("OS/400", OperatingSystem::Os400),
        ("Linux", OperatingSystem::Linux),
        ("Mac OS X", OperatingSystem::Osx),
        ("OSX", OperatingSystem::Osx),
        ("FreeBSD", OperatingSystem::Freebsd),
        ("OpenBSD", OperatingSystem::Openbsd),
        ("NetBSD", OperatingSystem::Netbsd),
        ("Solaris", OperatingSystem::Sunos),
        ("SunOS", OperatingSystem::Sunos),
        ("Windows 10", OperatingSystem::Windows),
        ("Windows Server 2022", OperatingSystem::Windows),
        ("z/OS", OperatingSystem::Zos),
    ];
    for (raw, expected) in cases {
        assert_eq!(
            normalize_os(Some(raw)),
            expected,
            "F011 FALSIFIED: {raw:?} did not map to {expected}"
        );
    }
}

/// F012: OS/400 is rejected when a digit follows the prefix
#[test]
fn f012_os400_lookalike() {
    assert_eq!(
        normalize_os(Some("os4000")),
        OperatingSystem::Unknown,
        "F012 FALSIFIED: os4000 accepted as os400"
    );
    assert_eq!(
        normalize_os(Some("OS400 V7R4")),
        OperatingSystem::Os400,
        "F012 FALSIFIED: os400v7r4 rejected"
    );
}

/// F013: Unrecognized OS names are unknown, never guessed
#[test]
fn f013_unknown_os() {
    for raw in ["plan9", "Haiku", "BeOS", "xlinux"] {
        assert_eq!(
            normalize_os(Some(raw)),
            OperatingSystem::Unknown,
            "F013 FALSIFIED: {raw:?} was guessed"
        );
    }
}

/// F014: Canonical OS names are distinct and round-trip
#[test]
fn f014_os_names_distinct() {
    let mut seen = HashSet::new();
    for os in OperatingSystem::ALL {
        assert!(seen.insert(os.name()), "F014 FALSIFIED: duplicate {}", os.name());
        if !os.is_unknown() {
            assert_eq!(
                normalize_os(Some(os.name())),
                os,
                "F014 FALSIFIED: {os} does not normalize to itself"
            );
        }
    }
}

// =============================================================================
// F021-F030: Architectures and Bitness
// =============================================================================

/// F021: Well-known raw architecture names map to their canonical form
#[test]
fn f021_known_arch_names() {
    let cases = [
        ("amd64", "x86_64"),
        ("x86-64", "x86_64"),
        ("EM64T", "x86_64"),
        ("i686", "x86_32"),
        ("x86", "x86_32"),
        ("IA64W", "itanium_64"),
        ("ia64n", "itanium_32"),
        ("sparcv9", "sparc_64"),
        ("arm", "arm_32"),
        ("aarch64", "aarch_64"),
        ("mips64el", "mipsel_64"),
        ("ppc64le", "ppcle_64"),
        ("s390x", "s390_64"),
        ("riscv64", "riscv64"),
        ("e2k", "e2k"),
        ("loongarch64", "loongarch_64"),
    ];
    for (raw, expected) in cases {
        assert_eq!(
            normalize_arch(Some(raw)).name(),
            expected,
            "F021 FALSIFIED: {raw:?}"
        );
    }
}

/// F022: Architecture aliases match exactly, never by prefix
#[test]
fn f022_arch_exact_match() {
    for raw in ["amd64x", "x86_64_v3", "arm64e", "armv7l"] {
        assert_eq!(
            normalize_arch(Some(raw)),
            Architecture::Unknown,
            "F022 FALSIFIED: {raw:?} matched by prefix"
        );
    }
}

/// F023: Every alias belongs to exactly one architecture
#[test]
fn f023_aliases_unambiguous() {
    let mut seen = HashSet::new();
    for (arch, aliases) in ARCH_ALIASES {
        for alias in *aliases {
            assert!(seen.insert(*alias), "F023 FALSIFIED: {alias} listed twice");
            assert_eq!(
                normalize_arch(Some(*alias)),
                *arch,
                "F023 FALSIFIED: {alias} does not resolve to {arch}"
            );
        }
    }
}

/// F024: The data-model property beats the architecture heuristic
#[test]
fn f024_data_model_wins() {
    let props = FakeSystemProperties::new().with(DATA_MODEL_PROPERTY, "64");
    assert_eq!(
        determine_bitness(&props, Architecture::X86_32),
        64,
        "F024 FALSIFIED: heuristic beat the data model"
    );
}

/// F025: The bit-mode property is consulted when the data model is unusable
#[test]
fn f025_bit_mode_fallback() {
    let props = FakeSystemProperties::new()
        .with(DATA_MODEL_PROPERTY, "unknown")
        .with(BIT_MODE_PROPERTY, "32");
    assert_eq!(
        determine_bitness(&props, Architecture::Ppc64),
        32,
        "F025 FALSIFIED: bit mode ignored"
    );
}

/// F026: Non-numeric vendor properties fall through to the heuristic
#[test]
fn f026_non_numeric_ignored() {
    let props = FakeSystemProperties::new()
        .with(DATA_MODEL_PROPERTY, "")
        .with(BIT_MODE_PROPERTY, "64bit");
    assert_eq!(determine_bitness(&props, Architecture::S390_64), 64, "F026 FALSIFIED");
    assert_eq!(determine_bitness(&props, Architecture::Arm32), 32, "F026 FALSIFIED");
}

/// F027: The heuristic reads the substring "64"
#[test]
fn f027_heuristic() {
    assert_eq!(guess_bitness_from_architecture("x86_64"), 64, "F027 FALSIFIED");
    assert_eq!(guess_bitness_from_architecture("riscv64"), 64, "F027 FALSIFIED");
    assert_eq!(guess_bitness_from_architecture("x86_32"), 32, "F027 FALSIFIED");
    assert_eq!(guess_bitness_from_architecture("unknown"), 32, "F027 FALSIFIED");
    assert_eq!(guess_bitness_from_architecture("e2k"), 32, "F027 FALSIFIED");
}
