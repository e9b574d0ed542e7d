//! Raw platform string normalization.
//!
//! Platforms report their OS and architecture names inconsistently
//! (`"Windows 10"`, `"amd64"`, `"x86-64"`, `"Mac OS X"`). Every raw value is
//! first canonicalized (lower-cased, everything outside `[a-z0-9]`
//! removed) and then looked up in one declarative table per enum.
//!
//! Both lookups are total: any input, including `None`, maps to a variant.

use crate::provider::SystemPropertyProvider;
use crate::types::{Architecture, OperatingSystem};

/// Vendor property holding the VM data model (`"32"` / `"64"`).
pub const DATA_MODEL_PROPERTY: &str = "sun.arch.data.model";

/// Alternate vendor property holding the VM bit mode.
pub const BIT_MODE_PROPERTY: &str = "com.ibm.vm.bitmode";

/// OS prefixes, tested in order against the canonical name.
///
/// Prefix matching tolerates trailing versions (`windows10`, `sunos511`).
const OS_PREFIXES: &[(&str, OperatingSystem)] = &[
    ("aix", OperatingSystem::Aix),
    ("hpux", OperatingSystem::Hpux),
    ("os400", OperatingSystem::Os400),
    ("linux", OperatingSystem::Linux),
    ("mac", OperatingSystem::Osx),
    ("osx", OperatingSystem::Osx),
    ("freebsd", OperatingSystem::Freebsd),
    ("openbsd", OperatingSystem::Openbsd),
    ("netbsd", OperatingSystem::Netbsd),
    ("solaris", OperatingSystem::Sunos),
    ("sunos", OperatingSystem::Sunos),
    ("windows", OperatingSystem::Windows),
    ("zos", OperatingSystem::Zos),
];

/// Architecture aliases, matched exactly against the canonical name.
pub const ARCH_ALIASES: &[(Architecture, &[&str])] = &[
    (
        Architecture::X86_64,
        &["x8664", "amd64", "ia32e", "em64t", "x64"],
    ),
    (
        Architecture::X86_32,
        &[
            "x8632", "x86", "i386", "i486", "i586", "i686", "ia32", "x32",
        ],
    ),
    (Architecture::Itanium64, &["ia64", "ia64w", "itanium64"]),
    (Architecture::Itanium32, &["ia64n"]),
    (Architecture::Sparc32, &["sparc", "sparc32"]),
    (Architecture::Sparc64, &["sparcv9", "sparc64"]),
    (Architecture::Arm32, &["arm", "arm32"]),
    (Architecture::Aarch64, &["aarch64"]),
    (Architecture::Mips32, &["mips", "mips32"]),
    (Architecture::Mipsel32, &["mipsel", "mips32el"]),
    (Architecture::Mips64, &["mips64"]),
    (Architecture::Mipsel64, &["mips64el"]),
    (Architecture::Ppc32, &["ppc", "ppc32"]),
    (Architecture::Ppcle32, &["ppcle", "ppc32le"]),
    (Architecture::Ppc64, &["ppc64"]),
    (Architecture::Ppcle64, &["ppc64le"]),
    (Architecture::S390_32, &["s390"]),
    (Architecture::S390_64, &["s390x"]),
    (Architecture::Riscv, &["riscv", "riscv32"]),
    (Architecture::Riscv64, &["riscv64"]),
    (Architecture::E2k, &["e2k"]),
    (Architecture::Loongarch64, &["loongarch64"]),
];

/// Lower-cases `value` and strips every character outside `[a-z0-9]`.
///
/// Lower-casing uses the locale-independent Unicode mapping.
#[must_use]
pub fn canonicalize(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Maps a raw OS name to an [`OperatingSystem`].
#[must_use]
pub fn normalize_os(raw: Option<&str>) -> OperatingSystem {
    let value = canonicalize(raw);

    OS_PREFIXES
        .iter()
        .find(|(prefix, os)| {
            value.starts_with(prefix)
                && !(*os == OperatingSystem::Os400 && is_os400_lookalike(&value))
        })
        .map_or(OperatingSystem::Unknown, |(_, os)| *os)
}

// `os4000` and friends are not OS/400.
fn is_os400_lookalike(value: &str) -> bool {
    value.as_bytes().get(5).is_some_and(u8::is_ascii_digit)
}

/// Maps a raw architecture name to an [`Architecture`].
#[must_use]
pub fn normalize_arch(raw: Option<&str>) -> Architecture {
    let value = canonicalize(raw);

    ARCH_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.contains(&value.as_str()))
        .map_or(Architecture::Unknown, |(arch, _)| *arch)
}

/// Determines the platform bitness.
///
/// Vendor properties are authoritative when they hold a number: first
/// [`DATA_MODEL_PROPERTY`], then [`BIT_MODE_PROPERTY`]. Only then is the
/// width guessed from the canonical architecture name.
#[must_use]
pub fn determine_bitness(props: &dyn SystemPropertyProvider, arch: Architecture) -> u32 {
    [DATA_MODEL_PROPERTY, BIT_MODE_PROPERTY]
        .into_iter()
        .find_map(|name| parse_bitness(&props.get_or(name, "")))
        .unwrap_or_else(|| guess_bitness_from_architecture(arch.name()))
}

fn parse_bitness(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Guesses bitness from an architecture name: `64` if it mentions `"64"`.
#[must_use]
pub fn guess_bitness_from_architecture(arch: &str) -> u32 {
    if arch.contains("64") { 64 } else { 32 }
}
