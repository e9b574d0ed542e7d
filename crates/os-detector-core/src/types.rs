//! Canonical operating system and architecture identifiers.
//!
//! The string form of each variant is part of the classifier contract
//! (`linux-x86_64`, `osx-aarch_64`) and must never change.

use serde::{Deserialize, Serialize};

/// Normalized operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    /// IBM AIX.
    Aix,
    /// HP-UX.
    Hpux,
    /// IBM i (OS/400).
    Os400,
    /// Linux, including Android.
    Linux,
    /// macOS.
    Osx,
    /// FreeBSD.
    Freebsd,
    /// OpenBSD.
    Openbsd,
    /// NetBSD.
    Netbsd,
    /// Solaris and illumos.
    Sunos,
    /// Microsoft Windows.
    Windows,
    /// IBM z/OS.
    Zos,
    /// Anything not recognized.
    Unknown,
}

impl OperatingSystem {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Aix,
        Self::Hpux,
        Self::Os400,
        Self::Linux,
        Self::Osx,
        Self::Freebsd,
        Self::Openbsd,
        Self::Netbsd,
        Self::Sunos,
        Self::Windows,
        Self::Zos,
        Self::Unknown,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Aix => "aix",
            Self::Hpux => "hpux",
            Self::Os400 => "os400",
            Self::Linux => "linux",
            Self::Osx => "osx",
            Self::Freebsd => "freebsd",
            Self::Openbsd => "openbsd",
            Self::Netbsd => "netbsd",
            Self::Sunos => "sunos",
            Self::Windows => "windows",
            Self::Zos => "zos",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for [`OperatingSystem::Unknown`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    /// x86-64 / AMD64.
    #[serde(rename = "x86_64")]
    X86_64,
    /// 32-bit x86.
    #[serde(rename = "x86_32")]
    X86_32,
    /// Itanium, 64-bit mode.
    #[serde(rename = "itanium_64")]
    Itanium64,
    /// Itanium, 32-bit mode.
    #[serde(rename = "itanium_32")]
    Itanium32,
    /// 32-bit SPARC.
    #[serde(rename = "sparc_32")]
    Sparc32,
    /// 64-bit SPARC.
    #[serde(rename = "sparc_64")]
    Sparc64,
    /// 32-bit ARM.
    #[serde(rename = "arm_32")]
    Arm32,
    /// 64-bit ARM.
    #[serde(rename = "aarch_64")]
    Aarch64,
    /// 32-bit big-endian MIPS.
    #[serde(rename = "mips_32")]
    Mips32,
    /// 32-bit little-endian MIPS.
    #[serde(rename = "mipsel_32")]
    Mipsel32,
    /// 64-bit big-endian MIPS.
    #[serde(rename = "mips_64")]
    Mips64,
    /// 64-bit little-endian MIPS.
    #[serde(rename = "mipsel_64")]
    Mipsel64,
    /// 32-bit big-endian PowerPC.
    #[serde(rename = "ppc_32")]
    Ppc32,
    /// 32-bit little-endian PowerPC.
    #[serde(rename = "ppcle_32")]
    Ppcle32,
    /// 64-bit big-endian PowerPC.
    #[serde(rename = "ppc_64")]
    Ppc64,
    /// 64-bit little-endian PowerPC.
    #[serde(rename = "ppcle_64")]
    Ppcle64,
    /// 31/32-bit IBM S/390.
    #[serde(rename = "s390_32")]
    S390_32,
    /// 64-bit IBM z/Architecture.
    #[serde(rename = "s390_64")]
    S390_64,
    /// 32-bit RISC-V.
    #[serde(rename = "riscv")]
    Riscv,
    /// 64-bit RISC-V.
    #[serde(rename = "riscv64")]
    Riscv64,
    /// Elbrus 2000.
    #[serde(rename = "e2k")]
    E2k,
    /// 64-bit LoongArch.
    #[serde(rename = "loongarch_64")]
    Loongarch64,
    /// Anything not recognized.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Architecture {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::X86_64,
        Self::X86_32,
        Self::Itanium64,
        Self::Itanium32,
        Self::Sparc32,
        Self::Sparc64,
        Self::Arm32,
        Self::Aarch64,
        Self::Mips32,
        Self::Mipsel32,
        Self::Mips64,
        Self::Mipsel64,
        Self::Ppc32,
        Self::Ppcle32,
        Self::Ppc64,
        Self::Ppcle64,
        Self::S390_32,
        Self::S390_64,
        Self::Riscv,
        Self::Riscv64,
        Self::E2k,
        Self::Loongarch64,
        Self::Unknown,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::X86_32 => "x86_32",
            Self::Itanium64 => "itanium_64",
            Self::Itanium32 => "itanium_32",
            Self::Sparc32 => "sparc_32",
            Self::Sparc64 => "sparc_64",
            Self::Arm32 => "arm_32",
            Self::Aarch64 => "aarch_64",
            Self::Mips32 => "mips_32",
            Self::Mipsel32 => "mipsel_32",
            Self::Mips64 => "mips_64",
            Self::Mipsel64 => "mipsel_64",
            Self::Ppc32 => "ppc_32",
            Self::Ppcle32 => "ppcle_32",
            Self::Ppc64 => "ppc_64",
            Self::Ppcle64 => "ppcle_64",
            Self::S390_32 => "s390_32",
            Self::S390_64 => "s390_64",
            Self::Riscv => "riscv",
            Self::Riscv64 => "riscv64",
            Self::E2k => "e2k",
            Self::Loongarch64 => "loongarch_64",
            Self::Unknown => "unknown",
        }
    }

    /// Returns true for [`Architecture::Unknown`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Architecture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
