//! Falsification Tests: Category B - Linux Release Resolution (F031-F050)
//!
//! Claims about reading `/etc/os-release`, `/usr/lib/os-release` and
//! `/etc/redhat-release`.

use std::path::PathBuf;

use os_detector_core::release::{parse_os_release_str, parse_redhat_release_str};
use os_detector_core::resolve_linux_release;
use os_detector_test::FakeFileOperations;

// =============================================================================
// F031-F040: os-release
// =============================================================================

/// F031: ID, VERSION_ID and ID_LIKE are read with quotes stripped
#[test]
fn f031_os_release_fields() {
    let release = parse_os_release_str(
        "NAME=\"Ubuntu\"\nID=ubuntu\nID_LIKE=\"debian\"\nVERSION_ID=\"22.04\"\n",
    )
    .expect("F031 FALSIFIED: release not parsed");

    assert_eq!(release.id(), "ubuntu", "F031 FALSIFIED: id");
    assert_eq!(release.version(), Some("22.04"), "F031 FALSIFIED: version");
    assert!(release.is_like("debian"), "F031 FALSIFIED: ID_LIKE ignored");
}

/// F032: The like-set always contains the release's own id
#[test]
fn f032_like_contains_own_id() {
    for content in ["ID=arch\n", "ID=fedora\nID_LIKE=\"rhel centos\"\n"] {
        let release = parse_os_release_str(content).unwrap();
        assert!(
            release.is_like(release.id()),
            "F032 FALSIFIED: {} not like itself",
            release.id()
        );
    }
}

/// F033: Multi-valued ID_LIKE splits on whitespace, preserving order
#[test]
fn f033_id_like_multi_value() {
    let release = parse_os_release_str("ID=rocky\nID_LIKE=\"rhel  centos\tfedora\"\n").unwrap();
    let like: Vec<&str> = release.like().iter().map(String::as_str).collect();
    assert_eq!(
        like,
        ["rocky", "rhel", "centos", "fedora"],
        "F033 FALSIFIED: like-set {like:?}"
    );
}

/// F034: A file without ID yields no release
#[test]
fn f034_missing_id() {
    assert!(
        parse_os_release_str("NAME=Mystery\nVERSION_ID=1\n").is_none(),
        "F034 FALSIFIED: release without ID"
    );
    assert!(
        parse_os_release_str("ID=\"\"\n").is_none(),
        "F034 FALSIFIED: empty ID accepted"
    );
}

/// F035: Keys must start the line exactly
#[test]
fn f035_prefix_exact() {
    let release = parse_os_release_str("VARIANT_ID=server\nID=debian\n").unwrap();
    assert_eq!(release.id(), "debian", "F035 FALSIFIED: VARIANT_ID read as ID");
    assert_eq!(release.like().len(), 1, "F035 FALSIFIED: like-set polluted");
}

/// F036: /etc/os-release wins over /usr/lib/os-release
#[test]
fn f036_etc_before_usr_lib() {
    let files = FakeFileOperations::new()
        .with_file("/etc/os-release", "ID=alpine\n")
        .with_file("/usr/lib/os-release", "ID=debian\n");
    let release = resolve_linux_release(&files).unwrap();
    assert_eq!(release.id(), "alpine", "F036 FALSIFIED: wrong file won");
    assert_eq!(
        files.opened(),
        [PathBuf::from("/etc/os-release")],
        "F036 FALSIFIED: later files consulted"
    );
}

/// F037: An unreadable or useless file falls through to the next one
#[test]
fn f037_fall_through() {
    let files = FakeFileOperations::new()
        .with_error("/etc/os-release", std::io::ErrorKind::PermissionDenied)
        .with_file("/usr/lib/os-release", "NAME=nothing\n")
        .with_file("/etc/redhat-release", "CentOS Linux release 7.9.2009 (Core)\n");
    let release = resolve_linux_release(&files).unwrap();
    assert_eq!(release.id(), "centos", "F037 FALSIFIED: no fall-through");
    assert_eq!(files.opened().len(), 3, "F037 FALSIFIED: files skipped");
}

/// F038: Invalid UTF-8 counts as unreadable, not as a crash
#[test]
fn f038_invalid_utf8() {
    let files = FakeFileOperations::new()
        .with_file("/etc/os-release", vec![b'I', b'D', b'=', 0xff, 0xfe, b'\n'])
        .with_file("/usr/lib/os-release", "ID=void\n");
    let release = resolve_linux_release(&files).unwrap();
    assert_eq!(release.id(), "void", "F038 FALSIFIED");
}

/// F039: No release files means no release
#[test]
fn f039_no_files() {
    assert!(
        resolve_linux_release(&FakeFileOperations::new()).is_none(),
        "F039 FALSIFIED: release invented"
    );
}

// =============================================================================
// F041-F050: redhat-release
// =============================================================================

/// F041: Recognized Red Hat variants map to their ids
#[test]
fn f041_redhat_variants() {
    let cases = [
        ("CentOS release 6.10 (Final)", "centos", "6"),
        ("Fedora release 39 (Thirty Nine)", "fedora", "39"),
        ("Red Hat Enterprise Linux Server release 7.9 (Maipo)", "rhel", "7"),
    ];
    for (line, id, version) in cases {
        let release = parse_redhat_release_str(line)
            .unwrap_or_else(|| panic!("F041 FALSIFIED: {line:?} not recognized"));
        assert_eq!(release.id(), id, "F041 FALSIFIED: {line:?}");
        assert_eq!(release.version(), Some(version), "F041 FALSIFIED: {line:?}");
    }
}

/// F042: Every Red Hat variant is like rhel and fedora
#[test]
fn f042_redhat_like_set() {
    let release = parse_redhat_release_str("CentOS Linux release 8.5.2111").unwrap();
    for like in ["centos", "rhel", "fedora"] {
        assert!(release.is_like(like), "F042 FALSIFIED: not like {like}");
    }
}

/// F043: Unrecognized variants yield no release
#[test]
fn f043_redhat_unknown_variant() {
    assert!(
        parse_redhat_release_str("Scientific Linux release 6.4").is_none(),
        "F043 FALSIFIED: unknown variant accepted"
    );
    assert!(
        parse_redhat_release_str("").is_none(),
        "F043 FALSIFIED: empty file accepted"
    );
}

/// F044: A line without digits has no version
#[test]
fn f044_redhat_without_version() {
    let release = parse_redhat_release_str("Fedora release Rawhide").unwrap();
    assert_eq!(release.version(), None, "F044 FALSIFIED: version invented");
}

/// F045: Only the first line is read
#[test]
fn f045_redhat_first_line_only() {
    assert!(
        parse_redhat_release_str("\nCentOS release 7").is_none(),
        "F045 FALSIFIED: second line read"
    );
}
