//! Tests for normalization.

mod components;
#[macro_use]
mod utils;

use uri_norm::error::{ConstructionError, Error};
use uri_norm::normalize::{normalize_port, remove_dot_segments};
use uri_norm::types::{Reference, RelativeReference, Uri, UriReference};

use self::components::TEST_CASES;

/// Absolute URIs should be normalized the same way whatever type parses them.
#[test]
fn generic_and_typed_agree_on_generic_schemes() {
    for case in TEST_CASES.iter().filter(|case| {
        case.is_absolute() && !matches!(case.components.scheme, Some("http" | "https" | "tag"))
    }) {
        let uri = Uri::parse(case.composed).expect("should be a valid URI");
        assert_eq_display!(uri, case.normalized, "case={case:#?}");
    }
}

/// Semantically equal URIs are normalized to the same value.
#[test]
fn equivalent_uris() {
    let groups: &[&[&str]] = &[
        &[
            "eXAMPLE://a/./b/../b/%63/%7bfoo%7d",
            "example://a/b/c/%7Bfoo%7D",
            "example://A/b/c/%7b%66oo%7d",
        ],
        &["s://h:0080/", "s://h:80/", "S://H:00080/."],
        &["s:/a/b/../c", "s:/a/./c", "s:/x/../a/c"],
        &["http://example.com:80", "http://Example.COM", "http://example.com:"],
        &["https://example.com/", "https://example.com:443/"],
    ];
    for group in groups {
        let first = UriReference::parse(group[0]).expect("should be valid");
        for other in &group[1..] {
            let other = UriReference::parse(other).expect("should be valid");
            assert_eq!(first, other);
            assert_eq!(first.to_string(), other.to_string());
        }
    }
}

/// Semantically different URIs stay different.
#[test]
fn different_uris() {
    let pairs: &[(&str, &str)] = &[
        ("s://h", "s://h/"),
        ("s://h/a", "s://h/a/"),
        ("s://h/a%2Fb", "s://h/a/b"),
        ("s://h/?", "s://h/"),
        ("s://h/#", "s://h/"),
        ("s://h:/", "s://h/"),
        ("s://@h/", "s://h/"),
        ("s:", "s://"),
        ("s://h/A", "s://h/a"),
    ];
    for &(a, b) in pairs {
        let a = Uri::parse(a).expect("should be valid");
        let b = Uri::parse(b).expect("should be valid");
        assert_ne!(a, b);
    }
}

#[test]
fn rfc3986_remove_dot_segments() {
    let cases: &[(&[&str], &[&str])] = &[
        (&["", "a", "b", "c", ".", "..", "..", "g"], &["", "a", "g"]),
        (&["mid", "content=5", "..", "6"], &["mid", "6"]),
        (&["", "a", ".."], &["", ""]),
        (&["", "a", "."], &["", "a", ""]),
        (&["..", "a"], &["a"]),
        (&[".", ".", "a"], &["a"]),
        (&["", "..", "..", "a"], &["", "a"]),
        (&["a", "b", "..", "..", ".."], &["a", ""]),
        (&["a", "b"], &["a", "b"]),
    ];
    for &(input, expected) in cases {
        assert_eq!(remove_dot_segments(input.iter().copied()), expected, "{:?}", input);
    }
}

#[test]
fn port_leading_zeros() {
    for &(port, expected) in &[("0", "0"), ("000", "0"), ("0001", "1"), ("65536", "65536")] {
        assert_eq!(normalize_port(port).as_deref(), Ok(expected));
    }
    assert!(normalize_port("-1").is_err());
    assert!(normalize_port(" 1").is_err());
}

#[test]
fn relative_references_keep_dot_segments() {
    let reference = RelativeReference::parse("a/../b/./c").expect("should be valid");
    assert_eq!(reference.path_segments(), ["a", "..", "b", ".", "c"]);
}

#[test]
fn ambiguous_path_after_dot_removal() {
    assert_eq!(
        Uri::parse("foo:/..//bar").unwrap_err(),
        Error::Construction(ConstructionError::AmbiguousPath)
    );
    // With an authority, the same path is fine.
    let uri = Uri::parse("foo://h/..//bar").expect("should be valid");
    assert_eq!(uri.path_segments(), ["", "", "bar"]);
    assert_eq!(uri.to_string(), "foo://h//bar");
}

#[test]
fn single_slash_path_without_authority() {
    let uri = Uri::parse("foo:/").expect("should be valid");
    assert_eq!(uri.path_segments(), ["", ""]);
    assert_eq!(uri.to_string(), "foo:/");
}
