//! Normalization.
//!
//! Constructed URIs and relative references are always normalized: the scheme and the host are
//! lowercased, leading zeros are stripped from the port, and dot segments are removed from the
//! path of absolute URIs. There is no "valid but not yet normalized" state.
//!
//! # Normalization can fail
//!
//! A path without an authority cannot start with `//`, since it would be read back as an
//! authority. For example, `foo:/..//bar` has the segments `["", "", "bar"]` after dot
//! removal, which would be written as `foo://bar`. Such results are rejected with
//! [`ConstructionError::AmbiguousPath`] rather than silently changing meaning.
//!
//! Resolution normalizes its result, so it can fail the same way. This only happens when the
//! base URI has no authority.
//!
//! ```
//! use uri_norm::error::{ConstructionError, Error};
//! use uri_norm::types::Uri;
//!
//! assert_eq!(
//!     Uri::parse("foo:/..//bar").unwrap_err(),
//!     Error::Construction(ConstructionError::AmbiguousPath)
//! );
//! ```

mod remove_dot_segments;

use crate::error::ConstructionError;
use crate::validate::{is_valid_port, is_valid_scheme};

pub use self::remove_dot_segments::remove_dot_segments;

/// Validates and lowercases a scheme.
///
/// # Examples
///
/// ```
/// use uri_norm::normalize::normalize_scheme;
///
/// assert_eq!(normalize_scheme("HTTP").as_deref(), Ok("http"));
/// assert!(normalize_scheme("ht tp").is_err());
/// ```
pub fn normalize_scheme(scheme: &str) -> Result<String, ConstructionError> {
    if !is_valid_scheme(scheme) {
        return Err(ConstructionError::InvalidScheme(scheme.to_owned()));
    }
    Ok(scheme.to_ascii_lowercase())
}

/// Lowercases a host.
///
/// Registered names are case-insensitive, and so are the hex digits of IP literals.
#[inline]
#[must_use]
pub fn normalize_host(host: &str) -> String {
    host.to_lowercase()
}

/// Lowercases the host of an authority, making it empty if the authority has none.
///
/// An authority is always written with a host, so `//u@:80` reads back with an empty one.
#[must_use]
pub(crate) fn normalize_authority_host(
    host: Option<&str>,
    has_authority: bool,
) -> Option<String> {
    match host {
        Some(host) => Some(normalize_host(host)),
        None if has_authority => Some(String::new()),
        None => None,
    }
}

/// Validates a port and strips its leading zeros.
///
/// An empty port stays empty, and a port of only zeros becomes `"0"`.
///
/// # Examples
///
/// ```
/// use uri_norm::normalize::normalize_port;
///
/// assert_eq!(normalize_port("0080").as_deref(), Ok("80"));
/// assert_eq!(normalize_port("000").as_deref(), Ok("0"));
/// assert_eq!(normalize_port("").as_deref(), Ok(""));
/// assert!(normalize_port("8o").is_err());
/// ```
pub fn normalize_port(port: &str) -> Result<String, ConstructionError> {
    if !is_valid_port(port) {
        return Err(ConstructionError::InvalidPort(port.to_owned()));
    }
    let trimmed = port.trim_start_matches('0');
    if trimmed.is_empty() && !port.is_empty() {
        Ok("0".to_owned())
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Checks the coupling between the authority and the path.
///
/// With an authority the path must be empty or absolute. Without one it must not be written
/// with a leading `//`, i.e. begin with two empty segments followed by another one.
pub(crate) fn check_path(segments: &[String], has_authority: bool) -> Result<(), ConstructionError> {
    if has_authority {
        if segments.first().map_or(false, |first| !first.is_empty()) {
            return Err(ConstructionError::RelativePathWithAuthority);
        }
    } else if matches!(segments, [first, second, _, ..] if first.is_empty() && second.is_empty())
    {
        return Err(ConstructionError::AmbiguousPath);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(s: &[&str]) -> Vec<String> {
        s.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn host_is_lowercased() {
        assert_eq!(normalize_host("ExAmple.COM"), "example.com");
        assert_eq!(normalize_host("[FE80::1]"), "[fe80::1]");
    }

    #[test]
    fn port_of_zeros() {
        assert_eq!(normalize_port("0").as_deref(), Ok("0"));
        assert_eq!(normalize_port("00001").as_deref(), Ok("1"));
    }

    #[test]
    fn path_with_authority() {
        assert!(check_path(&segments(&[]), true).is_ok());
        assert!(check_path(&segments(&[""]), true).is_ok());
        assert!(check_path(&segments(&["", "", "a"]), true).is_ok());
        assert_eq!(
            check_path(&segments(&["a"]), true),
            Err(ConstructionError::RelativePathWithAuthority)
        );
    }

    #[test]
    fn path_without_authority() {
        assert!(check_path(&segments(&["", "a"]), false).is_ok());
        assert!(check_path(&segments(&["a", "", ""]), false).is_ok());
        // `/` alone is fine; `//` is not.
        assert!(check_path(&segments(&["", ""]), false).is_ok());
        assert_eq!(
            check_path(&segments(&["", "", ""]), false),
            Err(ConstructionError::AmbiguousPath)
        );
    }
}
