//! Byte search helpers for ASCII delimiters.
//!
//! Uses `memchr` when the feature is enabled. Every needle is ASCII, so returned indices are
//! always on `char` boundaries.

/// Returns the index of the first `needle`.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == needle)
    }
}

/// Returns the index of the last `needle`.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &[u8], needle: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memrchr(needle, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().rposition(|&b| b == needle)
    }
}

/// Returns the index of the first `n1`, `n2`, or `n3`.
#[inline]
#[must_use]
pub(crate) fn find3(haystack: &[u8], n1: u8, n2: u8, n3: u8) -> Option<usize> {
    #[cfg(feature = "memchr")]
    {
        memchr::memchr3(n1, n2, n3, haystack)
    }
    #[cfg(not(feature = "memchr"))]
    {
        haystack.iter().position(|&b| b == n1 || b == n2 || b == n3)
    }
}

/// Splits the string at the first `needle`, removing it.
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s.as_bytes(), needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string before the first occurrence of any of the delimiters.
///
/// The delimiter stays at the head of the second part. Returns `(s, "")` if none is found.
#[must_use]
pub(crate) fn split_before3(s: &str, n1: u8, n2: u8, n3: u8) -> (&str, &str) {
    let pos = find3(s.as_bytes(), n1, n2, n3).unwrap_or(s.len());
    s.split_at(pos)
}
