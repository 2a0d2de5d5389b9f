//! Byte classes of RFC 3986.
//!
//! All predicates take a single byte and return `false` for non-ASCII bytes, so they are safe
//! to apply to each byte of UTF-8 encoded text.

/// Checks if the given byte matches `unreserved` rule.
#[inline]
#[must_use]
pub fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given byte matches `gen-delims` rule.
#[inline]
#[must_use]
pub fn is_gen_delim(b: u8) -> bool {
    matches!(b, b':' | b'/' | b'?' | b'#' | b'[' | b']' | b'@')
}

/// Checks if the given byte matches `sub-delims` rule.
#[inline]
#[must_use]
pub fn is_sub_delim(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given byte matches `reserved` rule.
#[inline]
#[must_use]
pub fn is_reserved(b: u8) -> bool {
    is_gen_delim(b) || is_sub_delim(b)
}

/// Checks if the given byte may appear literally in the user information.
#[inline]
#[must_use]
pub fn is_user_info_safe(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b':'
}

/// Checks if the given byte may appear literally in a registered name.
#[inline]
#[must_use]
pub fn is_reg_name_safe(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b)
}

/// Checks if the given byte matches `pchar` rule (excluding `pct-encoded`).
#[inline]
#[must_use]
pub fn is_path_segment_safe(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || matches!(b, b':' | b'@')
}

/// Checks if the given byte may appear literally in the query.
#[inline]
#[must_use]
pub fn is_query_safe(b: u8) -> bool {
    is_path_segment_safe(b) || matches!(b, b'/' | b'?')
}

/// Checks if the given byte may appear literally in the fragment.
#[inline]
#[must_use]
pub fn is_fragment_safe(b: u8) -> bool {
    is_query_safe(b)
}

/// Checks if the given byte may appear literally in an IPv6 zone identifier (RFC 6874).
#[inline]
#[must_use]
pub fn is_zone_id_safe(b: u8) -> bool {
    is_unreserved(b)
}

/// Checks if the given byte can start a scheme.
#[inline]
#[must_use]
pub(crate) fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Checks if the given byte can continue a scheme.
#[inline]
#[must_use]
pub(crate) fn is_scheme_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Returns the value of an ASCII hexadecimal digit.
#[inline]
#[must_use]
pub(crate) fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
