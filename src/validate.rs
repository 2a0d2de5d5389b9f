//! Validators for single components.

use crate::parser::char::{is_scheme_continue, is_scheme_start};
use crate::parser::ip;

/// Checks if the string matches `scheme` rule: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
///
/// # Examples
///
/// ```
/// use uri_norm::validate::is_valid_scheme;
///
/// assert!(is_valid_scheme("svn+ssh"));
/// assert!(!is_valid_scheme("1http"));
/// assert!(!is_valid_scheme(""));
/// ```
#[must_use]
pub fn is_valid_scheme(s: &str) -> bool {
    match s.as_bytes().split_first() {
        Some((&first, rest)) => {
            is_scheme_start(first) && rest.iter().all(|&b| is_scheme_continue(b))
        }
        None => false,
    }
}

/// Checks if the string matches `port` rule, i.e. zero or more decimal digits.
#[inline]
#[must_use]
pub fn is_valid_port(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Checks if the string is a dotted-decimal IPv4 address without leading zeros.
///
/// # Examples
///
/// ```
/// use uri_norm::validate::is_ipv4_address;
///
/// assert!(is_ipv4_address("192.0.2.1"));
/// assert!(!is_ipv4_address("192.0.2.01"));
/// ```
#[inline]
#[must_use]
pub fn is_ipv4_address(s: &str) -> bool {
    ip::is_ipv4(s.as_bytes())
}

/// Checks if the string matches `IP-literal` rule: a bracketed IPv6 address or `IPvFuture`.
///
/// # Examples
///
/// ```
/// use uri_norm::validate::is_ip_literal;
///
/// assert!(is_ip_literal("[2001:db8::7]"));
/// assert!(is_ip_literal("[v7.x]"));
/// assert!(!is_ip_literal("2001:db8::7"));
/// ```
#[must_use]
pub fn is_ip_literal(s: &str) -> bool {
    match s.as_bytes() {
        [b'[', inner @ .., b']'] => ip::is_ipv6(inner) || ip::is_ipv_future(inner),
        _ => false,
    }
}

/// Checks if the host is an IP literal or an IPv4 address.
///
/// Such hosts are never percent-encoded nor decoded.
#[inline]
#[must_use]
pub fn is_ip_address(s: &str) -> bool {
    is_ip_literal(s) || is_ipv4_address(s)
}
