//! IP address recognition.

use crate::parser::char::{is_sub_delim, is_unreserved};
use crate::parser::str::find;

/// Checks if the given bytes match `IPv4address` rule.
///
/// Each `dec-octet` is 0 to 255 with no leading zeros.
#[must_use]
pub(crate) fn is_ipv4(s: &[u8]) -> bool {
    let mut octets = 0_usize;
    for octet in s.split(|&b| b == b'.') {
        octets += 1;
        if octets > 4 || !is_dec_octet(octet) {
            return false;
        }
    }
    octets == 4
}

/// Checks if the given bytes match `dec-octet` rule.
fn is_dec_octet(s: &[u8]) -> bool {
    match s {
        [d] => d.is_ascii_digit(),
        [b'1'..=b'9', d] => d.is_ascii_digit(),
        [b'1', d1, d2] => d1.is_ascii_digit() && d2.is_ascii_digit(),
        [b'2', b'0'..=b'4', d] => d.is_ascii_digit(),
        [b'2', b'5', b'0'..=b'5'] => true,
        _ => false,
    }
}

/// Checks if the given bytes match `IPv6address` rule.
#[must_use]
pub(crate) fn is_ipv6(s: &[u8]) -> bool {
    match find_double_colon(s) {
        Some(pos) => {
            let (head, tail) = (&s[..pos], &s[(pos + 2)..]);
            if find_double_colon(tail).is_some() {
                return false;
            }
            match (count_groups(head, false), count_groups(tail, true)) {
                (Some(head), Some(tail)) => head + tail <= 7,
                _ => false,
            }
        }
        None => count_groups(s, true) == Some(8),
    }
}

/// Returns the position of the first `::`.
fn find_double_colon(s: &[u8]) -> Option<usize> {
    s.windows(2).position(|w| w == b"::")
}

/// Counts 16-bit groups in a colon-separated list of `h16`.
///
/// A trailing IPv4 address counts as two groups if `allow_ipv4` is true.
/// Returns `None` on any malformed group.
fn count_groups(s: &[u8], allow_ipv4: bool) -> Option<usize> {
    if s.is_empty() {
        return Some(0);
    }
    let mut groups = s.split(|&b| b == b':').peekable();
    let mut count = 0;
    while let Some(group) = groups.next() {
        let is_last = groups.peek().is_none();
        if is_last && allow_ipv4 && find(group, b'.').is_some() {
            if !is_ipv4(group) {
                return None;
            }
            count += 2;
        } else if (1..=4).contains(&group.len()) && group.iter().all(u8::is_ascii_hexdigit) {
            count += 1;
        } else {
            return None;
        }
    }
    Some(count)
}

/// Checks if the given bytes match `IPvFuture` rule.
#[must_use]
pub(crate) fn is_ipv_future(s: &[u8]) -> bool {
    let rest = match s {
        [b'v' | b'V', rest @ ..] => rest,
        _ => return false,
    };
    let dot = match find(rest, b'.') {
        Some(pos) => pos,
        None => return false,
    };
    let (version, body) = (&rest[..dot], &rest[(dot + 1)..]);
    !version.is_empty()
        && version.iter().all(u8::is_ascii_hexdigit)
        && !body.is_empty()
        && body
            .iter()
            .all(|&b| is_unreserved(b) || is_sub_delim(b) || b == b':')
}
