//! Syntactic decomposition without validation.
//!
//! Follows the regular expression of [RFC 3986 Appendix B]:
//!
//! ```text
//! ^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?
//! ```
//!
//! The grammar accepts every string, so these functions never fail.
//!
//! [RFC 3986 Appendix B]: https://www.rfc-editor.org/rfc/rfc3986.html#appendix-B

use crate::parser::str::{find, find_split_hole, rfind, split_before3};

/// Raw top-level components of a URI reference.
///
/// A component is `Some("")` when its delimiter is present but its body is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoarseReference<'a> {
    /// Scheme, without the trailing `:`.
    pub scheme: Option<&'a str>,
    /// Authority, without the leading `//`.
    pub authority: Option<&'a str>,
    /// Path. Always present, possibly empty.
    pub path: &'a str,
    /// Query, without the leading `?`.
    pub query: Option<&'a str>,
    /// Fragment, without the leading `#`.
    pub fragment: Option<&'a str>,
}

/// Raw subcomponents of an authority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CoarseAuthority<'a> {
    /// User information, without the trailing `@`.
    pub user_info: Option<&'a str>,
    /// Host. Present (possibly empty) whenever the authority is.
    pub host: Option<&'a str>,
    /// Port, without the leading `:`.
    pub port: Option<&'a str>,
}

/// Splits a URI reference into scheme, authority, path, query, and fragment.
#[must_use]
pub fn coarse_parse_reference(i: &str) -> CoarseReference<'_> {
    let (scheme, rest) = {
        let (head, _) = split_before3(i, b'/', b'?', b'#');
        match find(head.as_bytes(), b':') {
            Some(pos) if pos > 0 => (Some(&i[..pos]), &i[(pos + 1)..]),
            _ => (None, i),
        }
    };
    let (authority, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let (authority, rest) = split_before3(after, b'/', b'?', b'#');
            (Some(authority), rest)
        }
        None => (None, rest),
    };
    let (rest, fragment) = match find_split_hole(rest, b'#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (rest, None),
    };
    let (path, query) = match find_split_hole(rest, b'?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    CoarseReference {
        scheme,
        authority,
        path,
        query,
        fragment,
    }
}

/// Splits an authority into user information, host, and port.
///
/// User information ends at the first `@`. For a bracketed host, the port delimiter is the
/// first `:` after the last `]`; otherwise it is the last `:`.
#[must_use]
pub fn coarse_parse_authority(authority: Option<&str>) -> CoarseAuthority<'_> {
    let authority = match authority {
        Some(v) => v,
        None => return CoarseAuthority::default(),
    };
    let (user_info, host_port) = match find_split_hole(authority, b'@') {
        Some((user_info, rest)) => (Some(user_info), rest),
        None => (None, authority),
    };

    let bytes = host_port.as_bytes();
    let colon = if bytes.first() == Some(&b'[') {
        // An unmatched `[` leaves nothing to search, so the whole rest is the host.
        let search_start = rfind(bytes, b']').map_or(bytes.len(), |pos| pos + 1);
        find(&bytes[search_start..], b':').map(|pos| search_start + pos)
    } else {
        rfind(bytes, b':')
    };
    let (host, port) = match colon {
        Some(pos) => (&host_port[..pos], Some(&host_port[(pos + 1)..])),
        None => (host_port, None),
    };

    CoarseAuthority {
        user_info,
        host: Some(host),
        port,
    }
}
