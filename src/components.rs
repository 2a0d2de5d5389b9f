//! Components of URI references.
//!
//! [`UriReferenceComponents`] is the decoded, unnormalized result of parsing. It is the common
//! currency between parsing, construction, formatting, building, and resolution.

use crate::error::{FormatError, Part};
use crate::percent_encode::{
    decode_unreserved, is_fragment_safe, is_path_segment_safe, is_query_safe, is_reg_name_safe,
    is_user_info_safe, percent_decode,
};
use crate::validate::{is_ip_address, is_valid_port, is_valid_scheme};

pub use crate::parser::coarse::{
    coarse_parse_authority, coarse_parse_reference, CoarseAuthority, CoarseReference,
};

/// Decoded components of a URI reference.
///
/// Optional components distinguish absence from emptiness: `http://host` has no query while
/// `http://host?` has an empty one. The path is kept as its `/`-separated segments, each
/// percent-decoded, so the absolute path `/a/b` is `["", "a", "b"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UriReferenceComponents {
    /// Scheme, lowercased. Never empty if present.
    pub scheme: Option<String>,
    /// User information.
    pub user_info: Option<String>,
    /// Host. Registered names are decoded; IP addresses are kept verbatim.
    pub host: Option<String>,
    /// Port, as digits.
    pub port: Option<String>,
    /// Path segments.
    pub path_segments: Vec<String>,
    /// Query.
    pub query: Option<String>,
    /// Fragment.
    pub fragment: Option<String>,
}

impl UriReferenceComponents {
    /// Parses a URI reference. See [`parse_uri_reference`].
    #[inline]
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        parse_uri_reference(s)
    }

    /// Returns true if any of user information, host, or port is present.
    #[inline]
    #[must_use]
    pub fn has_authority(&self) -> bool {
        self.user_info.is_some() || self.host.is_some() || self.port.is_some()
    }

    /// Returns true if the path is empty.
    #[inline]
    #[must_use]
    pub fn path_is_empty(&self) -> bool {
        path_is_empty(&self.path_segments)
    }

    /// Returns true if the path starts with a slash.
    #[inline]
    #[must_use]
    pub fn path_is_absolute(&self) -> bool {
        path_is_absolute(&self.path_segments)
    }
}

/// Returns true if the segments denote the empty path, i.e. `[]` or `[""]`.
#[must_use]
pub fn path_is_empty<S: AsRef<str>>(segments: &[S]) -> bool {
    match segments {
        [] => true,
        [only] => only.as_ref().is_empty(),
        _ => false,
    }
}

/// Returns true if the segments denote a path starting with `/`.
///
/// That is, the first segment is empty and there is more than one segment.
#[must_use]
pub fn path_is_absolute<S: AsRef<str>>(segments: &[S]) -> bool {
    matches!(segments, [first, _, ..] if first.as_ref().is_empty())
}

/// Parses a URI reference into decoded components.
///
/// Unreserved characters are decoded up front. Then the string is split syntactically, and
/// each component is percent-decoded with its own safe set. Hosts that are IP addresses are
/// kept verbatim. The first failing component is reported along with the whole input.
///
/// # Examples
///
/// ```
/// use uri_norm::components::parse_uri_reference;
///
/// let c = parse_uri_reference("HTTP://%75ser@Example.com:8042/over/th%65re?name=ferret#nose")?;
/// assert_eq!(c.scheme.as_deref(), Some("http"));
/// assert_eq!(c.user_info.as_deref(), Some("user"));
/// assert_eq!(c.host.as_deref(), Some("Example.com"));
/// assert_eq!(c.port.as_deref(), Some("8042"));
/// assert_eq!(c.path_segments, ["", "over", "there"]);
/// assert_eq!(c.query.as_deref(), Some("name=ferret"));
/// assert_eq!(c.fragment.as_deref(), Some("nose"));
/// # Ok::<_, uri_norm::error::FormatError>(())
/// ```
pub fn parse_uri_reference(input: &str) -> Result<UriReferenceComponents, FormatError> {
    parse_decoded(&decode_unreserved(input), input).map_err(|e| {
        tracing::debug!(input, part = %e.part(), value = e.value(), "failed to parse URI reference");
        e
    })
}

/// Parses the string after unreserved characters have been decoded.
///
/// `input` is the original string, for error reporting.
fn parse_decoded(s: &str, input: &str) -> Result<UriReferenceComponents, FormatError> {
    let coarse = coarse_parse_reference(s);

    let scheme = match coarse.scheme {
        Some(scheme) if !is_valid_scheme(scheme) => {
            return Err(FormatError::new(Part::Scheme, scheme, input))
        }
        scheme => scheme.map(str::to_ascii_lowercase),
    };

    let authority = coarse_parse_authority(coarse.authority);
    let user_info = authority
        .user_info
        .map(|v| decode_part(Part::UserInfo, v, is_user_info_safe, input))
        .transpose()?;
    let host = authority
        .host
        .map(|host| {
            if is_ip_address(host) {
                Ok(host.to_owned())
            } else {
                decode_part(Part::Host, host, is_reg_name_safe, input)
            }
        })
        .transpose()?;
    let port = match authority.port {
        Some(port) if !is_valid_port(port) => {
            return Err(FormatError::new(Part::Port, port, input))
        }
        port => port.map(ToOwned::to_owned),
    };

    let path_segments = coarse
        .path
        .split('/')
        .map(|segment| decode_part(Part::PathSegment, segment, is_path_segment_safe, input))
        .collect::<Result<Vec<_>, _>>()?;
    let query = coarse
        .query
        .map(|v| decode_part(Part::Query, v, is_query_safe, input))
        .transpose()?;
    let fragment = coarse
        .fragment
        .map(|v| decode_part(Part::Fragment, v, is_fragment_safe, input))
        .transpose()?;

    Ok(UriReferenceComponents {
        scheme,
        user_info,
        host,
        port,
        path_segments,
        query,
        fragment,
    })
}

/// Percent-decodes a component, attributing failures to `part`.
fn decode_part(
    part: Part,
    value: &str,
    is_safe: fn(u8) -> bool,
    input: &str,
) -> Result<String, FormatError> {
    percent_decode(value, is_safe).map_err(|e| FormatError::decode(part, value, input, e))
}
