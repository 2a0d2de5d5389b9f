//! Percent encoding.
//!
//! Encoding is driven by a byte predicate telling which bytes may appear literally. The
//! predicates for each component are re-exported here, and [`Context`] bundles them for the
//! [`PercentEncoded`] display proxy.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::error::DecodeError;
use crate::parser::char::hex_value;

pub use crate::parser::char::{
    is_fragment_safe, is_gen_delim, is_path_segment_safe, is_query_safe, is_reg_name_safe,
    is_reserved, is_sub_delim, is_unreserved, is_user_info_safe, is_zone_id_safe,
};

/// Context for percent encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Context {
    /// User information (without the trailing `@`).
    UserInfo,
    /// A reg-name (usually called "hostname").
    RegName,
    /// A single path segment.
    ///
    /// A slash (`/`) will be encoded to `%2F`.
    PathSegment,
    /// Query (without the `?` prefix).
    Query,
    /// Fragment (without the `#` prefix).
    Fragment,
    /// An IPv6 zone identifier.
    ZoneId,
}

impl Context {
    /// Returns true if the byte may appear literally in this context.
    #[inline]
    #[must_use]
    pub fn is_safe(self, b: u8) -> bool {
        match self {
            Self::UserInfo => is_user_info_safe(b),
            Self::RegName => is_reg_name_safe(b),
            Self::PathSegment => is_path_segment_safe(b),
            Self::Query => is_query_safe(b),
            Self::Fragment => is_fragment_safe(b),
            Self::ZoneId => is_zone_id_safe(b),
        }
    }
}

/// A proxy to percent-encode a string.
///
/// # Examples
///
/// ```
/// use uri_norm::percent_encode::{Context, PercentEncoded};
///
/// let raw = "alpha/\u{03B1}?#";
/// assert_eq!(
///     PercentEncoded::new(Context::PathSegment, raw).to_string(),
///     "alpha%2F%CE%B1%3F%23"
/// );
/// assert_eq!(
///     PercentEncoded::new(Context::Query, raw).to_string(),
///     "alpha/%CE%B1?%23"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<T> {
    /// Source string context.
    context: Context,
    /// Raw string before being encoded.
    raw: T,
}

impl<T: fmt::Display> PercentEncoded<T> {
    /// Creates a proxy encoding `raw` for the given context.
    #[inline]
    #[must_use]
    pub fn new(context: Context, raw: T) -> Self {
        Self { context, raw }
    }
}

impl<T: fmt::Display> fmt::Display for PercentEncoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Filter that encodes a character before written if necessary.
        struct Filter<'a, 'b> {
            /// Encoding context.
            context: Context,
            /// Writer.
            writer: &'a mut fmt::Formatter<'b>,
        }
        impl fmt::Write for Filter<'_, '_> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                s.chars().try_for_each(|c| self.write_char(c))
            }
            fn write_char(&mut self, c: char) -> fmt::Result {
                if c.is_ascii() && self.context.is_safe(c as u8) {
                    self.writer.write_char(c)
                } else {
                    write_pct_encoded_char(&mut self.writer, c)
                }
            }
        }
        let mut filter = Filter {
            context: self.context,
            writer: f,
        };
        write!(filter, "{}", self.raw)
    }
}

/// Percent-encodes the given character and writes it.
#[inline]
fn write_pct_encoded_char<W: fmt::Write>(writer: &mut W, c: char) -> fmt::Result {
    let mut buf = [0_u8; 4];
    let buf = c.encode_utf8(&mut buf);
    buf.bytes().try_for_each(|b| write!(writer, "%{:02X}", b))
}

/// Uppercase hexadecimal digits.
const HEXDIG: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encodes the UTF-8 bytes of `value`, keeping bytes accepted by `is_safe` literal.
///
/// Non-ASCII bytes are always encoded. Hex digits are uppercase.
///
/// # Examples
///
/// ```
/// use uri_norm::percent_encode::{is_user_info_safe, percent_encode};
///
/// assert_eq!(percent_encode("user name@x", is_user_info_safe), "user%20name%40x");
/// ```
#[must_use]
pub fn percent_encode<F>(value: &str, is_safe: F) -> String
where
    F: Fn(u8) -> bool,
{
    let mut encoded = String::with_capacity(value.len());
    for b in value.bytes() {
        if b.is_ascii() && is_safe(b) {
            encoded.push(char::from(b));
        } else {
            encoded.push('%');
            encoded.push(char::from(HEXDIG[usize::from(b >> 4)]));
            encoded.push(char::from(HEXDIG[usize::from(b & 0x0F)]));
        }
    }
    encoded
}

/// Percent-decodes `value`, requiring every literal byte to satisfy `is_safe`.
///
/// `%XX` sequences decode to their byte whatever the byte is. The decoded bytes must form
/// valid UTF-8.
///
/// # Examples
///
/// ```
/// use uri_norm::percent_encode::{is_path_segment_safe, percent_decode};
///
/// assert_eq!(percent_decode("a%2Fb", is_path_segment_safe).as_deref(), Ok("a/b"));
/// assert!(percent_decode("a/b", is_path_segment_safe).is_err());
/// assert!(percent_decode("a%2", is_path_segment_safe).is_err());
/// ```
pub fn percent_decode<F>(value: &str, is_safe: F) -> Result<String, DecodeError>
where
    F: Fn(u8) -> bool,
{
    decode_escapes(value, |b| b.is_ascii() && is_safe(b))
}

/// Percent-decodes `value`, keeping literal bytes accepted by `is_literal`.
///
/// Unlike [`percent_decode`], the predicate also sees the bytes of non-ASCII characters.
pub(crate) fn decode_escapes<F>(value: &str, is_literal: F) -> Result<String, DecodeError>
where
    F: Fn(u8) -> bool,
{
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let hi = bytes.get(i + 1).copied().and_then(hex_value);
            let lo = bytes.get(i + 2).copied().and_then(hex_value);
            match (hi, lo) {
                (Some(hi), Some(lo)) => {
                    decoded.push((hi << 4) | lo);
                    i += 3;
                    continue;
                }
                _ => {
                    return Err(DecodeError::MalformedEscape {
                        index: i,
                        value: value.to_owned(),
                    })
                }
            }
        }
        if !is_literal(b) {
            let character = value
                .get(i..)
                .and_then(|rest| rest.chars().next())
                .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(DecodeError::UnsafeCharacter {
                character,
                index: i,
                value: value.to_owned(),
            });
        }
        decoded.push(b);
        i += 1;
    }
    String::from_utf8(decoded).map_err(|_| DecodeError::InvalidUtf8 {
        value: value.to_owned(),
    })
}

/// Decodes only the `%XX` triplets that stand for unreserved characters.
///
/// Decoding unreserved characters never changes the meaning of a URI, so this can be applied
/// to any input up front. Returns the input unchanged (borrowed) when there is nothing to
/// decode.
///
/// # Examples
///
/// ```
/// use uri_norm::percent_encode::decode_unreserved;
///
/// assert_eq!(decode_unreserved("%7Euser/%41%2F"), "~user/A%2F");
/// ```
#[must_use]
pub fn decode_unreserved(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    let decodable_at = |i: usize| -> Option<u8> {
        if bytes[i] != b'%' {
            return None;
        }
        let hi = bytes.get(i + 1).copied().and_then(hex_value)?;
        let lo = bytes.get(i + 2).copied().and_then(hex_value)?;
        Some((hi << 4) | lo).filter(|&b| is_unreserved(b))
    };

    let first = match (0..bytes.len()).find(|&i| decodable_at(i).is_some()) {
        Some(i) => i,
        None => return Cow::Borrowed(value),
    };
    let mut decoded = String::with_capacity(value.len());
    decoded.push_str(&value[..first]);
    let mut i = first;
    let mut literal_start = first;
    while i < bytes.len() {
        match decodable_at(i) {
            Some(b) => {
                decoded.push_str(&value[literal_start..i]);
                decoded.push(char::from(b));
                i += 3;
                literal_start = i;
            }
            None => i += 1,
        }
    }
    decoded.push_str(&value[literal_start..]);
    Cow::Owned(decoded)
}
