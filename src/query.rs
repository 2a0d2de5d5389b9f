//! `application/x-www-form-urlencoded` queries.
//!
//! # Examples
//!
//! ```
//! use uri_norm::query::{form_url_decode, form_url_encode};
//!
//! let query = form_url_encode([("name", "Ferret Bueller"), ("a&b", "1=2")]);
//! assert_eq!(query, "name=Ferret+Bueller&a%26b=1%3D2");
//!
//! let pairs = form_url_decode(&query)?;
//! assert_eq!(pairs[0], ("name".to_owned(), "Ferret Bueller".to_owned()));
//! assert_eq!(pairs[1], ("a&b".to_owned(), "1=2".to_owned()));
//! # Ok::<_, uri_norm::error::DecodeError>(())
//! ```

use std::borrow::Cow;

use crate::error::DecodeError;
use crate::percent_encode::{decode_escapes, is_query_safe, is_unreserved, percent_encode};

/// Encodes key-value pairs.
///
/// Keys and values keep unreserved characters literal, spaces become `+`, and everything else
/// is percent-encoded.
#[must_use]
pub fn form_url_encode<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = String::new();
    for (key, value) in pairs {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&encode_field(key.as_ref()));
        query.push('=');
        query.push_str(&encode_field(value.as_ref()));
    }
    query
}

/// Encodes one key or value.
fn encode_field(field: &str) -> String {
    field
        .split(' ')
        .map(|word| percent_encode(word, is_unreserved))
        .collect::<Vec<_>>()
        .join("+")
}

/// Decodes a query into key-value pairs.
///
/// The query is split on `&`, then each pair on its first `=`; a pair without `=` has an
/// empty value. `+` decodes to a space. Literal characters must be valid in a query.
pub fn form_url_decode(query: &str) -> Result<Vec<(String, String)>, DecodeError> {
    decode_pairs(query, |b| b.is_ascii() && is_query_safe(b))
}

/// Decodes key-value pairs, accepting the literal bytes `is_literal` accepts.
pub(crate) fn decode_pairs<F>(
    query: &str,
    is_literal: F,
) -> Result<Vec<(String, String)>, DecodeError>
where
    F: Fn(u8) -> bool + Copy,
{
    if query.is_empty() {
        return Ok(Vec::new());
    }
    query
        .split('&')
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            Ok((decode_field(key, is_literal)?, decode_field(value, is_literal)?))
        })
        .collect()
}

/// Decodes one key or value.
fn decode_field<F>(field: &str, is_literal: F) -> Result<String, DecodeError>
where
    F: Fn(u8) -> bool,
{
    let field = if field.contains('+') {
        Cow::Owned(field.replace('+', "%20"))
    } else {
        Cow::Borrowed(field)
    };
    decode_escapes(&field, is_literal)
}
