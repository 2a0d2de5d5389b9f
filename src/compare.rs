//! Ordering of absolute URIs.
//!
//! URIs are ordered by scheme first. For equal schemes, if both values supply a
//! [`ComparisonKey`] the keys decide; otherwise [`generic_compare`] orders them by host, port,
//! user information, path segments, query, and fragment.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::types::{AbsoluteUri, Reference};

/// One element of a [`ComparisonKey`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyPart<'a> {
    /// A string compared ordinally.
    Text(&'a str),
    /// An optional string; absence sorts first.
    OptionalText(Option<&'a str>),
    /// An integer.
    Number(i64),
    /// An optional integer; absence sorts first.
    OptionalNumber(Option<i64>),
}

/// A scheme-specific sort key, compared lexicographically by part.
///
/// # Examples
///
/// ```
/// use uri_norm::compare::ComparisonKey;
///
/// let a = ComparisonKey::new().text("example.com").number(2001);
/// let b = ComparisonKey::new().text("example.com").number(2010);
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComparisonKey<'a>(Vec<KeyPart<'a>>);

impl<'a> ComparisonKey<'a> {
    /// Creates an empty key.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a part.
    #[inline]
    #[must_use]
    pub fn push(mut self, part: KeyPart<'a>) -> Self {
        self.0.push(part);
        self
    }

    /// Appends a string part.
    #[inline]
    #[must_use]
    pub fn text(self, v: &'a str) -> Self {
        self.push(KeyPart::Text(v))
    }

    /// Appends an optional string part.
    #[inline]
    #[must_use]
    pub fn optional_text(self, v: Option<&'a str>) -> Self {
        self.push(KeyPart::OptionalText(v))
    }

    /// Appends an integer part.
    #[inline]
    #[must_use]
    pub fn number(self, v: i64) -> Self {
        self.push(KeyPart::Number(v))
    }

    /// Appends an optional integer part.
    #[inline]
    #[must_use]
    pub fn optional_number(self, v: Option<i64>) -> Self {
        self.push(KeyPart::OptionalNumber(v))
    }

    /// Returns the parts.
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[KeyPart<'a>] {
        &self.0
    }
}

/// Compares two ports numerically.
///
/// Ports are digit strings without leading zeros, so a longer port is larger and ports of the
/// same length compare as strings. An absent port sorts first.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use uri_norm::compare::compare_ports;
///
/// assert_eq!(compare_ports(Some("9"), Some("10")), Ordering::Less);
/// assert_eq!(compare_ports(Some("443"), Some("80")), Ordering::Greater);
/// assert_eq!(compare_ports(None, Some("")), Ordering::Less);
/// ```
#[must_use]
pub fn compare_ports(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

/// Compares two references by their generic components.
///
/// The order is host, port (numerically), user information, path segments, query, and
/// fragment. Strings compare ordinally and absence sorts first.
#[must_use]
pub fn generic_compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: Reference + ?Sized,
    B: Reference + ?Sized,
{
    a.host()
        .cmp(&b.host())
        .then_with(|| compare_ports(a.port(), b.port()))
        .then_with(|| a.user_info().cmp(&b.user_info()))
        .then_with(|| a.path_segments().cmp(b.path_segments()))
        .then_with(|| a.query().cmp(&b.query()))
        .then_with(|| a.fragment().cmp(&b.fragment()))
}

/// Compares two absolute URIs, scheme first.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use uri_norm::compare::compare;
/// use uri_norm::types::Uri;
///
/// let a = Uri::parse("http://example.com:8080/")?;
/// let b = Uri::parse("http://example.com:10000/")?;
/// let c = Uri::parse("https://example.com/")?;
/// assert_eq!(compare(&a, &b), Ordering::Less);
/// assert_eq!(compare(&b, &c), Ordering::Less);
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
#[must_use]
pub fn compare<A, B>(a: &A, b: &B) -> Ordering
where
    A: AbsoluteUri + ?Sized,
    B: AbsoluteUri + ?Sized,
{
    a.scheme()
        .cmp(b.scheme())
        .then_with(|| match (a.comparison_key(), b.comparison_key()) {
            (Some(a_key), Some(b_key)) => a_key.cmp(&b_key),
            _ => generic_compare(a, b),
        })
}

/// Feeds the scheme and the generic components of a URI to the hasher.
///
/// Values with equal comparison keys always have equal generic components, so this is
/// consistent with [`compare`].
pub fn hash_uri<U, H>(uri: &U, state: &mut H)
where
    U: AbsoluteUri + ?Sized,
    H: Hasher,
{
    uri.scheme().hash(state);
    uri.host().hash(state);
    uri.port().hash(state);
    uri.user_info().hash(state);
    uri.path_segments().hash(state);
    uri.query().hash(state);
    uri.fragment().hash(state);
}
