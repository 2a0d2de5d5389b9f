//! `tag` URIs ([RFC 4151]).
//!
//! ```text
//! tagURI        = "tag:" taggingEntity ":" specific [ "#" fragment ]
//! taggingEntity = authorityName "," date
//! authorityName = DNSname / emailAddress
//! date          = year ["-" month ["-" day]]
//! ```
//!
//! TAG URIs are ordered by authority name, date, specific part, and fragment rather than by
//! the generic components.
//!
//! [RFC 4151]: https://www.rfc-editor.org/rfc/rfc4151.html

use core::any::Any;
use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use crate::compare::ComparisonKey;
use crate::components::UriReferenceComponents;
use crate::error::{DomainError, Error, FormatError, Part};
use crate::format::format_components;
use crate::percent_encode::{
    decode_unreserved, is_fragment_safe, is_query_safe, is_sub_delim, is_unreserved,
    percent_decode, percent_encode,
};
use crate::types::{AbsoluteUri, Reference, RelativeReference, Uri};

/// The `tag` scheme name.
pub const TAG_SCHEME: &str = "tag";

/// Returns true if the byte may appear unencoded in an authority name.
///
/// The authority name is a non-empty path segment without a colon.
#[inline]
#[must_use]
pub fn is_authority_name_safe(b: u8) -> bool {
    is_unreserved(b) || is_sub_delim(b) || b == b'@'
}

/// Returns true if the string is a DNS name or `user@` followed by a DNS name.
///
/// # Examples
///
/// ```
/// use uri_norm::scheme::tag::is_valid_authority_name;
///
/// assert!(is_valid_authority_name("example.com"));
/// assert!(is_valid_authority_name("first.last@example-1.com"));
/// assert!(!is_valid_authority_name("example..com"));
/// assert!(!is_valid_authority_name("-example.com"));
/// assert!(!is_valid_authority_name("a@b@example.com"));
/// ```
#[must_use]
pub fn is_valid_authority_name(name: &str) -> bool {
    let dns_name = match name.split_once('@') {
        Some((user, dns_name)) => {
            let user_ok = !user.is_empty()
                && user
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'));
            if !user_ok {
                return false;
            }
            dns_name
        }
        None => name,
    };
    dns_name.split('.').all(is_dns_label)
}

/// Returns true if the string is `[A-Za-z0-9]([-A-Za-z0-9]*[A-Za-z0-9])?`.
fn is_dns_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

/// Returns the number of days in the month.
fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        2 if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// The date of a TAG URI: a year, optionally with a month, optionally with a day.
///
/// Dates order chronologically, and a less precise date sorts before a more precise one
/// starting on the same day.
///
/// # Examples
///
/// ```
/// use uri_norm::scheme::tag::TagDate;
///
/// let date: TagDate = "2024-02-29".parse()?;
/// assert_eq!(date.month(), Some(2));
/// assert!(TagDate::new(2023, Some(2), Some(29)).is_err());
/// assert!(TagDate::parse("2024-2").is_err());
/// assert!(TagDate::new(2024, None, None)? < date);
/// # Ok::<_, uri_norm::error::DomainError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagDate {
    /// Year, `1..=9999`.
    year: u16,
    /// Month, `1..=12`.
    month: Option<u8>,
    /// Day of month.
    day: Option<u8>,
}

impl TagDate {
    /// Creates a date, checking that it exists in the calendar.
    ///
    /// A day requires a month.
    pub fn new(year: u16, month: Option<u8>, day: Option<u8>) -> Result<Self, DomainError> {
        let date = Self { year, month, day };
        let valid = (1..=9999).contains(&year)
            && match (month, day) {
                (None, None) => true,
                (Some(month), None) => (1..=12).contains(&month),
                (Some(month), Some(day)) => {
                    (1..=12).contains(&month) && (1..=days_in_month(year, month)).contains(&day)
                }
                (None, Some(_)) => false,
            };
        if !valid {
            return Err(DomainError::InvalidDate(date.to_string()));
        }
        Ok(date)
    }

    /// Parses `YYYY[-MM[-DD]]`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidDate(s.to_owned());
        let mut fields = s.split('-');
        let year = fields
            .next()
            .and_then(|field| parse_digits(field, 4))
            .ok_or_else(invalid)?;
        let month = fields
            .next()
            .map(|field| parse_digits(field, 2).ok_or_else(invalid))
            .transpose()?;
        let day = fields
            .next()
            .map(|field| parse_digits(field, 2).ok_or_else(invalid))
            .transpose()?;
        if fields.next().is_some() {
            return Err(invalid());
        }
        Self::new(year, month, day)
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month.
    #[inline]
    #[must_use]
    pub fn month(&self) -> Option<u8> {
        self.month
    }

    /// Returns the day of month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> Option<u8> {
        self.day
    }
}

/// Parses exactly `len` ASCII digits.
fn parse_digits<T: FromStr>(s: &str, len: usize) -> Option<T> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for TagDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{:02}", month)?;
        }
        if let Some(day) = self.day {
            write!(f, "-{:02}", day)?;
        }
        Ok(())
    }
}

impl FromStr for TagDate {
    type Err = DomainError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A TAG URI.
///
/// # Examples
///
/// ```
/// use uri_norm::scheme::tag::TagUri;
/// use uri_norm::types::{AbsoluteUri, Reference};
///
/// let tag = TagUri::parse("tag:timothy@hr.example.com,2001-02:employee%20records#x")?;
/// assert_eq!(tag.authority_name(), "timothy@hr.example.com");
/// assert_eq!(tag.date().to_string(), "2001-02");
/// assert_eq!(tag.specific(), "employee records");
/// assert_eq!(tag.tag_fragment(), Some("x"));
///
/// // The generic view of the same URI.
/// assert_eq!(tag.path_segments(), ["timothy@hr.example.com,2001-02:employee records"]);
/// assert!(tag.comparison_key().is_some());
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
#[derive(Clone)]
pub struct TagUri {
    /// Authority name, decoded.
    authority_name: String,
    /// Date.
    date: TagDate,
    /// Specific part, decoded.
    specific: String,
    /// Fragment, decoded.
    fragment: Option<String>,
    /// Generic view, built on first use.
    generic: OnceLock<Uri>,
}

impl TagUri {
    /// Creates a TAG URI from its parts.
    pub fn new(
        authority_name: impl Into<String>,
        date: TagDate,
        specific: impl Into<String>,
        fragment: Option<String>,
    ) -> Result<Self, DomainError> {
        let authority_name = authority_name.into();
        if !is_valid_authority_name(&authority_name) {
            return Err(DomainError::InvalidAuthorityName(authority_name));
        }
        Ok(Self {
            authority_name,
            date,
            specific: specific.into(),
            fragment,
            generic: OnceLock::new(),
        })
    }

    /// Parses a TAG URI.
    ///
    /// The scheme is matched case-insensitively.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Self::parse_decoded(&decode_unreserved(s), s).map_err(|e| {
            tracing::debug!(input = s, error = %e, "failed to parse TAG URI");
            e
        })
    }

    /// Parses the string after unreserved characters have been decoded.
    fn parse_decoded(s: &str, input: &str) -> Result<Self, Error> {
        let rest = match s.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("tag:") => &s[4..],
            _ => return Err(FormatError::new(Part::Scheme, s, input).into()),
        };
        let (entity, tail) = rest
            .split_once(':')
            .ok_or_else(|| FormatError::new(Part::TaggingEntity, rest, input))?;
        let (authority_name, date) = entity
            .split_once(',')
            .ok_or_else(|| FormatError::new(Part::TaggingEntity, entity, input))?;
        let date =
            TagDate::parse(date).map_err(|_| FormatError::new(Part::Date, date, input))?;
        let (specific, fragment) = match tail.split_once('#') {
            Some((specific, fragment)) => (specific, Some(fragment)),
            None => (tail, None),
        };

        let authority_name = percent_decode(authority_name, is_authority_name_safe)
            .map_err(|e| FormatError::decode(Part::AuthorityName, authority_name, input, e))?;
        if authority_name.is_empty() {
            return Err(FormatError::new(Part::AuthorityName, "", input).into());
        }
        let specific = percent_decode(specific, is_query_safe)
            .map_err(|e| FormatError::decode(Part::Specific, specific, input, e))?;
        let fragment = fragment
            .map(|v| {
                percent_decode(v, is_fragment_safe)
                    .map_err(|e| FormatError::decode(Part::Fragment, v, input, e))
            })
            .transpose()?;

        Ok(Self::new(authority_name, date, specific, fragment)?)
    }

    /// Constructs a TAG URI from generic components.
    ///
    /// The components are formatted and the result parsed as a TAG URI. An absent scheme
    /// means `tag`.
    pub fn from_components(components: UriReferenceComponents) -> Result<Self, Error> {
        match &components.scheme {
            Some(scheme) if !scheme.eq_ignore_ascii_case(TAG_SCHEME) => {
                return Err(DomainError::SchemeMismatch {
                    expected: TAG_SCHEME,
                    found: scheme.clone(),
                }
                .into());
            }
            _ => {}
        }
        let components = UriReferenceComponents {
            scheme: Some(TAG_SCHEME.to_owned()),
            ..components
        };
        Self::parse(&format_components(&components))
    }

    /// Returns the authority name.
    #[inline]
    #[must_use]
    pub fn authority_name(&self) -> &str {
        &self.authority_name
    }

    /// Returns the date.
    #[inline]
    #[must_use]
    pub fn date(&self) -> TagDate {
        self.date
    }

    /// Returns the specific part.
    #[inline]
    #[must_use]
    pub fn specific(&self) -> &str {
        &self.specific
    }

    /// Returns the fragment.
    ///
    /// This is the same as [`Reference::fragment`], without building the generic view.
    #[inline]
    #[must_use]
    pub fn tag_fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns the generic view of this URI.
    pub fn as_uri(&self) -> &Uri {
        self.generic.get_or_init(|| {
            Uri::parse(&self.to_string()).expect("[validity] a formatted TAG URI is a valid URI")
        })
    }
}

impl fmt::Debug for TagUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagUri")
            .field("authority_name", &self.authority_name)
            .field("date", &self.date)
            .field("specific", &self.specific)
            .field("fragment", &self.fragment)
            .finish()
    }
}

impl fmt::Display for TagUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{},{}:{}",
            TAG_SCHEME,
            percent_encode(&self.authority_name, is_authority_name_safe),
            self.date,
            percent_encode(&self.specific, is_query_safe)
        )?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", percent_encode(fragment, is_fragment_safe))?;
        }
        Ok(())
    }
}

impl Reference for TagUri {
    #[inline]
    fn user_info(&self) -> Option<&str> {
        self.as_uri().user_info()
    }

    #[inline]
    fn host(&self) -> Option<&str> {
        self.as_uri().host()
    }

    #[inline]
    fn port(&self) -> Option<&str> {
        self.as_uri().port()
    }

    #[inline]
    fn path_segments(&self) -> &[String] {
        self.as_uri().path_segments()
    }

    #[inline]
    fn query(&self) -> Option<&str> {
        self.as_uri().query()
    }

    #[inline]
    fn fragment(&self) -> Option<&str> {
        self.as_uri().fragment()
    }
}

impl AbsoluteUri for TagUri {
    #[inline]
    fn scheme(&self) -> &str {
        TAG_SCHEME
    }

    fn comparison_key(&self) -> Option<ComparisonKey<'_>> {
        Some(
            ComparisonKey::new()
                .text(&self.authority_name)
                .number(i64::from(self.date.year))
                .optional_number(self.date.month.map(i64::from))
                .optional_number(self.date.day.map(i64::from))
                .text(&self.specific)
                .optional_text(self.fragment.as_deref()),
        )
    }

    fn resolve_relative(
        &self,
        _reference: &RelativeReference,
    ) -> Result<Box<dyn AbsoluteUri>, Error> {
        Err(DomainError::ResolutionUnsupported {
            scheme: TAG_SCHEME,
        }
        .into())
    }

    #[inline]
    fn clone_box(&self) -> Box<dyn AbsoluteUri> {
        Box::new(self.clone())
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl_string_conversions!(TagUri, "a TAG URI");
impl_uri_ordering!(TagUri);

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s: &str) -> TagUri {
        TagUri::parse(s).expect("should be a valid TAG URI")
    }

    #[test]
    fn rfc4151_examples() {
        for s in [
            "tag:timothy@hr.example.com,2001:web/externalHome",
            "tag:sandro@w3.org,2004-05:Sandro",
            "tag:my-ids.com,2001-09-15:TimKindberg:presentations:UBath2004-05-19",
            "tag:blogger.example.com,2000:blog-1234.post-5678",
            "tag:jo@example.com,2000-02-03:/a/b?c#d",
        ] {
            assert_eq!(tag(s).to_string(), s);
        }
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(tag("TAG:example.com,2000:x").to_string(), "tag:example.com,2000:x");
    }

    #[test]
    fn malformed_parts() {
        let part = |s: &str| match TagUri::parse(s).unwrap_err() {
            Error::Format(e) => e.part(),
            e => panic!("unexpected error {e:?}"),
        };
        assert_eq!(part("urn:example.com,2000:x"), Part::Scheme);
        assert_eq!(part("tag:example.com"), Part::TaggingEntity);
        assert_eq!(part("tag:example.com:x"), Part::TaggingEntity);
        assert_eq!(part("tag:example.com,2000-1:x"), Part::Date);
        assert_eq!(part("tag:example.com,2000-02-30:x"), Part::Date);
        assert_eq!(part("tag:,2000:x"), Part::AuthorityName);
        assert_eq!(part("tag:exa%zzmple.com,2000:x"), Part::AuthorityName);
        assert_eq!(part("tag:example.com,2000:a b"), Part::Specific);
        assert_eq!(part("tag:example.com,2000:x#a#b"), Part::Fragment);
    }

    #[test]
    fn invalid_authority_name() {
        assert_eq!(
            TagUri::parse("tag:example_com,2000:x").unwrap_err(),
            Error::Domain(DomainError::InvalidAuthorityName("example_com".to_owned()))
        );
    }

    #[test]
    fn dates() {
        assert!(TagDate::new(2000, Some(2), Some(29)).is_ok());
        assert!(TagDate::new(1900, Some(2), Some(29)).is_err());
        assert!(TagDate::new(0, None, None).is_err());
        assert!(TagDate::new(2000, None, Some(1)).is_err());
        assert!(TagDate::new(2000, Some(13), None).is_err());
        assert!(TagDate::parse("2000-01-01-01").is_err());
        assert!(TagDate::parse("20000").is_err());
        assert_eq!(TagDate::parse("0999-12-31").expect("valid").to_string(), "0999-12-31");
    }

    #[test]
    fn ordering_uses_the_date() {
        let mut tags = vec![
            tag("tag:example.com,2001:x"),
            tag("tag:example.com,2000-02:x"),
            tag("tag:example.com,2000:y"),
            tag("tag:example.com,2000:x"),
        ];
        tags.sort();
        let sorted: Vec<String> = tags.iter().map(ToString::to_string).collect();
        assert_eq!(
            sorted,
            [
                "tag:example.com,2000:x",
                "tag:example.com,2000:y",
                "tag:example.com,2000-02:x",
                "tag:example.com,2001:x",
            ]
        );
    }

    #[test]
    fn from_components_round_trips_through_the_string() {
        let components = UriReferenceComponents {
            path_segments: vec!["example.com,2000:a".to_owned(), "b".to_owned()],
            query: Some("c".to_owned()),
            ..Default::default()
        };
        let uri = TagUri::from_components(components).expect("valid");
        assert_eq!(uri.specific(), "a/b?c");
        assert_eq!(uri.query(), Some("c"));
    }

    #[test]
    fn resolution_is_unsupported() {
        let reference = RelativeReference::parse("x").expect("valid");
        assert_eq!(
            tag("tag:example.com,2000:x").resolve_relative(&reference).unwrap_err(),
            Error::Domain(DomainError::ResolutionUnsupported { scheme: "tag" })
        );
    }
}
