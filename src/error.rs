//! Errors.
//!
//! Failures are split by stage: [`DecodeError`] for percent-decoding, [`FormatError`] for
//! string parsing, [`ConstructionError`] for violated component invariants, and
//! [`DomainError`] for scheme-specific rules. [`Error`] unifies them for fallible entry
//! points that can hit more than one stage.

use core::fmt;

/// A named component of a URI reference, used to locate a [`FormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Part {
    /// The whole string was expected to be an absolute URI.
    AbsoluteUri,
    /// The whole string was expected to be a relative reference.
    RelativeReference,
    /// Scheme.
    Scheme,
    /// User information.
    UserInfo,
    /// Host.
    Host,
    /// Port.
    Port,
    /// A single path segment.
    PathSegment,
    /// Query.
    Query,
    /// Fragment.
    Fragment,
    /// `authorityName "," date` prefix of a TAG URI.
    TaggingEntity,
    /// Authority name of a TAG URI.
    AuthorityName,
    /// Date of a TAG URI.
    Date,
    /// Specific part of a TAG URI.
    Specific,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AbsoluteUri => "absolute URI",
            Self::RelativeReference => "relative reference",
            Self::Scheme => "scheme",
            Self::UserInfo => "user info",
            Self::Host => "host",
            Self::Port => "port",
            Self::PathSegment => "path segment",
            Self::Query => "query",
            Self::Fragment => "fragment",
            Self::TaggingEntity => "tagging entity",
            Self::AuthorityName => "authority name",
            Self::Date => "date",
            Self::Specific => "specific part",
        };
        f.write_str(s)
    }
}

/// Percent-decoding error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// A literal character outside of the safe set.
    #[error("character {character:?} at byte {index} of {value:?} must be percent-encoded")]
    UnsafeCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        index: usize,
        /// The whole input.
        value: String,
    },
    /// A `%` not followed by two hexadecimal digits.
    #[error("malformed percent-encoding at byte {index} of {value:?}")]
    MalformedEscape {
        /// Byte offset of the `%`.
        index: usize,
        /// The whole input.
        value: String,
    },
    /// The decoded bytes are not valid UTF-8.
    #[error("percent-decoded bytes of {value:?} are not valid UTF-8")]
    InvalidUtf8 {
        /// The whole input.
        value: String,
    },
}

/// Error on parsing a URI reference string.
///
/// Carries the component that failed, the offending value, and the full input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {part} {value:?} in {input:?}")]
pub struct FormatError {
    /// The failing component.
    part: Part,
    /// Raw value of the failing component.
    value: String,
    /// The full input string.
    input: String,
    /// Underlying decode failure, if any.
    #[source]
    source: Option<DecodeError>,
}

impl FormatError {
    /// Creates a new error without an underlying decode failure.
    #[must_use]
    pub(crate) fn new(part: Part, value: &str, input: &str) -> Self {
        Self {
            part,
            value: value.to_owned(),
            input: input.to_owned(),
            source: None,
        }
    }

    /// Creates a new error caused by a decode failure.
    #[must_use]
    pub(crate) fn decode(part: Part, value: &str, input: &str, source: DecodeError) -> Self {
        Self {
            source: Some(source),
            ..Self::new(part, value, input)
        }
    }

    /// Returns the component that failed.
    #[inline]
    #[must_use]
    pub fn part(&self) -> Part {
        self.part
    }

    /// Returns the raw value of the failing component.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the full input string.
    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the decode failure that caused this error, if any.
    #[inline]
    #[must_use]
    pub fn decode_error(&self) -> Option<&DecodeError> {
        self.source.as_ref()
    }
}

/// Violation of a component invariant while constructing a URI or a relative reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConstructionError {
    /// An absolute URI was constructed without a scheme.
    #[error("an absolute URI requires a scheme")]
    MissingScheme,
    /// A relative reference was constructed with a scheme.
    #[error("a relative reference cannot have a scheme (got {0:?})")]
    UnexpectedScheme(String),
    /// The scheme does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    #[error("invalid scheme {0:?}")]
    InvalidScheme(String),
    /// The port is not a string of decimal digits.
    #[error("invalid port {0:?}")]
    InvalidPort(String),
    /// An authority is present but the path is neither empty nor absolute.
    #[error("when an authority is present the path must be empty or absolute")]
    RelativePathWithAuthority,
    /// No authority is present but the path would begin with `//`.
    #[error("when no authority is present the path cannot begin with \"//\"")]
    AmbiguousPath,
}

/// Violation of a scheme-specific rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DomainError {
    /// The scheme does not allow user information.
    #[error("{scheme} URIs cannot carry user information")]
    UserInfoNotAllowed {
        /// Scheme name.
        scheme: &'static str,
    },
    /// The scheme requires a non-empty host.
    #[error("{scheme} URIs require a non-empty host")]
    HostRequired {
        /// Scheme name.
        scheme: &'static str,
    },
    /// Components were given with a different scheme.
    #[error("expected scheme {expected:?}, got {found:?}")]
    SchemeMismatch {
        /// Expected scheme name.
        expected: &'static str,
        /// Given scheme name.
        found: String,
    },
    /// A TAG authority name is neither a DNS name nor an email address.
    #[error("invalid TAG authority name {0:?}")]
    InvalidAuthorityName(String),
    /// A TAG date is out of range or not a calendar date.
    #[error("invalid TAG date {0}")]
    InvalidDate(String),
    /// The scheme does not define relative resolution.
    #[error("{scheme} URIs do not support relative resolution")]
    ResolutionUnsupported {
        /// Scheme name.
        scheme: &'static str,
    },
}

/// Any error this crate produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Parse error.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// Component invariant violation.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// Scheme-specific rule violation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}
