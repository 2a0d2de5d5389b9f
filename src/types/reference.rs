//! URI references.

use core::fmt;

use crate::error::Error;
use crate::scheme::registry;
use crate::types::{AbsoluteUri, Reference, RelativeReference};

/// Either an absolute URI of some scheme or a relative reference.
///
/// # Examples
///
/// ```
/// use uri_norm::scheme::http::HttpUri;
/// use uri_norm::types::{Reference, UriReference};
///
/// let reference = UriReference::parse("HTTP://Example.com:80")?;
/// let http = reference
///     .as_absolute()
///     .and_then(|uri| uri.downcast_ref::<HttpUri>())
///     .expect("http URIs are registered");
/// assert_eq!(http.to_string(), "http://example.com");
///
/// let relative = UriReference::parse("../a?b")?;
/// assert!(relative.is_relative());
/// assert_eq!(relative.query(), Some("b"));
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub enum UriReference {
    /// An absolute URI.
    Absolute(Box<dyn AbsoluteUri>),
    /// A relative reference.
    Relative(RelativeReference),
}

impl UriReference {
    /// Parses a URI reference with the standard scheme registry.
    ///
    /// Registered schemes (`http`, `https`, `tag`) produce their own types; other schemes
    /// produce a generic [`Uri`][crate::types::Uri].
    #[inline]
    pub fn parse(s: &str) -> Result<Self, Error> {
        registry::standard().parse(s)
    }

    /// Returns true if this is a relative reference.
    #[inline]
    #[must_use]
    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }

    /// Returns the scheme of an absolute URI.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.as_absolute().map(|uri| uri.scheme())
    }

    /// Returns the absolute URI, if this is one.
    #[inline]
    #[must_use]
    pub fn as_absolute(&self) -> Option<&dyn AbsoluteUri> {
        match self {
            Self::Absolute(uri) => Some(uri.as_ref()),
            Self::Relative(_) => None,
        }
    }

    /// Returns the relative reference, if this is one.
    #[inline]
    #[must_use]
    pub fn as_relative(&self) -> Option<&RelativeReference> {
        match self {
            Self::Absolute(_) => None,
            Self::Relative(reference) => Some(reference),
        }
    }
}

/// Forwards a method call to either variant.
macro_rules! forward {
    ($self:ident.$method:ident()) => {
        match $self {
            Self::Absolute(uri) => uri.$method(),
            Self::Relative(reference) => reference.$method(),
        }
    };
}

impl Reference for UriReference {
    #[inline]
    fn user_info(&self) -> Option<&str> {
        forward!(self.user_info())
    }

    #[inline]
    fn host(&self) -> Option<&str> {
        forward!(self.host())
    }

    #[inline]
    fn port(&self) -> Option<&str> {
        forward!(self.port())
    }

    #[inline]
    fn path_segments(&self) -> &[String] {
        forward!(self.path_segments())
    }

    #[inline]
    fn query(&self) -> Option<&str> {
        forward!(self.query())
    }

    #[inline]
    fn fragment(&self) -> Option<&str> {
        forward!(self.fragment())
    }
}

impl fmt::Display for UriReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(uri) => fmt::Display::fmt(uri, f),
            Self::Relative(reference) => fmt::Display::fmt(reference, f),
        }
    }
}

impl PartialEq for UriReference {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absolute(a), Self::Absolute(b)) => a == b,
            (Self::Relative(a), Self::Relative(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for UriReference {}

impl From<RelativeReference> for UriReference {
    #[inline]
    fn from(reference: RelativeReference) -> Self {
        Self::Relative(reference)
    }
}

impl From<Box<dyn AbsoluteUri>> for UriReference {
    #[inline]
    fn from(uri: Box<dyn AbsoluteUri>) -> Self {
        Self::Absolute(uri)
    }
}

impl_string_conversions!(UriReference, "a URI reference");
