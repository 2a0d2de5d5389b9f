//! `http` and `https` URIs.
//!
//! Both schemes share one implementation, [`WebUri`], parameterized by a [`WebScheme`] marker.
//! On top of the generic normalization:
//!
//! * user information is rejected,
//! * the host is required and must not be empty,
//! * an empty port or the default port is dropped, and
//! * the path is always absolute: `http://example.com/a` and `http://example.com` keep their
//!   form, while a relative first segment gets a leading `/`.

use core::any::Any;
use core::fmt;
use core::marker::PhantomData;

use crate::components::{parse_uri_reference, UriReferenceComponents};
use crate::error::{DomainError, Error, FormatError, Part};
use crate::normalize::normalize_port;
use crate::resolve::resolve;
use crate::scheme::internal::Sealed;
use crate::types::{AbsoluteUri, Reference, RelativeReference, Uri};

/// A web scheme.
///
/// This trait is sealed; it is implemented only by [`Http`] and [`Https`].
pub trait WebScheme: Sealed + fmt::Debug + Clone + Copy + Send + Sync + 'static {
    /// Scheme name, lowercase.
    const SCHEME: &'static str;
    /// Default port, without leading zeros.
    const DEFAULT_PORT: &'static str;
}

/// The `http` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Http {}

impl WebScheme for Http {
    const SCHEME: &'static str = "http";
    const DEFAULT_PORT: &'static str = "80";
}

/// The `https` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Https {}

impl WebScheme for Https {
    const SCHEME: &'static str = "https";
    const DEFAULT_PORT: &'static str = "443";
}

/// An `http` URI.
pub type HttpUri = WebUri<Http>;

/// An `https` URI.
pub type HttpsUri = WebUri<Https>;

/// A normalized URI of a web scheme.
///
/// # Examples
///
/// ```
/// use uri_norm::scheme::http::HttpsUri;
/// use uri_norm::types::Reference;
///
/// let uri = HttpsUri::parse("HTTPS://Example.COM:443?q")?;
/// assert_eq!(uri.port(), None);
/// assert_eq!(uri.path_segments(), [""]);
/// assert_eq!(uri.to_string(), "https://example.com?q");
///
/// assert!(HttpsUri::parse("https://user@example.com/").is_err());
/// assert!(HttpsUri::parse("http://example.com/").is_err());
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WebUri<S> {
    /// Generic representation.
    inner: Uri,
    /// Scheme marker.
    _scheme: PhantomData<fn() -> S>,
}

impl<S: WebScheme> WebUri<S> {
    /// Constructs a normalized URI from components.
    ///
    /// An absent scheme means the scheme of `S`; any other scheme is rejected.
    pub fn from_components(components: UriReferenceComponents) -> Result<Self, Error> {
        if let Some(scheme) = &components.scheme {
            if !scheme.eq_ignore_ascii_case(S::SCHEME) {
                return Err(DomainError::SchemeMismatch {
                    expected: S::SCHEME,
                    found: scheme.clone(),
                }
                .into());
            }
        }
        if components.user_info.is_some() {
            return Err(DomainError::UserInfoNotAllowed { scheme: S::SCHEME }.into());
        }
        let host = match components.host {
            Some(host) if !host.is_empty() => host,
            _ => return Err(DomainError::HostRequired { scheme: S::SCHEME }.into()),
        };
        let port = match components.port.as_deref().map(normalize_port).transpose()? {
            Some(port) if port.is_empty() || port == S::DEFAULT_PORT => None,
            port => port,
        };

        let mut path_segments = components.path_segments;
        match path_segments.first() {
            None => path_segments.push(String::new()),
            Some(first) if !first.is_empty() => path_segments.insert(0, String::new()),
            Some(_) => {}
        }

        let inner = Uri::from_components(UriReferenceComponents {
            scheme: Some(S::SCHEME.to_owned()),
            user_info: None,
            host: Some(host),
            port,
            path_segments,
            query: components.query,
            fragment: components.fragment,
        })?;
        Ok(Self {
            inner,
            _scheme: PhantomData,
        })
    }

    /// Parses and normalizes a URI of this scheme.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let components = parse_uri_reference(s)?;
        if components.scheme.is_none() {
            return Err(FormatError::new(Part::AbsoluteUri, s, s).into());
        }
        Self::from_components(components)
    }

    /// Resolves a relative reference against this URI.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_norm::scheme::http::HttpUri;
    /// use uri_norm::types::RelativeReference;
    ///
    /// let base = HttpUri::parse("http://example.com/a/b")?;
    /// let reference = RelativeReference::parse("//other.example:80")?;
    /// assert_eq!(base.resolve(&reference)?.to_string(), "http://other.example");
    /// # Ok::<_, uri_norm::error::Error>(())
    /// ```
    pub fn resolve(&self, reference: &RelativeReference) -> Result<Self, Error> {
        resolve(self, reference, Self::from_components)
    }

    /// Returns the generic representation.
    #[inline]
    #[must_use]
    pub fn as_uri(&self) -> &Uri {
        &self.inner
    }

    /// Decomposes into components.
    #[inline]
    #[must_use]
    pub fn into_components(self) -> UriReferenceComponents {
        self.inner.into_components()
    }
}

impl<S: WebScheme> Reference for WebUri<S> {
    #[inline]
    fn user_info(&self) -> Option<&str> {
        None
    }

    #[inline]
    fn host(&self) -> Option<&str> {
        self.inner.host()
    }

    #[inline]
    fn port(&self) -> Option<&str> {
        self.inner.port()
    }

    #[inline]
    fn path_segments(&self) -> &[String] {
        self.inner.path_segments()
    }

    #[inline]
    fn query(&self) -> Option<&str> {
        self.inner.query()
    }

    #[inline]
    fn fragment(&self) -> Option<&str> {
        self.inner.fragment()
    }
}

impl<S: WebScheme> AbsoluteUri for WebUri<S> {
    #[inline]
    fn scheme(&self) -> &str {
        S::SCHEME
    }

    fn resolve_relative(
        &self,
        reference: &RelativeReference,
    ) -> Result<Box<dyn AbsoluteUri>, Error> {
        Ok(Box::new(self.resolve(reference)?))
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

impl<S: WebScheme> fmt::Display for WebUri<S> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl<S: WebScheme> From<WebUri<S>> for Uri {
    #[inline]
    fn from(uri: WebUri<S>) -> Self {
        uri.inner
    }
}

impl<S: WebScheme> From<WebUri<S>> for UriReferenceComponents {
    #[inline]
    fn from(uri: WebUri<S>) -> Self {
        uri.into_components()
    }
}

impl_string_conversions!(WebUri<S>, "an http or https URI", S: WebScheme);
impl_uri_ordering!(WebUri<S>, S: WebScheme);
