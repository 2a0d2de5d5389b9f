//! Generic absolute URI.

use core::any::Any;
use core::fmt;

use crate::components::{parse_uri_reference, UriReferenceComponents};
use crate::error::{ConstructionError, Error, FormatError, Part};
use crate::format::ComponentsDisplay;
use crate::normalize::{
    check_path, normalize_authority_host, normalize_port, normalize_scheme, remove_dot_segments,
};
use crate::resolve::resolve;
use crate::types::{AbsoluteUri, Reference, RelativeReference};

/// A normalized absolute URI of any scheme.
///
/// The scheme and the host are lowercase, the port has no leading zeros, and the path has no
/// dot segments.
///
/// # Examples
///
/// ```
/// use uri_norm::types::{AbsoluteUri, Reference, Uri};
///
/// let uri = Uri::parse("HTTP://User@Example.COM:0080/a/./b/../c")?;
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.host(), Some("example.com"));
/// assert_eq!(uri.port(), Some("80"));
/// assert_eq!(uri.to_string(), "http://User@example.com:80/a/c");
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Uri {
    /// Scheme.
    scheme: String,
    /// User information.
    user_info: Option<String>,
    /// Host.
    host: Option<String>,
    /// Port.
    port: Option<String>,
    /// Path segments.
    path_segments: Vec<String>,
    /// Query.
    query: Option<String>,
    /// Fragment.
    fragment: Option<String>,
}

impl Uri {
    /// Constructs a normalized URI from components.
    ///
    /// The scheme is required. Dot segments are removed before the path is checked against
    /// the authority.
    pub fn from_components(components: UriReferenceComponents) -> Result<Self, ConstructionError> {
        let scheme = components
            .scheme
            .as_deref()
            .ok_or(ConstructionError::MissingScheme)
            .and_then(normalize_scheme)?;
        let port = components.port.as_deref().map(normalize_port).transpose()?;
        let has_authority = components.has_authority();

        let mut path_segments = remove_dot_segments(components.path_segments);
        if path_segments.is_empty() {
            path_segments.push(String::new());
        }
        check_path(&path_segments, has_authority)?;

        Ok(Self {
            scheme,
            user_info: components.user_info,
            host: normalize_authority_host(components.host.as_deref(), has_authority),
            port,
            path_segments,
            query: components.query,
            fragment: components.fragment,
        })
    }

    /// Parses and normalizes an absolute URI.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let components = parse_uri_reference(s)?;
        if components.scheme.is_none() {
            return Err(FormatError::new(Part::AbsoluteUri, s, s).into());
        }
        Ok(Self::from_components(components)?)
    }

    /// Resolves a relative reference against this URI.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_norm::types::{RelativeReference, Uri};
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    /// let reference = RelativeReference::parse("../g?y")?;
    /// assert_eq!(base.resolve(&reference)?.to_string(), "http://a/b/g?y");
    /// # Ok::<_, uri_norm::error::Error>(())
    /// ```
    pub fn resolve(&self, reference: &RelativeReference) -> Result<Self, Error> {
        resolve(self, reference, |components| {
            Ok(Self::from_components(UriReferenceComponents {
                scheme: Some(self.scheme.clone()),
                ..components
            })?)
        })
    }

    /// Returns a display proxy that omits the user information.
    #[inline]
    #[must_use]
    pub fn display_without_user_info(&self) -> impl fmt::Display + '_ {
        ComponentsDisplay::from_reference(Some(&self.scheme), self).without_user_info()
    }

    /// Decomposes into components.
    #[must_use]
    pub fn into_components(self) -> UriReferenceComponents {
        UriReferenceComponents {
            scheme: Some(self.scheme),
            user_info: self.user_info,
            host: self.host,
            port: self.port,
            path_segments: self.path_segments,
            query: self.query,
            fragment: self.fragment,
        }
    }
}

impl Reference for Uri {
    #[inline]
    fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    #[inline]
    fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[inline]
    fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    #[inline]
    fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    #[inline]
    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[inline]
    fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl AbsoluteUri for Uri {
    #[inline]
    fn scheme(&self) -> &str {
        &self.scheme
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

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ComponentsDisplay::from_reference(Some(&self.scheme), self), f)
    }
}

impl From<Uri> for UriReferenceComponents {
    #[inline]
    fn from(uri: Uri) -> Self {
        uri.into_components()
    }
}

impl_string_conversions!(Uri, "an absolute URI");
impl_uri_ordering!(Uri);
