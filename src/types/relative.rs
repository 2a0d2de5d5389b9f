//! Relative references.

use core::cmp::Ordering;
use core::fmt;

use crate::compare::generic_compare;
use crate::components::{parse_uri_reference, UriReferenceComponents};
use crate::error::{ConstructionError, Error, FormatError, Part};
use crate::format::ComponentsDisplay;
use crate::normalize::{check_path, normalize_authority_host, normalize_port};
use crate::types::{AbsoluteUri, Reference};

/// A relative reference: a URI reference without a scheme.
///
/// The host is lowercase and the port has no leading zeros. Dot segments are kept, since they
/// are meaningful until the reference is resolved. If there is no authority and the first
/// path segment contains a colon, a `.` segment is prepended so that the formatted string
/// cannot be read as having a scheme.
///
/// # Examples
///
/// ```
/// use uri_norm::components::UriReferenceComponents;
/// use uri_norm::types::{Reference, RelativeReference};
///
/// let reference = RelativeReference::from_components(UriReferenceComponents {
///     path_segments: vec!["a:b".to_owned(), "c".to_owned()],
///     ..Default::default()
/// })?;
/// assert_eq!(reference.path_segments(), [".", "a:b", "c"]);
/// assert_eq!(reference.to_string(), "./a:b/c");
/// # Ok::<_, uri_norm::error::ConstructionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeReference {
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

impl RelativeReference {
    /// Constructs a normalized relative reference from components.
    ///
    /// The scheme must be absent.
    pub fn from_components(components: UriReferenceComponents) -> Result<Self, ConstructionError> {
        if let Some(scheme) = &components.scheme {
            return Err(ConstructionError::UnexpectedScheme(scheme.clone()));
        }
        let port = components.port.as_deref().map(normalize_port).transpose()?;
        let has_authority = components.has_authority();

        let mut path_segments = components.path_segments;
        if path_segments.is_empty() {
            path_segments.push(String::new());
        }
        if !has_authority && path_segments[0].contains(':') {
            path_segments.insert(0, ".".to_owned());
        }
        check_path(&path_segments, has_authority)?;

        Ok(Self {
            user_info: components.user_info,
            host: normalize_authority_host(components.host.as_deref(), has_authority),
            port,
            path_segments,
            query: components.query,
            fragment: components.fragment,
        })
    }

    /// Parses a relative reference.
    ///
    /// Fails if the string has a scheme.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let components = parse_uri_reference(s)?;
        if components.scheme.is_some() {
            return Err(FormatError::new(Part::RelativeReference, s, s).into());
        }
        Ok(Self::from_components(components)?)
    }

    /// Resolves this reference against an absolute URI.
    ///
    /// The result has the concrete type of `base`.
    #[inline]
    pub fn resolve_against<B>(&self, base: &B) -> Result<Box<dyn AbsoluteUri>, Error>
    where
        B: AbsoluteUri + ?Sized,
    {
        base.resolve_relative(self)
    }

    /// Returns a display proxy that omits the user information.
    #[inline]
    #[must_use]
    pub fn display_without_user_info(&self) -> impl fmt::Display + '_ {
        ComponentsDisplay::from_reference(None, self).without_user_info()
    }

    /// Decomposes into components.
    #[must_use]
    pub fn into_components(self) -> UriReferenceComponents {
        UriReferenceComponents {
            scheme: None,
            user_info: self.user_info,
            host: self.host,
            port: self.port,
            path_segments: self.path_segments,
            query: self.query,
            fragment: self.fragment,
        }
    }
}

impl Reference for RelativeReference {
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

impl fmt::Display for RelativeReference {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ComponentsDisplay::from_reference(None, self), f)
    }
}

impl PartialOrd for RelativeReference {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RelativeReference {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        generic_compare(self, other)
    }
}

impl From<RelativeReference> for UriReferenceComponents {
    #[inline]
    fn from(reference: RelativeReference) -> Self {
        reference.into_components()
    }
}

impl_string_conversions!(RelativeReference, "a relative reference");
