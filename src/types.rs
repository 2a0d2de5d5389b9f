//! URI reference types.
//!
//! ```text
//! URI-reference = URI / relative-ref
//! URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
//! relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
//! ```
//!
//! Every value is normalized at construction and immutable afterwards.
//!
//! * [`Uri`] is a generic absolute URI.
//! * [`RelativeReference`] has no scheme and can be resolved against any absolute URI.
//! * [`UriReference`] is either of them, as produced by [`UriReference::parse`].
//!
//! Absolute URIs of specific schemes ([`HttpUri`][crate::scheme::http::HttpUri],
//! [`TagUri`][crate::scheme::tag::TagUri], ...) share the [`AbsoluteUri`] trait, and a
//! [`UriReference`] holds them as trait objects.

use core::any::Any;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::compare::{compare, hash_uri, ComparisonKey};
use crate::components::{path_is_absolute, path_is_empty, UriReferenceComponents};
use crate::error::{DecodeError, Error};
use crate::query::decode_pairs;

pub use self::reference::UriReference;
pub use self::relative::RelativeReference;
pub use self::uri::Uri;

mod reference;
mod relative;
mod uri;

/// Read access to the components of a URI reference, except for the scheme.
pub trait Reference {
    /// Returns the user information.
    fn user_info(&self) -> Option<&str>;

    /// Returns the host.
    fn host(&self) -> Option<&str>;

    /// Returns the port.
    fn port(&self) -> Option<&str>;

    /// Returns the path segments. Never empty: the empty path is `[""]`.
    fn path_segments(&self) -> &[String];

    /// Returns the query.
    fn query(&self) -> Option<&str>;

    /// Returns the fragment.
    fn fragment(&self) -> Option<&str>;

    /// Returns true if any of user information, host, or port is present.
    #[inline]
    fn has_authority(&self) -> bool {
        self.user_info().is_some() || self.host().is_some() || self.port().is_some()
    }

    /// Returns true if the path is empty.
    #[inline]
    fn path_is_empty(&self) -> bool {
        path_is_empty(self.path_segments())
    }

    /// Returns true if the path starts with `/`.
    #[inline]
    fn path_is_absolute(&self) -> bool {
        path_is_absolute(self.path_segments())
    }

    /// Returns the query decoded as `application/x-www-form-urlencoded` pairs.
    ///
    /// The stored query is split and decoded as it is. A query set by
    /// [`with_query_pairs`][crate::build::Builder::with_query_pairs] reads back as the same
    /// pairs. A parsed query has had its escapes decoded already, so a `%26` in the original
    /// string splits like a literal `&`.
    fn query_pairs(&self) -> Option<Result<Vec<(String, String)>, DecodeError>> {
        self.query().map(|query| decode_pairs(query, |_| true))
    }

    /// Copies the components out. The scheme is left absent.
    fn to_components(&self) -> UriReferenceComponents {
        UriReferenceComponents {
            scheme: None,
            user_info: self.user_info().map(ToOwned::to_owned),
            host: self.host().map(ToOwned::to_owned),
            port: self.port().map(ToOwned::to_owned),
            path_segments: self.path_segments().to_vec(),
            query: self.query().map(ToOwned::to_owned),
            fragment: self.fragment().map(ToOwned::to_owned),
        }
    }
}

/// An absolute URI of some scheme.
///
/// The scheme is always lowercase. Values are ordered scheme first; for equal schemes, two
/// values that both provide a [`comparison_key`][Self::comparison_key] are ordered by their keys,
/// and all others by their generic components.
pub trait AbsoluteUri: Reference + fmt::Display + fmt::Debug + Any + Send + Sync {
    /// Returns the scheme.
    fn scheme(&self) -> &str;

    /// Returns the scheme-specific comparison key, if the scheme defines one.
    #[inline]
    fn comparison_key(&self) -> Option<ComparisonKey<'_>> {
        None
    }

    /// Resolves a relative reference against this URI.
    ///
    /// The result has the concrete type of `self`.
    fn resolve_relative(
        &self,
        reference: &RelativeReference,
    ) -> Result<Box<dyn AbsoluteUri>, Error>;

    /// Clones into a box.
    fn clone_box(&self) -> Box<dyn AbsoluteUri>;

    /// Returns `self` as `Any`, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Copies the components out, including the scheme.
    fn to_uri_components(&self) -> UriReferenceComponents {
        UriReferenceComponents {
            scheme: Some(self.scheme().to_owned()),
            ..self.to_components()
        }
    }
}

impl dyn AbsoluteUri {
    /// Returns the concrete value if it is of type `T`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: AbsoluteUri>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns true if the concrete value is of type `T`.
    #[inline]
    #[must_use]
    pub fn is<T: AbsoluteUri>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl Clone for Box<dyn AbsoluteUri> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for dyn AbsoluteUri {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for dyn AbsoluteUri {}

impl PartialOrd for dyn AbsoluteUri {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for dyn AbsoluteUri {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for dyn AbsoluteUri {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_uri(self, state);
    }
}
