//! Builders.
//!
//! A [`Builder`] collects components field by field and constructs the target type with
//! [`build`][Builder::build]. Every setter asks the target's [`FieldHook`] first, so a
//! scheme-specific rule fails at the offending call:
//!
//! ```
//! use uri_norm::build::HttpUriBuilder;
//! use uri_norm::error::DomainError;
//!
//! let builder = HttpUriBuilder::new().with_host("example.com")?;
//! assert_eq!(
//!     builder.with_user_info("user").unwrap_err(),
//!     DomainError::UserInfoNotAllowed { scheme: "http" }
//! );
//! # Ok::<_, DomainError>(())
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::components::UriReferenceComponents;
use crate::error::{DomainError, Error};
use crate::query::form_url_encode;
use crate::scheme::http::{Http, Https, WebScheme, WebUri};
use crate::types::{AbsoluteUri, Reference, RelativeReference, Uri};

/// A component set by a builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Field {
    /// Scheme.
    Scheme,
    /// User information.
    UserInfo,
    /// Host.
    Host,
    /// Port.
    Port,
    /// One path segment.
    PathSegment,
    /// Query.
    Query,
    /// Fragment.
    Fragment,
}

/// A validation hook consulted by every builder setter.
pub type FieldHook = fn(Field, Option<&str>) -> Result<(), DomainError>;

/// A hook accepting everything.
fn accept_all(_: Field, _: Option<&str>) -> Result<(), DomainError> {
    Ok(())
}

/// A hook for web schemes: user information is rejected and the scheme must match.
fn web_field_hook<S: WebScheme>(field: Field, value: Option<&str>) -> Result<(), DomainError> {
    match (field, value) {
        (Field::UserInfo, Some(_)) => Err(DomainError::UserInfoNotAllowed { scheme: S::SCHEME }),
        (Field::Scheme, Some(scheme)) if !scheme.eq_ignore_ascii_case(S::SCHEME) => {
            Err(DomainError::SchemeMismatch {
                expected: S::SCHEME,
                found: scheme.to_owned(),
            })
        }
        _ => Ok(()),
    }
}

/// A type that can be built by a [`Builder`].
pub trait Buildable: Sized {
    /// Returns the hook validating each field as it is set.
    #[inline]
    fn field_hook() -> FieldHook {
        accept_all
    }

    /// Constructs the value from the collected components.
    fn build_from(components: UriReferenceComponents) -> Result<Self, Error>;
}

impl Buildable for Uri {
    #[inline]
    fn build_from(components: UriReferenceComponents) -> Result<Self, Error> {
        Ok(Self::from_components(components)?)
    }
}

impl Buildable for RelativeReference {
    #[inline]
    fn build_from(components: UriReferenceComponents) -> Result<Self, Error> {
        Ok(Self::from_components(components)?)
    }
}

impl<S: WebScheme> Buildable for WebUri<S> {
    #[inline]
    fn field_hook() -> FieldHook {
        web_field_hook::<S>
    }

    #[inline]
    fn build_from(components: UriReferenceComponents) -> Result<Self, Error> {
        Self::from_components(components)
    }
}

/// Builder of a generic URI.
pub type UriBuilder = Builder<Uri>;

/// Builder of an `http` URI.
pub type HttpUriBuilder = Builder<WebUri<Http>>;

/// Builder of an `https` URI.
pub type HttpsUriBuilder = Builder<WebUri<Https>>;

/// Builder of a relative reference.
pub type RelativeReferenceBuilder = Builder<RelativeReference>;

/// A builder of `T`.
///
/// # Examples
///
/// ```
/// use uri_norm::build::UriBuilder;
///
/// let uri = UriBuilder::new()
///     .with_scheme("http")?
///     .with_host("example.com")?
///     .with_port_number(8080)?
///     .with_path_segments(["a b", "c"])?
///     .with_query_pairs([("q", "rust lang")])?
///     .build()?;
/// assert_eq!(uri.to_string(), "http://example.com:8080/a%20b/c?q=rust+lang");
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
#[derive(Clone)]
pub struct Builder<T> {
    /// Components collected so far.
    components: UriReferenceComponents,
    /// Field validation.
    hook: FieldHook,
    /// Target type.
    _target: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("components", &self.components)
            .finish_non_exhaustive()
    }
}

impl<T: Buildable> Default for Builder<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Buildable> Builder<T> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: UriReferenceComponents::default(),
            hook: T::field_hook(),
            _target: PhantomData,
        }
    }

    /// Runs the hook for one field.
    #[inline]
    fn check(&self, field: Field, value: Option<&str>) -> Result<(), DomainError> {
        (self.hook)(field, value)
    }

    /// Sets the user information.
    pub fn with_user_info<'a>(
        mut self,
        user_info: impl Into<Option<&'a str>>,
    ) -> Result<Self, DomainError> {
        let user_info = user_info.into();
        self.check(Field::UserInfo, user_info)?;
        self.components.user_info = user_info.map(ToOwned::to_owned);
        Ok(self)
    }

    /// Sets the host.
    pub fn with_host<'a>(mut self, host: impl Into<Option<&'a str>>) -> Result<Self, DomainError> {
        let host = host.into();
        self.check(Field::Host, host)?;
        self.components.host = host.map(ToOwned::to_owned);
        Ok(self)
    }

    /// Sets the port.
    ///
    /// The port is validated when the value is built.
    pub fn with_port<'a>(mut self, port: impl Into<Option<&'a str>>) -> Result<Self, DomainError> {
        let port = port.into();
        self.check(Field::Port, port)?;
        self.components.port = port.map(ToOwned::to_owned);
        Ok(self)
    }

    /// Sets the port from a number.
    #[inline]
    pub fn with_port_number(self, port: u16) -> Result<Self, DomainError> {
        self.with_port(port.to_string().as_str())
    }

    /// Sets an absolute path: an empty segment is prepended.
    pub fn with_path_segments<I, S>(self, segments: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_prefixless_path_segments(
            core::iter::once(String::new()).chain(segments.into_iter().map(Into::into)),
        )
    }

    /// Sets the path segments as they are.
    pub fn with_prefixless_path_segments<I, S>(mut self, segments: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        for segment in &segments {
            self.check(Field::PathSegment, Some(segment))?;
        }
        self.components.path_segments = segments;
        Ok(self)
    }

    /// Sets the query.
    pub fn with_query<'a>(mut self, query: impl Into<Option<&'a str>>) -> Result<Self, DomainError> {
        let query = query.into();
        self.check(Field::Query, query)?;
        self.components.query = query.map(ToOwned::to_owned);
        Ok(self)
    }

    /// Sets the query to form-urlencoded pairs.
    ///
    /// The encoded text is the query itself, so [`Reference::query_pairs`] returns the same
    /// pairs. Its `%` signs are written as `%25` when the value is formatted.
    pub fn with_query_pairs<I, K, V>(self, pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.with_query(form_url_encode(pairs).as_str())
    }

    /// Sets the fragment.
    pub fn with_fragment<'a>(
        mut self,
        fragment: impl Into<Option<&'a str>>,
    ) -> Result<Self, DomainError> {
        let fragment = fragment.into();
        self.check(Field::Fragment, fragment)?;
        self.components.fragment = fragment.map(ToOwned::to_owned);
        Ok(self)
    }

    /// Returns the components collected so far.
    #[inline]
    #[must_use]
    pub fn components(&self) -> &UriReferenceComponents {
        &self.components
    }

    /// Constructs the value.
    #[inline]
    pub fn build(self) -> Result<T, Error> {
        T::build_from(self.components)
    }
}

impl<T: Buildable + AbsoluteUri> Builder<T> {
    /// Sets the scheme.
    pub fn with_scheme(mut self, scheme: &str) -> Result<Self, DomainError> {
        self.check(Field::Scheme, Some(scheme))?;
        self.components.scheme = Some(scheme.to_owned());
        Ok(self)
    }

    /// Creates a builder holding the components of `uri`.
    #[must_use]
    pub fn from_uri(uri: &T) -> Self {
        Self {
            components: uri.to_uri_components(),
            ..Self::new()
        }
    }
}

impl Builder<RelativeReference> {
    /// Creates a builder holding the components of `reference`.
    #[must_use]
    pub fn from_reference(reference: &RelativeReference) -> Self {
        Self {
            components: reference.to_components(),
            ..Self::new()
        }
    }
}

/// Sets every component of `components` on the builder, including the scheme.
///
/// Each field goes through the builder's hook.
pub fn apply_components<T: Buildable>(
    builder: Builder<T>,
    components: &UriReferenceComponents,
) -> Result<Builder<T>, DomainError> {
    builder.check(Field::Scheme, components.scheme.as_deref())?;
    let mut builder = builder
        .with_user_info(components.user_info.as_deref())?
        .with_host(components.host.as_deref())?
        .with_port(components.port.as_deref())?
        .with_prefixless_path_segments(components.path_segments.iter().map(String::as_str))?
        .with_query(components.query.as_deref())?
        .with_fragment(components.fragment.as_deref())?;
    builder.components.scheme = components.scheme.clone();
    Ok(builder)
}
