//! Dispatch from scheme names to URI types.
//!
//! A [`SchemeRegistry`] maps a lowercase scheme name to a factory building a typed URI from
//! parsed components. Schemes without a factory fall back to the generic [`Uri`].
//!
//! The registry used by [`UriReference::parse`] knows `http`, `https`, and `tag`, and cannot
//! be modified. To dispatch additional schemes, build a registry and parse through it.
//!
//! # Examples
//!
//! ```
//! use uri_norm::scheme::registry::SchemeRegistry;
//! use uri_norm::types::Uri;
//!
//! let registry = SchemeRegistry::with_standard_schemes();
//! registry.register("urn", |components| Ok(Uri::from_components(components)?))?;
//! assert!(registry.is_registered("URN"));
//!
//! let reference = registry.parse("urn:example:a")?;
//! assert_eq!(reference.scheme(), Some("urn"));
//! # Ok::<_, uri_norm::error::Error>(())
//! ```

use core::fmt;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::components::{parse_uri_reference, UriReferenceComponents};
use crate::error::Error;
use crate::normalize::normalize_scheme;
use crate::scheme::http::{Http, HttpUri, Https, HttpsUri, WebScheme};
use crate::scheme::tag::{TagUri, TAG_SCHEME};
use crate::types::{AbsoluteUri, RelativeReference, Uri, UriReference};

/// A function building a typed absolute URI from components.
///
/// The components always carry the scheme the factory was registered for.
pub type SchemeFactory =
    Arc<dyn Fn(UriReferenceComponents) -> Result<Box<dyn AbsoluteUri>, Error> + Send + Sync>;

/// A lock-guarded map from scheme names to factories.
///
/// Registering a scheme that is already registered replaces the earlier factory.
#[derive(Default)]
pub struct SchemeRegistry {
    /// Factories keyed by lowercase scheme name.
    factories: RwLock<HashMap<String, SchemeFactory>>,
}

impl SchemeRegistry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry knowing `http`, `https`, and `tag`.
    #[must_use]
    pub fn with_standard_schemes() -> Self {
        let mut factories = HashMap::new();
        factories.insert(Http::SCHEME.to_owned(), boxed(HttpUri::from_components));
        factories.insert(Https::SCHEME.to_owned(), boxed(HttpsUri::from_components));
        factories.insert(TAG_SCHEME.to_owned(), boxed(TagUri::from_components));
        Self {
            factories: RwLock::new(factories),
        }
    }

    /// Registers a function building URIs of a scheme.
    ///
    /// The scheme is validated and matched case-insensitively.
    pub fn register<T, F>(&self, scheme: &str, build: F) -> Result<(), Error>
    where
        T: AbsoluteUri,
        F: Fn(UriReferenceComponents) -> Result<T, Error> + Send + Sync + 'static,
    {
        self.register_factory(scheme, boxed(build))
    }

    /// Registers a factory for a scheme.
    ///
    /// The scheme is validated and matched case-insensitively.
    pub fn register_factory(&self, scheme: &str, factory: SchemeFactory) -> Result<(), Error> {
        let scheme = normalize_scheme(scheme)?;
        tracing::debug!(scheme = %scheme, "registering scheme factory");
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scheme, factory);
        Ok(())
    }

    /// Returns true if a factory is registered for the scheme.
    #[must_use]
    pub fn is_registered(&self, scheme: &str) -> bool {
        self.factory(&scheme.to_ascii_lowercase()).is_some()
    }

    /// Returns the factory for a lowercase scheme.
    fn factory(&self, scheme: &str) -> Option<SchemeFactory> {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(scheme)
            .cloned()
    }

    /// Builds a URI reference from components.
    ///
    /// Without a scheme the result is a relative reference. With a registered scheme the
    /// factory builds it, and with any other scheme it is a generic [`Uri`].
    pub fn create(&self, components: UriReferenceComponents) -> Result<UriReference, Error> {
        let scheme = match components.scheme.as_deref() {
            None => return Ok(RelativeReference::from_components(components)?.into()),
            Some(scheme) => scheme.to_ascii_lowercase(),
        };
        let uri: Box<dyn AbsoluteUri> = match self.factory(&scheme) {
            Some(factory) => factory(components)?,
            None => {
                tracing::debug!(scheme = %scheme, "no factory registered, using generic URI");
                Box::new(Uri::from_components(components)?)
            }
        };
        Ok(uri.into())
    }

    /// Parses a URI reference and builds it with [`create`][Self::create].
    pub fn parse(&self, s: &str) -> Result<UriReference, Error> {
        self.create(parse_uri_reference(s)?)
    }
}

impl fmt::Debug for SchemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);
        let mut schemes: Vec<&str> = factories.keys().map(String::as_str).collect();
        schemes.sort_unstable();
        f.debug_struct("SchemeRegistry")
            .field("schemes", &schemes)
            .finish()
    }
}

/// Wraps a typed build function into a [`SchemeFactory`].
fn boxed<T, F>(build: F) -> SchemeFactory
where
    T: AbsoluteUri,
    F: Fn(UriReferenceComponents) -> Result<T, Error> + Send + Sync + 'static,
{
    Arc::new(
        move |components: UriReferenceComponents| -> Result<Box<dyn AbsoluteUri>, Error> {
            Ok(Box::new(build(components)?))
        },
    )
}

/// Returns the registry of the standard schemes.
pub(crate) fn standard() -> &'static SchemeRegistry {
    static STANDARD: OnceLock<SchemeRegistry> = OnceLock::new();
    STANDARD.get_or_init(SchemeRegistry::with_standard_schemes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::{ConstructionError, DomainError};
    use crate::types::Reference;

    #[test]
    fn standard_schemes_dispatch() {
        let registry = SchemeRegistry::with_standard_schemes();
        let http = registry.parse("http://h/").expect("valid");
        assert!(http.as_absolute().map_or(false, |uri| uri.is::<HttpUri>()));
        let https = registry.parse("HTTPS://h/").expect("valid");
        assert!(https.as_absolute().map_or(false, |uri| uri.is::<HttpsUri>()));
        let tag = registry.parse("tag:example.com,2000:x").expect("valid");
        assert!(tag.as_absolute().map_or(false, |uri| uri.is::<TagUri>()));
        let other = registry.parse("ftp://h/").expect("valid");
        assert!(other.as_absolute().map_or(false, |uri| uri.is::<Uri>()));
    }

    #[test]
    fn empty_registry_uses_generic_uri() {
        let registry = SchemeRegistry::new();
        let http = registry.parse("http://u@h:80").expect("valid");
        assert!(http.as_absolute().map_or(false, |uri| uri.is::<Uri>()));
        assert_eq!(http.to_string(), "http://u@h:80");
    }

    #[test]
    fn missing_scheme_is_relative() {
        let registry = SchemeRegistry::new();
        let reference = registry.parse("//h/a?q").expect("valid");
        assert!(reference.is_relative());
        assert_eq!(reference.host(), Some("h"));
    }

    #[test]
    fn last_registration_wins() {
        let registry = SchemeRegistry::with_standard_schemes();
        registry
            .register("HTTP", |c| Ok(Uri::from_components(c)?))
            .expect("valid scheme");
        let uri = registry.parse("http://u@h/").expect("valid");
        assert!(uri.as_absolute().map_or(false, |uri| uri.is::<Uri>()));
    }

    #[test]
    fn invalid_scheme_is_rejected() {
        let registry = SchemeRegistry::new();
        let e = registry
            .register("1http", |c| Ok(Uri::from_components(c)?))
            .unwrap_err();
        assert_eq!(
            e,
            Error::Construction(ConstructionError::InvalidScheme("1http".to_owned()))
        );
        assert!(!registry.is_registered("1http"));
    }

    #[test]
    fn factory_errors_propagate() {
        assert_eq!(
            standard().parse("http://u@h/").unwrap_err(),
            Error::Domain(DomainError::UserInfoNotAllowed { scheme: "http" })
        );
    }

    #[test]
    fn debug_lists_schemes() {
        let registry = SchemeRegistry::with_standard_schemes();
        assert_eq!(
            format!("{registry:?}"),
            r#"SchemeRegistry { schemes: ["http", "https", "tag"] }"#
        );
    }
}
