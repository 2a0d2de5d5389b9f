//! URI reference resolution.
//!
//! Implements [RFC 3986 section 5.2.2] for references that have no scheme, plus the merge of
//! [section 5.2.3]. The result is produced by a factory so that every scheme gets its own
//! concrete type back, normalized by its own rules.
//!
//! [RFC 3986 section 5.2.2]: https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.2
//! [section 5.2.3]: https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.3

use crate::components::UriReferenceComponents;
use crate::error::Error;
use crate::types::{AbsoluteUri, Reference, RelativeReference, UriReference};

/// Resolves a relative reference against a base, building the result with `factory`.
///
/// The components passed to `factory` have no scheme; the factory supplies the base's own.
/// The fragment always comes from the reference.
///
/// # Examples
///
/// ```
/// use uri_norm::resolve::resolve;
/// use uri_norm::types::{RelativeReference, Uri};
///
/// let base = Uri::parse("http://a/b/c/d;p?q")?;
/// let reference = RelativeReference::parse("g;x?y#s")?;
/// let path = resolve(&base, &reference, |components| Ok(components.path_segments))?;
/// assert_eq!(path, ["", "b", "c", "g;x"]);
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
pub fn resolve<B, T, F>(base: &B, reference: &RelativeReference, factory: F) -> Result<T, Error>
where
    B: Reference + ?Sized,
    F: FnOnce(UriReferenceComponents) -> Result<T, Error>,
{
    let components = if reference.has_authority() {
        tracing::trace!("reference has an authority");
        reference.to_components()
    } else {
        let (path_segments, query) = if reference.path_is_empty() {
            tracing::trace!("reference has an empty path");
            (
                base.path_segments().to_vec(),
                reference.query().or_else(|| base.query()),
            )
        } else if reference.path_is_absolute() {
            tracing::trace!("reference has an absolute path");
            (reference.path_segments().to_vec(), reference.query())
        } else {
            tracing::trace!("merging relative path");
            (merge(base, reference.path_segments()), reference.query())
        };
        UriReferenceComponents {
            scheme: None,
            user_info: base.user_info().map(ToOwned::to_owned),
            host: base.host().map(ToOwned::to_owned),
            port: base.port().map(ToOwned::to_owned),
            path_segments,
            query: query.map(ToOwned::to_owned),
            fragment: reference.fragment().map(ToOwned::to_owned),
        }
    };
    factory(components)
}

/// Merges a relative path into the base path ([RFC 3986 section 5.2.3]).
///
/// [RFC 3986 section 5.2.3]: https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.3
fn merge<B: Reference + ?Sized>(base: &B, reference_path: &[String]) -> Vec<String> {
    if base.has_authority() && base.path_is_empty() {
        return core::iter::once(String::new())
            .chain(reference_path.iter().cloned())
            .collect();
    }
    let base_path = base.path_segments();
    let base_dir = base_path.split_last().map_or(base_path, |(_, init)| init);
    base_dir.iter().chain(reference_path).cloned().collect()
}

/// Resolves a URI reference against a base.
///
/// An absolute URI is returned as it is; a relative reference is resolved with
/// [`AbsoluteUri::resolve_relative`].
///
/// # Examples
///
/// ```
/// use uri_norm::resolve::resolve_reference;
/// use uri_norm::types::{Uri, UriReference};
///
/// let base = Uri::parse("http://a/b/c/d;p?q")?;
/// let absolute = UriReference::parse("g:h")?;
/// assert_eq!(resolve_reference(&base, &absolute)?.to_string(), "g:h");
/// let relative = UriReference::parse("../../g")?;
/// assert_eq!(resolve_reference(&base, &relative)?.to_string(), "http://a/g");
/// # Ok::<_, uri_norm::error::Error>(())
/// ```
pub fn resolve_reference<B>(
    base: &B,
    reference: &UriReference,
) -> Result<Box<dyn AbsoluteUri>, Error>
where
    B: AbsoluteUri + ?Sized,
{
    match reference {
        UriReference::Absolute(uri) => Ok(uri.clone()),
        UriReference::Relative(relative) => base.resolve_relative(relative),
    }
}
