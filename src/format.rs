//! Formatting components back into strings.
//!
//! Each component is percent-encoded with its own safe set, and IP address hosts are written
//! verbatim. Parsing the result yields the same components.

use core::fmt::{self, Write as _};

use crate::components::UriReferenceComponents;
use crate::percent_encode::{Context, PercentEncoded};
use crate::types::Reference;
use crate::validate::is_ip_address;

/// A display proxy writing URI reference components.
///
/// # Examples
///
/// ```
/// use uri_norm::components::UriReferenceComponents;
/// use uri_norm::format::ComponentsDisplay;
///
/// let components = UriReferenceComponents {
///     scheme: Some("foo".to_owned()),
///     host: Some("example.com".to_owned()),
///     port: Some("8042".to_owned()),
///     path_segments: vec!["".to_owned(), "over".to_owned(), "there here".to_owned()],
///     query: Some("name=ferret".to_owned()),
///     fragment: Some("nose".to_owned()),
///     ..Default::default()
/// };
/// assert_eq!(
///     ComponentsDisplay::new(&components).to_string(),
///     "foo://example.com:8042/over/there%20here?name=ferret#nose"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ComponentsDisplay<'a> {
    /// Scheme.
    scheme: Option<&'a str>,
    /// User information.
    user_info: Option<&'a str>,
    /// Host.
    host: Option<&'a str>,
    /// Port.
    port: Option<&'a str>,
    /// Path segments.
    path_segments: &'a [String],
    /// Query.
    query: Option<&'a str>,
    /// Fragment.
    fragment: Option<&'a str>,
}

impl<'a> ComponentsDisplay<'a> {
    /// Creates a proxy for the given components.
    #[must_use]
    pub fn new(components: &'a UriReferenceComponents) -> Self {
        Self {
            scheme: components.scheme.as_deref(),
            user_info: components.user_info.as_deref(),
            host: components.host.as_deref(),
            port: components.port.as_deref(),
            path_segments: &components.path_segments,
            query: components.query.as_deref(),
            fragment: components.fragment.as_deref(),
        }
    }

    /// Creates a proxy for a reference with the given scheme.
    #[must_use]
    pub(crate) fn from_reference<R>(scheme: Option<&'a str>, r: &'a R) -> Self
    where
        R: Reference + ?Sized,
    {
        Self {
            scheme,
            user_info: r.user_info(),
            host: r.host(),
            port: r.port(),
            path_segments: r.path_segments(),
            query: r.query(),
            fragment: r.fragment(),
        }
    }

    /// Omits the user information.
    ///
    /// The authority is still written if a host or a port is present.
    #[inline]
    #[must_use]
    pub fn without_user_info(self) -> Self {
        Self {
            user_info: None,
            ..self
        }
    }
}

impl fmt::Display for ComponentsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = self.scheme {
            write!(f, "{}:", scheme)?;
        }
        if self.user_info.is_some() || self.host.is_some() || self.port.is_some() {
            f.write_str("//")?;
            if let Some(user_info) = self.user_info {
                write!(f, "{}@", PercentEncoded::new(Context::UserInfo, user_info))?;
            }
            if let Some(host) = self.host {
                if is_ip_address(host) {
                    f.write_str(host)?;
                } else {
                    write!(f, "{}", PercentEncoded::new(Context::RegName, host))?;
                }
            }
            if let Some(port) = self.port {
                write!(f, ":{}", port)?;
            }
        }
        for (i, segment) in self.path_segments.iter().enumerate() {
            if i != 0 {
                f.write_char('/')?;
            }
            write!(f, "{}", PercentEncoded::new(Context::PathSegment, segment))?;
        }
        if let Some(query) = self.query {
            write!(f, "?{}", PercentEncoded::new(Context::Query, query))?;
        }
        if let Some(fragment) = self.fragment {
            write!(f, "#{}", PercentEncoded::new(Context::Fragment, fragment))?;
        }
        Ok(())
    }
}

impl fmt::Display for UriReferenceComponents {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ComponentsDisplay::new(self), f)
    }
}

/// Formats components into a string.
#[inline]
#[must_use]
pub fn format_components(components: &UriReferenceComponents) -> String {
    ComponentsDisplay::new(components).to_string()
}
