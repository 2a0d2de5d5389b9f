//! Tests for scheme-specific types and scheme dispatch.

#[macro_use]
mod utils;

use std::any::Any;
use std::fmt;

use uri_norm::compare::ComparisonKey;
use uri_norm::components::UriReferenceComponents;
use uri_norm::error::{DomainError, Error, Part};
use uri_norm::scheme::http::{HttpUri, HttpsUri};
use uri_norm::scheme::registry::SchemeRegistry;
use uri_norm::scheme::tag::{TagDate, TagUri};
use uri_norm::types::{AbsoluteUri, Reference, RelativeReference, Uri, UriReference};

/// `http` inputs and their normalized forms.
const HTTP_CASES: &[(&str, &str)] = &[
    ("http://example.com", "http://example.com"),
    ("HTTP://EXAMPLE.com:80/", "http://example.com/"),
    ("http://example.com:8080", "http://example.com:8080"),
    ("http://example.com:080/a", "http://example.com/a"),
    ("http://example.com:443/", "http://example.com:443/"),
    ("http://example.com?q", "http://example.com?q"),
    ("http://example.com/a/../b/./c", "http://example.com/b/c"),
    ("http://[::1]:80/", "http://[::1]/"),
    ("http://127.0.0.1:/", "http://127.0.0.1/"),
];

#[test]
fn http() {
    for (input, expected) in HTTP_CASES {
        let uri = HttpUri::parse(input).unwrap_or_else(|e| panic!("input={input:?}: {e}"));
        assert_eq_display!(uri, expected, "input={input:?}");

        let reference = UriReference::parse(input).expect("should be valid");
        let dispatched = reference
            .as_absolute()
            .and_then(|uri| uri.downcast_ref::<HttpUri>())
            .expect("http URIs are dispatched to `HttpUri`");
        assert_eq!(dispatched, &uri);
    }
}

#[test]
fn https_default_port() {
    let uri = HttpsUri::parse("https://example.com:0443/").expect("should be valid");
    assert_eq!(uri.port(), None);
    assert_eq_display!(uri, "https://example.com/");

    let uri = HttpsUri::parse("https://example.com:80/").expect("should be valid");
    assert_eq!(uri.port(), Some("80"));
}

#[test]
fn http_rejections() {
    assert_eq!(
        HttpUri::parse("http://user@example.com/").unwrap_err(),
        Error::Domain(DomainError::UserInfoNotAllowed { scheme: "http" })
    );
    assert_eq!(
        HttpUri::parse("http:///a").unwrap_err(),
        Error::Domain(DomainError::HostRequired { scheme: "http" })
    );
    assert_eq!(
        HttpUri::parse("http:g").unwrap_err(),
        Error::Domain(DomainError::HostRequired { scheme: "http" })
    );
    assert_eq!(
        HttpsUri::parse("http://example.com/").unwrap_err(),
        Error::Domain(DomainError::SchemeMismatch {
            expected: "https",
            found: "http".to_owned(),
        })
    );
    match HttpUri::parse("//example.com/") {
        Err(Error::Format(e)) => assert_eq!(e.part(), Part::AbsoluteUri),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn http_relative_first_segment_becomes_absolute() {
    let components = UriReferenceComponents {
        scheme: None,
        user_info: None,
        host: Some("h".to_owned()),
        port: None,
        path_segments: vec!["a".to_owned(), "b".to_owned()],
        query: None,
        fragment: None,
    };
    let uri = HttpUri::from_components(components).expect("should be valid");
    assert_eq_display!(uri, "http://h/a/b");
}

#[test]
fn http_user_info_is_hidden() {
    let uri = HttpUri::parse("http://h/").expect("should be valid");
    assert_eq!(uri.user_info(), None);
    assert_eq!(uri.as_uri().user_info(), None);
}

#[test]
fn tag() {
    let tag = TagUri::parse("tag:sandro@w3.org,2004-05:Sandro").expect("should be valid");
    assert_eq!(tag.authority_name(), "sandro@w3.org");
    assert_eq!(tag.date(), TagDate::new(2004, Some(5), None).expect("valid date"));
    assert_eq!(tag.specific(), "Sandro");
    assert_eq!(tag.tag_fragment(), None);
    assert_eq!(tag.scheme(), "tag");
    assert_eq!(tag.host(), None);

    let built = TagUri::new(
        "sandro@w3.org",
        TagDate::parse("2004-05").expect("valid date"),
        "Sandro",
        None,
    )
    .expect("valid authority name");
    assert_eq!(built, tag);
    assert_eq_display!(built, "tag:sandro@w3.org,2004-05:Sandro");
}

#[test]
fn tag_rfc4151_examples() {
    for input in [
        "tag:timothy@hr.example.com,2001:web/externalHome",
        "tag:sandro@w3.org,2004-05:Sandro",
        "tag:my-ids.com,2001-09-15:TimKindberg:presentations:UBath2004-05-19",
        "tag:blogger.com,1999:blog-555",
        "tag:yaml.org,2002:int",
    ] {
        let reference = UriReference::parse(input).expect("should be valid");
        let tag = reference
            .as_absolute()
            .and_then(|uri| uri.downcast_ref::<TagUri>())
            .expect("tag URIs are dispatched to `TagUri`");
        assert_eq_display!(tag, input);
    }
}

#[test]
fn tag_rejections() {
    for (input, part) in [
        ("tag:example.com:x", Part::TaggingEntity),
        ("tag:example.com,2001", Part::TaggingEntity),
        ("tag:example.com,01:x", Part::Date),
        ("tag:example.com,2001-13:x", Part::Date),
        ("tag:example.com,2001-02-29:x", Part::Date),
        ("tag:,2001:x", Part::AuthorityName),
        ("tag:example.com,2001:a b", Part::Specific),
        ("urn:example.com,2001:x", Part::Scheme),
    ] {
        match TagUri::parse(input) {
            Err(Error::Format(e)) => assert_eq!(e.part(), part, "input={input:?}"),
            other => panic!("input={input:?}: unexpected {other:?}"),
        }
    }
    assert_eq!(
        TagUri::parse("tag:-example.com,2001:x").unwrap_err(),
        Error::Domain(DomainError::InvalidAuthorityName("-example.com".to_owned()))
    );
}

#[test]
fn tag_does_not_resolve() {
    let tag = TagUri::parse("tag:example.com,2001:a/b").expect("should be valid");
    let reference = RelativeReference::parse("c").expect("should be valid");
    assert_eq!(
        tag.resolve_relative(&reference).unwrap_err(),
        Error::Domain(DomainError::ResolutionUnsupported { scheme: "tag" })
    );
}

/// A URN, compared by its namespace identifier case-insensitively.
#[derive(Debug, Clone)]
struct Urn {
    /// Generic representation.
    inner: Uri,
    /// Lowercase namespace identifier.
    nid: String,
}

impl Urn {
    fn from_components(components: UriReferenceComponents) -> Result<Self, Error> {
        let inner = Uri::from_components(components)?;
        let segment = &inner.path_segments()[0];
        let nid = segment
            .split_once(':')
            .map_or(segment.as_str(), |(nid, _)| nid)
            .to_ascii_lowercase();
        Ok(Self { inner, nid })
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Reference for Urn {
    fn user_info(&self) -> Option<&str> {
        self.inner.user_info()
    }

    fn host(&self) -> Option<&str> {
        self.inner.host()
    }

    fn port(&self) -> Option<&str> {
        self.inner.port()
    }

    fn path_segments(&self) -> &[String] {
        self.inner.path_segments()
    }

    fn query(&self) -> Option<&str> {
        self.inner.query()
    }

    fn fragment(&self) -> Option<&str> {
        self.inner.fragment()
    }
}

impl AbsoluteUri for Urn {
    fn scheme(&self) -> &str {
        "urn"
    }

    fn comparison_key(&self) -> Option<ComparisonKey<'_>> {
        let nss = self.inner.path_segments()[0]
            .split_once(':')
            .map_or("", |(_, nss)| nss);
        Some(ComparisonKey::new().text(&self.nid).text(nss))
    }

    fn resolve_relative(
        &self,
        reference: &RelativeReference,
    ) -> Result<Box<dyn AbsoluteUri>, Error> {
        Ok(Box::new(self.inner.resolve(reference)?))
    }

    fn clone_box(&self) -> Box<dyn AbsoluteUri> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn custom_scheme() {
    let registry = SchemeRegistry::with_standard_schemes();
    registry
        .register("URN", Urn::from_components)
        .expect("valid scheme");
    assert!(registry.is_registered("urn"));

    let a = registry.parse("urn:ISBN:0451450523").expect("should be valid");
    let b = registry.parse("URN:isbn:0451450523").expect("should be valid");
    assert!(a.as_absolute().map_or(false, |uri| uri.is::<Urn>()));
    assert_eq!(a, b);
    assert_ne!(a.to_string(), b.to_string());

    // The standard registry is not affected.
    let generic = UriReference::parse("urn:ISBN:0451450523").expect("should be valid");
    assert!(generic.as_absolute().map_or(false, |uri| uri.is::<Uri>()));
}
