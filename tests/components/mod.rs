//! Components.
#![allow(dead_code)]

use uri_norm::components::UriReferenceComponents;

/// Test case.
#[derive(Debug, Clone, Copy)]
pub struct TestCase<'a> {
    /// Test case name.
    pub name: &'a str,
    /// Composed string.
    pub composed: &'a str,
    /// Components, as parsed.
    pub components: Components<'a>,
    /// Normalized string.
    pub normalized: &'a str,
}

impl TestCase<'_> {
    #[inline]
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.components.is_absolute()
    }

    #[inline]
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.components.is_relative()
    }
}

/// Components.
#[derive(Default, Debug, Clone, Copy)]
pub struct Components<'a> {
    /// `scheme`.
    pub scheme: Option<&'a str>,
    /// `userinfo`.
    ///
    /// Note that `host` should also be `Some(_)` if this is `Some(_)`.
    pub user_info: Option<&'a str>,
    /// `host`.
    pub host: Option<&'a str>,
    /// `port`.
    ///
    /// Note that `host` should also be `Some(_)` if this is `Some(_)`.
    pub port: Option<&'a str>,
    /// Decoded path segments.
    pub path: &'a [&'a str],
    /// `query`.
    pub query: Option<&'a str>,
    /// `fragment`.
    pub fragment: Option<&'a str>,
}

impl Components<'_> {
    #[inline]
    #[must_use]
    const fn const_default() -> Self {
        Self {
            scheme: None,
            user_info: None,
            host: None,
            port: None,
            path: &[""],
            query: None,
            fragment: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.scheme.is_none()
    }

    #[must_use]
    pub fn to_components(&self) -> UriReferenceComponents {
        UriReferenceComponents {
            scheme: self.scheme.map(ToOwned::to_owned),
            user_info: self.user_info.map(ToOwned::to_owned),
            host: self.host.map(ToOwned::to_owned),
            port: self.port.map(ToOwned::to_owned),
            path_segments: self.path.iter().map(|&s| s.to_owned()).collect(),
            query: self.query.map(ToOwned::to_owned),
            fragment: self.fragment.map(ToOwned::to_owned),
        }
    }
}

macro_rules! components {
    () => {
        Components::const_default()
    };
    ($($field:ident: $expr:expr),* $(,)?) => {
        Components {
            $( $field: components!(@field; $field: $expr) ),*,
            .. Components::const_default()
        }
    };
    (@field; path: $expr:expr) => {
        $expr
    };
    (@field; $field:ident: None) => {
        None
    };
    (@field; $field:ident: $expr:expr) => {
        Some($expr)
    };
}

macro_rules! test_case {
    (
        name: $name:expr,
        composed: $composed:expr,
        components: { $($toks:tt)* },
        normalized: $normalized:expr $(,)?
    ) => {
        TestCase {
            name: $name,
            composed: $composed,
            components: components! { $($toks)* },
            normalized: $normalized,
        }
    };
}

macro_rules! test_cases {
    ($({ $($toks:tt)* }),* $(,)?) => {
        &[ $( test_case! { $($toks)* } ),* ]
    };
}

pub static TEST_CASES: &[TestCase<'static>] = test_cases![
    {
        name: "RFC 3986 section 3 example",
        composed: "foo://example.com:8042/over/there?name=ferret#nose",
        components: {
            scheme: "foo",
            host: "example.com",
            port: "8042",
            path: &["", "over", "there"],
            query: "name=ferret",
            fragment: "nose",
        },
        normalized: "foo://example.com:8042/over/there?name=ferret#nose",
    },
    {
        name: "URN",
        composed: "urn:example:animal:ferret:nose",
        components: {
            scheme: "urn",
            path: &["example:animal:ferret:nose"],
        },
        normalized: "urn:example:animal:ferret:nose",
    },
    {
        name: "case, port zeros, and dot segments",
        composed: "S://User@Example.COM:0080/a/./b/../c?q#f",
        components: {
            scheme: "s",
            user_info: "User",
            host: "Example.COM",
            port: "0080",
            path: &["", "a", ".", "b", "..", "c"],
            query: "q",
            fragment: "f",
        },
        normalized: "s://User@example.com:80/a/c?q#f",
    },
    {
        name: "http default port and empty path",
        composed: "HTTP://Example.COM:80",
        components: {
            scheme: "http",
            host: "Example.COM",
            port: "80",
        },
        normalized: "http://example.com",
    },
    {
        name: "https with encoded unreserved character",
        composed: "https://example.com:0443/%7Euser/",
        components: {
            scheme: "https",
            host: "example.com",
            port: "0443",
            path: &["", "~user", ""],
        },
        normalized: "https://example.com/~user/",
    },
    {
        name: "IPv6 host",
        composed: "http://[FE80::A]:8080/",
        components: {
            scheme: "http",
            host: "[FE80::A]",
            port: "8080",
            path: &["", ""],
        },
        normalized: "http://[fe80::a]:8080/",
    },
    {
        name: "IPv4 host",
        composed: "ftp://192.168.0.1/pub",
        components: {
            scheme: "ftp",
            host: "192.168.0.1",
            path: &["", "pub"],
        },
        normalized: "ftp://192.168.0.1/pub",
    },
    {
        name: "relative path keeps dot segments",
        composed: "../a/./b?x",
        components: {
            path: &["..", "a", ".", "b"],
            query: "x",
        },
        normalized: "../a/./b?x",
    },
    {
        name: "relative path with colon",
        composed: "./a:b",
        components: {
            path: &[".", "a:b"],
        },
        normalized: "./a:b",
    },
    {
        name: "network-path reference",
        composed: "//host",
        components: {
            host: "host",
        },
        normalized: "//host",
    },
    {
        name: "empty",
        composed: "",
        components: {},
        normalized: "",
    },
    {
        name: "empty query",
        composed: "?",
        components: {
            query: "",
        },
        normalized: "?",
    },
    {
        name: "empty fragment",
        composed: "#",
        components: {
            fragment: "",
        },
        normalized: "#",
    },
    {
        name: "scheme only",
        composed: "foo:",
        components: {
            scheme: "foo",
        },
        normalized: "foo:",
    },
    {
        name: "empty authority",
        composed: "foo://",
        components: {
            scheme: "foo",
            host: "",
        },
        normalized: "foo://",
    },
    {
        name: "empty user info and port",
        composed: "s://@h:/",
        components: {
            scheme: "s",
            user_info: "",
            host: "h",
            port: "",
            path: &["", ""],
        },
        normalized: "s://@h:/",
    },
    {
        name: "mailto",
        composed: "mailto:John.Doe@example.com",
        components: {
            scheme: "mailto",
            path: &["John.Doe@example.com"],
        },
        normalized: "mailto:John.Doe@example.com",
    },
    {
        name: "encoded slash and space",
        composed: "s:/a%2Fb/c%20d",
        components: {
            scheme: "s",
            path: &["", "a/b", "c d"],
        },
        normalized: "s:/a%2Fb/c%20d",
    },
    {
        name: "lowercase escapes",
        composed: "s://h/%c3%a9",
        components: {
            scheme: "s",
            host: "h",
            path: &["", "\u{E9}"],
        },
        normalized: "s://h/%C3%A9",
    },
    {
        name: "tag",
        composed: "tag:sandro@w3.org,2004-05:Sandro",
        components: {
            scheme: "tag",
            path: &["sandro@w3.org,2004-05:Sandro"],
        },
        normalized: "tag:sandro@w3.org,2004-05:Sandro",
    },
];
