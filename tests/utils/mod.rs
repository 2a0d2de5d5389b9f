//! Utilities.
#![allow(dead_code)]

/// Asserts that the `Display` output of the left value equals the right value.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        let left = &$left;
        let right = &$right;
        assert_eq!(left.to_string(), right.to_string());
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        let left = &$left;
        let right = &$right;
        assert_eq!(left.to_string(), right.to_string(), $($args)*);
    }};
}

/// Strings that parse as URI references.
pub const VALID_REFERENCES: &[&str] = &[
    "",
    "#",
    "?",
    "//",
    "a",
    "./a:b",
    "../../g;x?y#s",
    "foo:",
    "foo://",
    "foo:/",
    "foo:a/b",
    "mailto:John.Doe@example.com",
    "urn:oasis:names:specification:docbook:dtd:xml:4.1.2",
    "tel:+1-816-555-1212",
    "http://www.ietf.org/rfc/rfc2396.txt",
    "ldap://[2001:db8::7]/c=GB?objectClass?one",
    "telnet://192.0.2.16:80/",
    "http://[v7.fe80::a+en1]:8080/",
    "http://h/%C3%A9?%26=%3D#%23",
    "s://@h:/",
    "s://user:pass@h:0/",
];

/// Strings that do not parse as URI references.
pub const INVALID_REFERENCES: &[&str] = &[
    "a b",
    "1a:b",
    "s://h:8x/",
    "s://h/%",
    "s://h/%zz",
    "s://h/a?b#c#d",
    "s://u@v@h/",
    "s://[::1/",
    "s://h/<a>",
    "\u{03B1}",
];
