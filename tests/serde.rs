//! Tests for serde support.
#![cfg(feature = "serde")]

use serde_test::{assert_de_tokens, assert_de_tokens_error, assert_tokens, Token};

use uri_norm::components::UriReferenceComponents;
use uri_norm::scheme::http::HttpUri;
use uri_norm::scheme::tag::TagUri;
use uri_norm::types::{RelativeReference, Uri, UriReference};

#[test]
fn uri_as_string() {
    let uri = Uri::parse("s://h/a?q#f").expect("should be valid");
    assert_tokens(&uri, &[Token::Str("s://h/a?q#f")]);
}

#[test]
fn normalized_on_deserialize() {
    let uri = Uri::parse("s://h/a").expect("should be valid");
    assert_de_tokens(&uri, &[Token::Str("S://H/./a")]);

    let http = HttpUri::parse("http://h/").expect("should be valid");
    assert_de_tokens(&http, &[Token::Str("HTTP://H:80/")]);
}

#[test]
fn typed_values() {
    let relative = RelativeReference::parse("../a?b").expect("should be valid");
    assert_tokens(&relative, &[Token::Str("../a?b")]);

    let tag = TagUri::parse("tag:example.com,2000:a").expect("should be valid");
    assert_tokens(&tag, &[Token::Str("tag:example.com,2000:a")]);

    let reference = UriReference::parse("https://h/").expect("should be valid");
    assert_tokens(&reference, &[Token::Str("https://h/")]);
}

#[test]
fn invalid_string() {
    assert_de_tokens_error::<HttpUri>(
        &[Token::Str("http://u@h/")],
        "http URIs cannot carry user information",
    );
}

#[test]
fn components_as_struct() {
    let components = UriReferenceComponents::parse("s://h?q").expect("should be valid");
    assert_tokens(
        &components,
        &[
            Token::Struct {
                name: "UriReferenceComponents",
                len: 7,
            },
            Token::Str("scheme"),
            Token::Some,
            Token::Str("s"),
            Token::Str("user_info"),
            Token::None,
            Token::Str("host"),
            Token::Some,
            Token::Str("h"),
            Token::Str("port"),
            Token::None,
            Token::Str("path_segments"),
            Token::Seq { len: Some(1) },
            Token::Str(""),
            Token::SeqEnd,
            Token::Str("query"),
            Token::Some,
            Token::Str("q"),
            Token::Str("fragment"),
            Token::None,
            Token::StructEnd,
        ],
    );
}
