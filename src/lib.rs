//! Normalized [RFC 3986] URI references.
//!
//! Every URI value in this crate is normalized when it is constructed, and is immutable
//! afterwards. Two values that denote the same resource under the RFC 3986 syntax-based
//! normalization compare equal.
//!
//! ```
//! use uri_norm::types::UriReference;
//!
//! let a = UriReference::parse("eXAMPLE://a/./b/../b/%63/%7bfoo%7d")?;
//! let b = UriReference::parse("example://a/b/c/%7Bfoo%7D")?;
//! assert_eq!(a, b);
//! assert_eq!(a.to_string(), "example://a/b/c/%7Bfoo%7D");
//! # Ok::<_, uri_norm::error::Error>(())
//! ```
//!
//! [RFC 3986]: https://www.rfc-editor.org/rfc/rfc3986.html
//!
//! # Modules
//!
//! * [`components`] parses strings into decoded components, and [`format`] writes them back.
//! * [`types`] holds the normalized values: [`Uri`][types::Uri],
//!   [`RelativeReference`][types::RelativeReference], and [`UriReference`][types::UriReference].
//! * [`scheme`] specializes `http`, `https`, and `tag`, and dispatches by scheme name.
//! * [`resolve`] resolves relative references against a base.
//! * [`compare`] orders absolute URIs.
//! * [`build`] constructs values field by field.
//!
//! # Features
//!
//! * `memchr` (**enabled by default**):
//!     + Uses the `memchr` crate to find delimiters.
//! * `serde`:
//!     + Implements `Serialize` and `Deserialize` for the URI types, as strings, and for
//!       [`UriReferenceComponents`][components::UriReferenceComponents], as a struct.
//!
//! # Rationale
//!
//! ## Absent and empty components are different
//!
//! `http://example.com` has no query and `http://example.com?` has an empty one. Likewise,
//! `foo:` has no authority while `foo://` has an empty host. Optional components are therefore
//! `Option<String>`, and the empty string is a present value.
//!
//! ## Paths are segment lists
//!
//! The path is stored as its decoded `/`-separated segments, so `a%2Fb` is the single segment
//! `a/b`, distinct from the two segments `a` and `b`. An absolute path starts with an empty
//! segment, and the empty path is the single empty segment `[""]`.
//!
//! When an authority is present the path must be empty or absolute. When it is absent the path
//! cannot start with two empty segments, since it would be written as `//` and read back as an
//! authority.
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`](https://docs.rs/tracing). Failed parses are
//! logged at `debug` level, and resolution steps at `trace` level.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

#[macro_use]
mod macros;

pub mod build;
pub mod compare;
pub mod components;
pub mod error;
pub mod format;
pub mod normalize;
pub(crate) mod parser;
pub mod percent_encode;
pub mod query;
pub mod resolve;
pub mod scheme;
pub mod types;
pub mod validate;
