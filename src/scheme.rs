//! Scheme-specific URI types.
//!
//! * [`http`]: `http` and `https` URIs, with default port suppression and a forced absolute
//!   path.
//! * [`tag`]: `tag` URIs ([RFC 4151]), ordered by authority name and date.
//! * [`registry`]: dispatch from a scheme name to the type that should represent it.
//!
//! [RFC 4151]: https://www.rfc-editor.org/rfc/rfc4151.html

mod internal;

pub mod http;
pub mod registry;
pub mod tag;
