//! A private module for the sealed web scheme trait.
//!
//! Note that this MUST be a private module.
//! See [Rust API Guidelines][sealed-trait] about the necessity of being private.
//!
//! [sealed-trait]:
//! https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed

use crate::scheme::http::{Http, Https};

/// A trait to prohibit user-defined types from implementing `WebScheme`.
pub trait Sealed {}

impl Sealed for Http {}
impl Sealed for Https {}
