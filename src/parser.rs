//! Parser internals.

pub(crate) mod char;
pub(crate) mod coarse;
pub(crate) mod ip;
pub(crate) mod str;
