//! Page and story compilation.

pub(crate) mod animation;
pub mod fingerprint;
pub mod page;
pub mod story;
