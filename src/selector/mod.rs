//! Selector derivation: signature text -> truncated digest.

pub mod algorithm;
pub mod derive;

pub use algorithm::HashAlgorithm;
pub use derive::{Selector, derive_selector};
