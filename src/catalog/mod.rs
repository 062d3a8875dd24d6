//! Catalog layer: the built-in signature list and the optional catalog.json.

pub mod builtin;
pub mod file;

pub use file::{CatalogSpec, ValidatedCatalog};
