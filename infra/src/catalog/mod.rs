//! Translation catalog read from a TOML file
//!
//! ```toml
//! [[translations]]
//! application = "ORD"
//! module = "ORDER"
//! code = "404"
//! locale = "EN"
//! value = "Item ''{0}'' not found"
//! ```

mod store;

pub use store::{CatalogEntry, CatalogTranslationStore};

#[cfg(test)]
mod tests;
