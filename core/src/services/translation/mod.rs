//! Translation resolution with the default fallback chain.

mod resolver;

pub use resolver::{Resolution, TranslationResolver};

#[cfg(test)]
mod tests;
