//! Domain entities

pub mod translation;

pub use translation::TranslationKey;
