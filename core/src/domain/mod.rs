//! Domain layer: translation keys, the default failure policy and request context.

pub mod entities;
pub mod value_objects;

pub use entities::TranslationKey;
pub use value_objects::{DefaultPolicy, RequestContext};
