//! Translation catalog repository module.

mod r#trait;
pub use r#trait::TranslationStore;

mod mock;
pub use mock::MockTranslationStore;

#[cfg(test)]
mod tests;
