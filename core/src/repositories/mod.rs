pub mod translation;

pub use translation::{MockTranslationStore, TranslationStore};
