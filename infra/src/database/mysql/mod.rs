//! MySQL repository implementations

pub mod translation_repository_impl;

pub use translation_repository_impl::MySqlTranslationRepository;
