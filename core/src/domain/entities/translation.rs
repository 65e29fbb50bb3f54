//! Translation key entity

use rexh_shared::Locale;

/// Key of one template in the translation catalog.
///
/// The same code can map to different texts per application, module and
/// locale, so all four parts are needed for a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    pub application: String,
    pub module: String,
    pub code: String,
    pub locale: Locale,
}

impl TranslationKey {
    /// Build a key; surrounding whitespace is dropped and the locale is uppercased
    pub fn new(
        application: impl AsRef<str>,
        module: impl AsRef<str>,
        code: impl AsRef<str>,
        locale: &Locale,
    ) -> Self {
        Self {
            application: application.as_ref().trim().to_string(),
            module: module.as_ref().trim().to_string(),
            code: code.as_ref().trim().to_string(),
            locale: Locale::new(locale.as_str()),
        }
    }
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.application, self.module, self.code, self.locale
        )
    }
}
