//! Locale type used as a translation key component

use serde::{Deserialize, Serialize};

/// Two-letter language code, always stored uppercase.
///
/// The translation catalog is keyed case-sensitively on uppercase locale codes,
/// so every locale is normalized on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a language code, normalizing it to uppercase
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    /// Extract the preferred language from an `Accept-Language` header value.
    ///
    /// The entry with the highest quality wins (the first one on ties); only its
    /// primary subtag is kept, so `pt-BR` becomes `PT`. Wildcards and entries
    /// with `q=0` are ignored. Falls back to `fallback` when nothing usable
    /// remains.
    pub fn from_accept_language(header: Option<&str>, fallback: &Locale) -> Self {
        let Some(header) = header else {
            return fallback.clone();
        };

        let mut preferred: Option<(&str, f32)> = None;

        for entry in header.split(',') {
            let mut parts = entry.trim().split(';');
            let tag = parts.next().unwrap_or("").trim();
            let primary = tag.split(['-', '_']).next().unwrap_or("").trim();

            if primary.is_empty() || primary == "*" {
                continue;
            }

            let quality = parts
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);

            if quality <= 0.0 {
                continue;
            }

            match preferred {
                Some((_, best)) if best >= quality => {}
                _ => preferred = Some((primary, quality)),
            }
        }

        preferred
            .map(|(primary, _)| Locale::new(primary))
            .unwrap_or_else(|| fallback.clone())
    }

    /// Get the normalized code
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the code is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Locale::new(code)
    }
}
