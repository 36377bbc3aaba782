//! Internationalization
//!
//! Plain Rust structs per language: missing keys are compile errors and
//! lookups cost nothing at runtime.

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod id_id;
pub mod keys;

pub use keys::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    EnUs,
    IdId,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::EnUs, Language::IdId]
    }

    /// Name in the language itself.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::IdId => "Bahasa Indonesia",
        }
    }

    /// BCP 47 code, as stored in `config.toml`.
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::IdId => "id-ID",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "id-ID" | "id" => Some(Language::IdId),
            _ => None,
        }
    }

    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::IdId,
            Language::IdId => Language::EnUs,
        }
    }

    #[must_use]
    pub fn prev(self) -> Language {
        self.next()
    }

    fn index(self) -> usize {
        match self {
            Language::EnUs => 0,
            Language::IdId => 1,
        }
    }
}

static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// Texts of the current language.
///
/// ```ignore
/// let label = t().nav.canvas; // "Canvas" or "Kanvas"
/// ```
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &id_id::TRANSLATIONS,
        _ => &en_us::TRANSLATIONS,
    }
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::IdId,
        _ => Language::EnUs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("id"), Some(Language::IdId));
        assert_eq!(Language::from_code("zh-CN"), None);
    }

    #[test]
    fn cycling_visits_every_language() {
        assert_eq!(Language::EnUs.next(), Language::IdId);
        assert_eq!(Language::IdId.next(), Language::EnUs);
    }
}
