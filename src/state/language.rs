//! Display-language preference and its writing-direction implication.
//!
//! DESIGN
//! ======
//! Direction is a pure derivation of the language code, never stored
//! separately. Changing the language persists the choice and mirrors it onto
//! the document root's `dir`/`lang` attributes; an unsupported code is a
//! cosmetic no-op rather than an error.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use leptos::prelude::*;

use crate::util::storage;

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// BCP 47 language tag persisted and written to `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// True iff the language uses a right-to-left script.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    pub fn direction(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// Native-script label for switcher UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ar => "العربية",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

/// Copyable handle over the shared language signal, provided via context at
/// the app root.
#[derive(Clone, Copy)]
pub struct LanguageStore {
    current: RwSignal<Language>,
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageStore {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(Language::default()),
        }
    }

    /// Restore the persisted preference, once at startup. Absent or
    /// unrecognized values fall back to the default language.
    pub fn init(self) {
        let language = storage::load_language()
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        self.current.set(language);
        apply_document_language(language);
    }

    /// Reactive read of the current language.
    pub fn current(self) -> Language {
        self.current.get()
    }

    pub fn is_rtl(self) -> bool {
        self.current().is_rtl()
    }

    /// Switch the display language. Unsupported codes leave the previous
    /// state unchanged; supported ones persist and update the document
    /// direction.
    pub fn change(self, code: &str) {
        let Some(language) = Language::from_code(code) else {
            log::debug!("ignoring unsupported language code {code:?}");
            return;
        };
        self.current.set(language);
        storage::save_language(language.code());
        apply_document_language(language);
    }
}

/// Mirror the language onto `<html dir>` and `<html lang>` so layout and
/// assistive tech follow the preference.
fn apply_document_language(language: Language) {
    #[cfg(feature = "csr")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("dir", language.direction());
            let _ = root.set_attribute("lang", language.code());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = language;
    }
}
