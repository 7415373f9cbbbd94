// SPDX-License-Identifier: MPL-2.0
//! Supported display locales and initial-locale resolution.
//!
//! The supported set is closed: UI code passes [`Locale`] values around
//! and can never hold an unsupported one. Resolution of the starting
//! locale is best-effort and never fails; anything invalid falls through
//! to the next rule.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Every supported locale, in declaration order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    /// The raw string form, used as the persisted value and the
    /// translation resource name.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// English name, for language pickers.
    pub fn english_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "Japanese",
        }
    }

    /// Name in the language itself, for language pickers.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ja => "日本語",
        }
    }

    /// Parses the stored string form. Exact match only; anything outside
    /// the supported set is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|locale| locale.code() == code)
    }

    /// Matches a BCP-47-like language tag (e.g. `"ja-JP"`) against the
    /// supported set by its primary language subtag only.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let langid: LanguageIdentifier = tag.trim().parse().ok()?;
        Self::ALL
            .iter()
            .copied()
            .find(|locale| locale.code() == langid.language.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolves the starting locale: a valid persisted preference wins, then
/// a supported environment language tag, then the default.
pub fn resolve_initial_locale(stored: Option<&str>, env_tag: Option<&str>) -> Locale {
    stored
        .and_then(Locale::from_code)
        .or_else(|| env_tag.and_then(Locale::from_language_tag))
        .unwrap_or_default()
}
