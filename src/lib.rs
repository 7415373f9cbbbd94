// SPDX-License-Identifier: MPL-2.0
//! Localization layer for the Agari riichi mahjong hand validator.
//!
//! Holds the user's selected display locale, persists the choice,
//! derives the active translation table from it, and translates the
//! validator backend's rule-name and score-tier vocabulary into the
//! active locale. Unknown backend terms fall back to the raw string, so
//! the UI never shows a blank for an unrecognized term.

pub mod catalog;
pub mod context;
pub mod error;
pub mod locale;
pub mod prefs;
pub mod store;
pub mod terms;

pub use catalog::{Catalog, TranslationKey, TranslationTable};
pub use context::{I18n, WindNames};
pub use error::{Error, Result};
pub use locale::Locale;
pub use prefs::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, LOCALE_PREFERENCE_KEY,
};
pub use store::{LocaleStore, Subscription};
pub use terms::{TermMap, SCORE_TIER_TERMS, YAKU_TERMS};
