// SPDX-License-Identifier: MPL-2.0
//! Localization context wiring the locale store to the translation
//! catalog.
//!
//! [`I18n`] owns the immutable catalog and the observable locale
//! selection. The active translation table is a pure function of the
//! two: it is resolved from the store's value on every read and before
//! every subscriber callback, so no stale table is ever observable.

use crate::catalog::{Catalog, TranslationKey, TranslationTable};
use crate::error::Result;
use crate::locale::Locale;
use crate::prefs::PreferenceStore;
use crate::store::{LocaleStore, Subscription};
use crate::terms::{TermMap, SCORE_TIER_TERMS, YAKU_TERMS};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// The four wind display strings of the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindNames<'a> {
    pub east: &'a str,
    pub south: &'a str,
    pub west: &'a str,
    pub north: &'a str,
}

/// Localization context. Clones share the same locale state and catalog.
#[derive(Clone)]
pub struct I18n {
    catalog: Rc<Catalog>,
    locale: LocaleStore,
}

impl I18n {
    /// Loads the catalog and resolves the starting locale from the
    /// persisted preference, the operating-system language, then the
    /// default.
    pub fn new(prefs: Rc<RefCell<dyn PreferenceStore>>) -> Result<Self> {
        let catalog = Rc::new(Catalog::load()?);
        Ok(Self {
            catalog,
            locale: LocaleStore::from_system(prefs),
        })
    }

    /// [`I18n::new`] with an explicit environment language tag in place
    /// of the operating-system signal.
    pub fn with_environment_tag(
        prefs: Rc<RefCell<dyn PreferenceStore>>,
        env_tag: Option<&str>,
    ) -> Result<Self> {
        let catalog = Rc::new(Catalog::load()?);
        Ok(Self {
            catalog,
            locale: LocaleStore::initialize(prefs, env_tag),
        })
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Selects the display locale; see [`LocaleStore::set`].
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    /// Observes locale changes; see [`LocaleStore::subscribe`].
    pub fn subscribe_locale(&self, callback: impl Fn(Locale) + 'static) -> Subscription {
        self.locale.subscribe(callback)
    }

    /// The underlying observable store.
    pub fn locale_store(&self) -> &LocaleStore {
        &self.locale
    }

    /// Snapshot of the active locale's translation table, for one-off
    /// lookups outside the subscription mechanism.
    pub fn translations(&self) -> &TranslationTable {
        self.catalog.table(self.locale.get())
    }

    /// Like [`I18n::subscribe_locale`], but delivers the resolved table.
    pub fn subscribe_translations(
        &self,
        callback: impl Fn(&TranslationTable) + 'static,
    ) -> Subscription {
        let catalog = Rc::clone(&self.catalog);
        self.locale
            .subscribe(move |locale| callback(catalog.table(locale)))
    }

    /// Resolves one key against the active table.
    pub fn tr(&self, key: TranslationKey) -> &str {
        self.translations().get(key)
    }

    /// Translates a backend vocabulary string through `map`. An unmapped
    /// term comes back unchanged, so the UI shows the raw upstream value
    /// rather than a blank.
    pub fn translate_term(&self, map: &TermMap, term: &str) -> String {
        match map.key_for(term) {
            Some(key) => self.translations().get(key).to_string(),
            None => term.to_string(),
        }
    }

    /// Translates a backend rule (yaku) name.
    pub fn translate_yaku(&self, name: &str) -> String {
        self.translate_term(&YAKU_TERMS, name)
    }

    /// Translates a backend score-tier name.
    pub fn translate_score_tier(&self, tier: &str) -> String {
        self.translate_term(&SCORE_TIER_TERMS, tier)
    }

    /// The four wind names in the active locale.
    pub fn wind_names(&self) -> WindNames<'_> {
        let table = self.translations();
        WindNames {
            east: table.get(TranslationKey::WindEast),
            south: table.get(TranslationKey::WindSouth),
            west: table.get(TranslationKey::WindWest),
            north: table.get(TranslationKey::WindNorth),
        }
    }
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.locale())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferenceStore;

    fn memory_prefs() -> Rc<RefCell<dyn PreferenceStore>> {
        Rc::new(RefCell::new(MemoryPreferenceStore::new()))
    }

    fn i18n_with_tag(tag: Option<&str>) -> I18n {
        I18n::with_environment_tag(memory_prefs(), tag).expect("catalog should load")
    }

    #[test]
    fn translations_follow_the_active_locale() {
        let i18n = i18n_with_tag(None);
        assert_eq!(i18n.translations().locale(), Locale::En);

        i18n.set_locale(Locale::Ja);
        assert_eq!(i18n.translations().locale(), Locale::Ja);
        assert_eq!(i18n.tr(TranslationKey::ValidateButton), "判定");
    }

    #[test]
    fn mapped_term_resolves_against_the_active_table() {
        let i18n = i18n_with_tag(None);
        assert_eq!(i18n.translate_yaku("Riichi"), "Riichi");

        i18n.set_locale(Locale::Ja);
        assert_eq!(i18n.translate_yaku("Riichi"), "立直");
        assert_eq!(i18n.translate_score_tier("Mangan"), "満貫");

        i18n.set_locale(Locale::En);
        assert_eq!(i18n.translate_yaku("Riichi"), "Riichi");
    }

    #[test]
    fn unmapped_term_falls_back_to_the_raw_string_in_every_locale() {
        let i18n = i18n_with_tag(None);
        for locale in Locale::ALL {
            i18n.set_locale(locale);
            assert_eq!(i18n.translate_yaku("Unknown Rule"), "Unknown Rule");
            assert_eq!(i18n.translate_score_tier("Unknown Tier"), "Unknown Tier");
        }
    }

    #[test]
    fn table_subscribers_see_the_new_table_not_a_stale_one() {
        let i18n = i18n_with_tag(None);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_cb = Rc::clone(&seen);
        let _sub = i18n.subscribe_translations(move |table| {
            seen_cb.borrow_mut().push(table.locale());
        });

        i18n.set_locale(Locale::Ja);
        assert_eq!(*seen.borrow(), vec![Locale::En, Locale::Ja]);
    }

    #[test]
    fn wind_names_match_the_active_locale() {
        let i18n = i18n_with_tag(None);
        assert_eq!(i18n.wind_names().east, "East");

        i18n.set_locale(Locale::Ja);
        let winds = i18n.wind_names();
        assert_eq!(winds.east, "東");
        assert_eq!(winds.south, "南");
        assert_eq!(winds.west, "西");
        assert_eq!(winds.north, "北");
    }

    #[test]
    fn environment_tag_selects_the_starting_locale() {
        let i18n = i18n_with_tag(Some("ja-JP"));
        assert_eq!(i18n.locale(), Locale::Ja);
    }
}
