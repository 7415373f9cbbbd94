// SPDX-License-Identifier: MPL-2.0
//! Observable holder of the active locale.
//!
//! The store is the single source of truth for the selected display
//! locale. `set` writes the choice through to the preference store,
//! updates the held value, then notifies subscribers synchronously in
//! subscription order. Persistence is best-effort: a failed write never
//! blocks the in-process state change.
//!
//! Everything here is single-threaded and non-blocking; clones of the
//! store are handles onto the same shared state.

use crate::locale::{resolve_initial_locale, Locale};
use crate::prefs::{PreferenceStore, LOCALE_PREFERENCE_KEY};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn(Locale)>;

struct Inner {
    value: Locale,
    /// Weak entries; dead subscribers are pruned on the next notification.
    subscribers: Vec<Weak<dyn Fn(Locale)>>,
    /// True while a notification pass is running.
    notifying: bool,
    /// Changes issued from inside a notification callback, applied in
    /// order once the current pass completes.
    pending: VecDeque<Locale>,
}

/// Shared handle to the locale state. Clones observe and mutate the same
/// underlying value.
pub struct LocaleStore {
    inner: Rc<RefCell<Inner>>,
    prefs: Rc<RefCell<dyn PreferenceStore>>,
}

impl Clone for LocaleStore {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            prefs: Rc::clone(&self.prefs),
        }
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("LocaleStore")
            .field("value", &inner.value)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl LocaleStore {
    /// Builds a store with the starting locale resolved from the
    /// persisted preference, then `env_tag`, then the default. Never
    /// fails; invalid or missing inputs fall through to the next rule.
    pub fn initialize(prefs: Rc<RefCell<dyn PreferenceStore>>, env_tag: Option<&str>) -> Self {
        let stored = prefs.borrow().get(LOCALE_PREFERENCE_KEY);
        let value = resolve_initial_locale(stored.as_deref(), env_tag);
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                subscribers: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
            prefs,
        }
    }

    /// [`LocaleStore::initialize`] with the language tag reported by the
    /// operating system.
    pub fn from_system(prefs: Rc<RefCell<dyn PreferenceStore>>) -> Self {
        let tag = sys_locale::get_locale();
        Self::initialize(prefs, tag.as_deref())
    }

    /// Current locale. Never suspends.
    pub fn get(&self) -> Locale {
        self.inner.borrow().value
    }

    /// Selects `locale`: persists it, updates the held value, then
    /// notifies every subscriber with the new value. Each call notifies,
    /// including re-selection of the current locale.
    ///
    /// A call made from inside a notification callback is queued and
    /// applied after the running pass completes, each queued change with
    /// its own full notification pass.
    pub fn set(&self, locale: Locale) {
        if let Err(error) = self
            .prefs
            .borrow_mut()
            .set(LOCALE_PREFERENCE_KEY, locale.code())
        {
            eprintln!("Failed to save locale preference: {}", error);
        }

        {
            let mut inner = self.inner.borrow_mut();
            if inner.notifying {
                inner.pending.push_back(locale);
                return;
            }
            inner.value = locale;
            inner.notifying = true;
        }
        self.run_notifications(locale);
    }

    /// Registers `callback`, invoking it immediately with the current
    /// value and on every subsequent change. Dropping the returned guard
    /// unsubscribes; delivery stops after any pass already in flight.
    pub fn subscribe(&self, callback: impl Fn(Locale) + 'static) -> Subscription {
        let strong: Callback = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&strong));
        strong(self.get());
        Subscription { _callback: strong }
    }

    /// Registered subscribers, counting entries not yet pruned.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn run_notifications(&self, first: Locale) {
        let mut current = first;
        loop {
            // Collect live callbacks, then call them with no borrow held
            // so callbacks may read the store or subscribe.
            let callbacks: Vec<Callback> = {
                let mut inner = self.inner.borrow_mut();
                inner.subscribers.retain(|weak| weak.strong_count() > 0);
                inner.subscribers.iter().filter_map(Weak::upgrade).collect()
            };
            for callback in &callbacks {
                callback(current);
            }

            let mut inner = self.inner.borrow_mut();
            match inner.pending.pop_front() {
                Some(next) => {
                    inner.value = next;
                    current = next;
                }
                None => {
                    inner.notifying = false;
                    break;
                }
            }
        }
    }
}

/// Keeps a subscriber callback registered. Dropping it unsubscribes.
pub struct Subscription {
    _callback: Callback,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
