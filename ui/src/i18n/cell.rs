//! The single owned locale state for a session, with change notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::storage::PreferenceStore;

use super::locale::{Locale, DEFAULT_LOCALE, STORAGE_KEY};
use super::resolver::resolve_initial_locale;
use super::translate::Translator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(Translator)>;

/// Holds the current locale, persists changes and notifies observers.
///
/// Single-threaded: mutations arrive one UI event at a time.
pub struct LocaleCell {
    locale: Cell<Locale>,
    store: Rc<dyn PreferenceStore>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_id: Cell<u64>,
}

impl LocaleCell {
    /// Seed the cell once from the resolver and persist the seeded locale, so
    /// a language picked from the environment sticks on later visits.
    pub fn new(store: Rc<dyn PreferenceStore>, env_language: Option<&str>) -> Self {
        let locale = resolve_initial_locale(store.as_ref(), env_language);
        let cell = Self {
            locale: Cell::new(locale),
            store,
            observers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        };
        cell.persist(locale);
        cell
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.locale())
    }

    /// Switch to `next`. Re-selecting the current locale does nothing.
    pub fn set_locale(&self, next: Locale) {
        if next == self.locale.get() {
            return;
        }
        self.locale.set(next);
        self.persist(next);
        self.notify();
    }

    /// Switch by code. Unsupported codes force the default locale.
    pub fn set_locale_code(&self, code: &str) {
        match Locale::from_code(code) {
            Some(locale) => self.set_locale(locale),
            None => {
                tracing::warn!(code, fallback = %DEFAULT_LOCALE, "invalid locale requested");
                self.set_locale(DEFAULT_LOCALE);
            }
        }
    }

    /// Register `observer`; it receives a fresh translator after every change.
    pub fn subscribe(&self, observer: impl Fn(Translator) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    fn persist(&self, locale: Locale) {
        if let Err(err) = self.store.write(STORAGE_KEY, locale.code()) {
            tracing::debug!(error = %err, locale = %locale, "locale preference not persisted");
        }
    }

    fn notify(&self) {
        // Snapshot so observers may (un)subscribe while being notified.
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        let translator = self.translator();
        for observer in observers {
            observer(translator);
        }
    }
}

impl std::fmt::Debug for LocaleCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleCell")
            .field("locale", &self.locale.get())
            .field("observers", &self.observers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::{MemoryStore, StorageError};

    fn cell_with(store: &MemoryStore) -> LocaleCell {
        LocaleCell::new(Rc::new(store.clone()), None)
    }

    #[test]
    fn set_locale_updates_state_and_persists() {
        let store = MemoryStore::new();
        let cell = cell_with(&store);
        assert_eq!(cell.locale(), DEFAULT_LOCALE);

        cell.set_locale(Locale::Uk);
        assert_eq!(cell.locale(), Locale::Uk);
        assert_eq!(store.read(STORAGE_KEY).unwrap().as_deref(), Some("uk"));
    }

    #[test]
    fn seeded_locale_is_persisted_on_first_visit() {
        let store = MemoryStore::new();
        let first = LocaleCell::new(Rc::new(store.clone()), Some("uk-UA"));
        assert_eq!(first.locale(), Locale::Uk);
        assert_eq!(store.read(STORAGE_KEY).unwrap().as_deref(), Some("uk"));

        // A later visit with a different browser language keeps the first pick.
        let later = LocaleCell::new(Rc::new(store.clone()), Some("pl-PL"));
        assert_eq!(later.locale(), Locale::Uk);
    }

    #[test]
    fn default_seed_is_persisted_too() {
        let store = MemoryStore::new();
        let _cell = cell_with(&store);
        assert_eq!(
            store.read(STORAGE_KEY).unwrap().as_deref(),
            Some(DEFAULT_LOCALE.code())
        );
    }

    #[test]
    fn invalid_code_forces_default_not_previous() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "uk");
        let cell = cell_with(&store);
        assert_eq!(cell.locale(), Locale::Uk);

        cell.set_locale_code("de");
        assert_eq!(cell.locale(), DEFAULT_LOCALE);
        assert_eq!(store.read(STORAGE_KEY).unwrap().as_deref(), Some("pl"));
    }

    #[test]
    fn persisted_choice_survives_a_fresh_session() {
        for locale in Locale::ALL {
            let store = MemoryStore::new();
            let first = cell_with(&store);
            // Leave the default first so setting it back is a real change.
            first.set_locale(Locale::Uk);
            first.set_locale(locale);
            drop(first);

            let second = LocaleCell::new(Rc::new(store.clone()), Some("en-US"));
            assert_eq!(second.locale(), locale);
        }
    }

    #[test]
    fn observers_see_each_change_once() {
        let cell = cell_with(&MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = cell.subscribe(move |translator| sink.borrow_mut().push(translator.locale()));

        cell.set_locale(Locale::Uk);
        cell.set_locale(Locale::Uk);
        cell.set_locale(Locale::Pl);
        assert_eq!(*seen.borrow(), vec![Locale::Uk, Locale::Pl]);

        cell.unsubscribe(id);
        cell.set_locale(Locale::Uk);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn translator_follows_locale() {
        let cell = cell_with(&MemoryStore::new());
        let before = cell.translator().t("hero.cta");
        cell.set_locale(Locale::Uk);
        let after = cell.translator().t("hero.cta");
        assert_ne!(before, after);
    }

    #[test]
    fn persistence_failure_is_swallowed() {
        struct ReadOnly;
        impl PreferenceStore for ReadOnly {
            fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Ok(None)
            }
            fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Unavailable("quota exceeded".into()))
            }
        }

        let cell = LocaleCell::new(Rc::new(ReadOnly), None);
        cell.set_locale(Locale::Uk);
        assert_eq!(cell.locale(), Locale::Uk);
    }
}
