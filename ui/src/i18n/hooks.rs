//! Dioxus bridge: a `LocaleCell` at the root, mirrored into a signal so every
//! component that translates re-renders on change.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{platform, storage};

use super::cell::LocaleCell;
use super::locale::Locale;
use super::translate::{Args, Translator};

/// Localization handle available to every component under the provider.
#[derive(Clone)]
pub struct I18n {
    cell: Rc<LocaleCell>,
    locale: Signal<Locale>,
}

impl PartialEq for I18n {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell) && self.locale == other.locale
    }
}

impl I18n {
    /// Current locale. Reading subscribes the calling component.
    pub fn locale(&self) -> Locale {
        (self.locale)()
    }

    pub fn set_locale(&self, next: Locale) {
        self.cell.set_locale(next);
    }

    pub fn set_locale_code(&self, code: &str) {
        self.cell.set_locale_code(code);
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.locale())
    }

    pub fn t(&self, key: &str) -> String {
        self.translator().t(key)
    }

    pub fn translate(&self, key: &str, args: &Args) -> String {
        self.translator().translate(key, args)
    }
}

/// Install localization for the subtree. Call once, in the root component.
pub fn use_localization_provider() -> I18n {
    let cell = use_hook(|| {
        let env_language = platform::environment_language();
        Rc::new(LocaleCell::new(
            storage::default_store(),
            env_language.as_deref(),
        ))
    });
    let locale = use_signal(|| cell.locale());

    use_hook(|| {
        cell.subscribe(move |translator| {
            let mut locale = locale;
            locale.set(translator.locale());
        })
    });

    use_effect(move || platform::set_document_language(locale().code()));

    use_context_provider(|| I18n { cell, locale })
}

/// The localization handle installed by `use_localization_provider`.
///
/// Panics when called outside the provider's subtree.
pub fn use_i18n() -> I18n {
    use_context::<I18n>()
}
