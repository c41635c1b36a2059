//! Startup locale selection: stored preference, then environment language,
//! then the default.

use crate::core::storage::PreferenceStore;

use super::locale::{Locale, DEFAULT_LOCALE, STORAGE_KEY};

/// Pick the locale for a new session. Pure read; storage failures are treated
/// as "no stored preference".
pub fn resolve_initial_locale(store: &dyn PreferenceStore, env_language: Option<&str>) -> Locale {
    stored_locale(store)
        .or_else(|| env_language.and_then(locale_from_language_tag))
        .unwrap_or(DEFAULT_LOCALE)
}

fn stored_locale(store: &dyn PreferenceStore) -> Option<Locale> {
    match store.read(STORAGE_KEY) {
        Ok(Some(value)) => {
            let locale = Locale::from_code(&value);
            if locale.is_none() {
                tracing::warn!(value = %value, "ignoring unsupported stored locale");
            }
            locale
        }
        Ok(None) => None,
        Err(err) => {
            tracing::debug!(error = %err, "stored locale unreadable");
            None
        }
    }
}

/// Primary subtag of `tag`, lower-cased, if it names a supported locale.
pub fn locale_from_language_tag(tag: &str) -> Option<Locale> {
    let primary = tag.split('-').next().unwrap_or_default().to_lowercase();
    Locale::from_code(&primary)
}
