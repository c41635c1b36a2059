//! Client-side localization for the site.
//!
//! - `locale`: the closed set of supported locales and their metadata.
//! - `catalog`: per-locale translation trees embedded from `locales/*.json` (`rust-embed`).
//! - `translate`: dot-path lookup with `{{name}}` interpolation; misses fall back to the key.
//! - `resolver`: startup locale from stored preference, environment language, default.
//! - `cell`: the session's locale state; persists and notifies on change.
//! - `hooks`: Dioxus provider/consumer hooks over the cell.
//!
//! Usage in a component (under `use_localization_provider()`):
//! ```ignore
//! use crate::i18n::use_i18n;
//! use crate::t;
//! let i18n = use_i18n();
//! let title = t!(i18n, "hero.title");
//! let footer = t!(i18n, "footer.copyright", year = 2026);
//! ```
//!
//! To add a locale: add a variant to `Locale` and an entry to
//! `SUPPORTED_LOCALES`, copy `locales/pl.json` to `locales/<code>.json`, then
//! translate each value keeping keys and `{{placeholders}}` identical.

pub mod catalog;
pub mod cell;
pub mod hooks;
pub mod locale;
pub mod resolver;
pub mod translate;

pub use cell::{LocaleCell, SubscriptionId};
pub use hooks::{use_i18n, use_localization_provider, I18n};
pub use locale::{Locale, LocaleConfig, DEFAULT_LOCALE, STORAGE_KEY, SUPPORTED_LOCALES};
pub use resolver::resolve_initial_locale;
pub use translate::{Args, Translator};
