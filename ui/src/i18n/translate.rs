//! Dot-path lookup with `{{name}}` interpolation.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::catalog::{self, TranslationTree};
use super::locale::Locale;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid placeholder pattern"));

/// Named interpolation arguments. Values are stored in their display form, so
/// strings and numbers mix freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: BTreeMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: fmt::Display> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Args::new(), |args, (name, value)| args.with(name, value))
    }
}

/// Walk `key` segment by segment. Anything other than a string leaf at the
/// end of the path is a miss.
pub fn lookup<'a>(tree: &'a TranslationTree, key: &str) -> Option<&'a str> {
    let mut node = tree.root();
    for segment in key.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}

/// Replace every `{{name}}` with its argument. Tokens without a matching
/// argument are left verbatim.
pub fn interpolate(text: &str, args: &Args) -> String {
    if args.is_empty() {
        return text.to_string();
    }
    PLACEHOLDER
        .replace_all(text, |caps: &Captures| match args.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Resolve `key` in `tree`, falling back to the key itself on a miss.
pub fn render(tree: &TranslationTree, locale: Locale, key: &str, args: &Args) -> String {
    match lookup(tree, key) {
        Some(text) => interpolate(text, args),
        None => {
            tracing::warn!(key, locale = %locale, "missing translation key");
            key.to_string()
        }
    }
}

/// Translation function bound to one locale.
///
/// Cheap to copy; obtain a fresh one after every locale change rather than
/// caching rendered strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.translate(key, &Args::default())
    }

    pub fn translate(&self, key: &str, args: &Args) -> String {
        render(catalog::tree(self.locale), self.locale, key, args)
    }
}

/// Ergonomic translation macro over anything exposing `t` / `translate`
/// (`Translator`, `I18n`).
///
/// ```ignore
/// t!(i18n, "hero.title")
/// t!(i18n, "footer.copyright", year = 2026)
/// ```
#[macro_export]
macro_rules! t {
    ($i18n:expr, $key:literal) => {
        $i18n.t($key)
    };
    ($i18n:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $i18n.translate(
            $key,
            &$crate::i18n::Args::new()$( .with(stringify!($arg), $value) )+,
        )
    };
}
