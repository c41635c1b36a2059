//! Supported locales and their static display metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of languages the site is translated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Polish (default).
    Pl,
    /// Ukrainian.
    Uk,
}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 2] = [Locale::Pl, Locale::Uk];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Pl => "pl",
            Self::Uk => "uk",
        }
    }

    /// Exact match against the supported codes. No case folding, no subtags.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    pub fn config(self) -> &'static LocaleConfig {
        match self {
            Self::Pl => &SUPPORTED_LOCALES[0],
            Self::Uk => &SUPPORTED_LOCALES[1],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale `{0}`")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnsupportedLocale(s.to_string()))
    }
}

/// Static description of a locale for pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConfig {
    pub code: Locale,
    pub display_name: &'static str,
    /// Short visual marker shown on the switcher (a flag emoji).
    pub indicator: &'static str,
}

pub static SUPPORTED_LOCALES: [LocaleConfig; 2] = [
    LocaleConfig {
        code: Locale::Pl,
        display_name: "Polski",
        indicator: "🇵🇱",
    },
    LocaleConfig {
        code: Locale::Uk,
        display_name: "Українська",
        indicator: "🇺🇦",
    },
];

pub const DEFAULT_LOCALE: Locale = Locale::Pl;

/// Key under which the preferred locale is persisted.
pub const STORAGE_KEY: &str = "preferred-locale";
