//! Shared UI crate for the practice website: localization, persistence and
//! every page section. Platform crates (`web`) only launch it.

pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    // Site header with in-page navigation (components/header.rs)
    pub mod header;
    pub use header::Header;

    // Flag buttons bound to the localization provider (components/language_switcher.rs)
    pub mod language_switcher;
    pub use language_switcher::LanguageSwitcher;

    // Transient status messages (components/notice.rs)
    pub mod notice;
    pub use notice::{Notice, NoticeKind};
}

#[cfg(test)]
mod tests;
