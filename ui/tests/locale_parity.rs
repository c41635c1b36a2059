use std::collections::BTreeSet;

use ui::i18n::catalog::{self, missing_paths};
use ui::i18n::translate::lookup;
use ui::i18n::{Locale, DEFAULT_LOCALE};

/// Catalog parity test.
/// Every non-default locale must provide exactly the default (pl) locale's key
/// paths. Runtime lookups fall back to the raw key on a miss, so a gap here
/// would otherwise only show up as a dotted key on the page.
///
/// If you add a locale:
/// 1. Add its variant to `Locale` and `SUPPORTED_LOCALES`.
/// 2. Copy `ui/locales/pl.json` to `ui/locales/<code>.json` and translate.
/// 3. Run `cargo test -p gabinet-ui` to confirm parity.
#[test]
fn all_locales_match_default_key_paths() {
    let reference = catalog::tree(DEFAULT_LOCALE);
    assert!(
        !reference.leaf_paths().is_empty(),
        "Default locale ({DEFAULT_LOCALE}) contains no keys."
    );

    let mut failures = Vec::new();
    for locale in Locale::ALL.into_iter().filter(|l| *l != DEFAULT_LOCALE) {
        let candidate = catalog::tree(locale);

        let missing = missing_paths(reference, candidate);
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }

        let extra = missing_paths(candidate, reference);
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} has {} key(s) unknown to {DEFAULT_LOCALE}:\n  {}",
                extra.len(),
                extra.join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation parity check failed:\n\n{}\n\nHint: copy the missing keys from {DEFAULT_LOCALE}, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Placeholder names are part of the contract: a translation that renames
/// `{{year}}` would silently stop interpolating.
#[test]
fn placeholders_match_default_locale() {
    let reference = catalog::tree(DEFAULT_LOCALE);
    let mut failures = Vec::new();

    for locale in Locale::ALL.into_iter().filter(|l| *l != DEFAULT_LOCALE) {
        let candidate = catalog::tree(locale);
        for path in reference.leaf_paths() {
            let (Some(expected), Some(actual)) = (lookup(reference, &path), lookup(candidate, &path))
            else {
                continue;
            };
            if placeholders(expected) != placeholders(actual) {
                failures.push(format!("{locale}: {path}"));
            }
        }
    }

    assert!(
        failures.is_empty(),
        "Placeholder mismatch:\n  {}",
        failures.join("\n  ")
    );
}

fn placeholders(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        names.insert(after[..end].to_string());
        rest = &after[end + 2..];
    }
    names
}
