use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::catalog;
use crate::i18n::{Locale, DEFAULT_LOCALE};

/// Could `candidate` be a catalog key? Dot-separated identifier segments whose
/// first segment is a top-level section of the default catalog. That keeps
/// file names (`main.css`) and other dotted literals out.
fn looks_like_key(candidate: &str, sections: &HashSet<String>) -> bool {
    let mut segments = candidate.split('.');
    let Some(first) = segments.next() else {
        return false;
    };
    let rest: Vec<_> = segments.collect();
    !rest.is_empty()
        && sections.contains(first)
        && rest
            .iter()
            .all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Every string literal under `src_root` that looks like a catalog key.
///
/// This catches `t!(i18n, "...")`, `i18n.t("...")` and keys kept in `const`
/// tables alike. Keys built at runtime (`format!`) are not seen.
fn extract_translation_keys_from_source(
    src_root: &Path,
    sections: &HashSet<String>,
) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    let p = entry.path();
                    // This directory holds the scanner itself and test fixtures.
                    if p.file_name().and_then(|s| s.to_str()) == Some("tests") {
                        continue;
                    }
                    stack.push(p);
                }
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }

        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        // Scan quoted literals; escapes never appear inside keys.
        let mut rest = content.as_str();
        while let Some(open) = rest.find('"') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('"') else {
                break;
            };
            let literal = &after[..close];
            if looks_like_key(literal, sections) {
                found.insert(literal.to_string());
            }
            rest = &after[close + 1..];
        }
    }

    found
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = catalog::tree(DEFAULT_LOCALE);

    // 1. Default catalog must be loaded.
    let fallback_keys = fallback.leaf_paths();
    assert!(
        !fallback_keys.is_empty(),
        "No keys loaded from the default ({DEFAULT_LOCALE}) catalog"
    );

    let sections: HashSet<String> = fallback
        .root()
        .as_object()
        .map(|map| map.keys().cloned().collect())
        .unwrap_or_default();

    // 2. Gather all referenced keys in Rust sources.
    let referenced_keys = extract_translation_keys_from_source(&crate_root.join("src"), &sections);
    assert!(
        referenced_keys.contains("hero.title"),
        "Source scan found no usages; did the scanner break?"
    );

    // 3. Every referenced key must resolve in every locale.
    let mut missing = Vec::new();
    for locale in Locale::ALL {
        let keys = catalog::tree(locale).leaf_paths();
        for key in &referenced_keys {
            if !keys.contains(key) {
                missing.push(format!("{locale}: {key}"));
            }
        }
    }
    if !missing.is_empty() {
        panic!(
            "Referenced translation keys missing ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }

    // 4. Unused default keys are reported, not failed.
    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced_keys.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} default keys unused in Rust sources:\n{}",
            unused.len(),
            unused.join(", ")
        );
    }
}

#[test]
fn key_heuristic_rejects_non_keys() {
    let sections: HashSet<String> = ["hero", "nav"].into_iter().map(String::from).collect();
    assert!(looks_like_key("hero.title", &sections));
    assert!(looks_like_key("nav.forWho", &sections));
    assert!(!looks_like_key("hero", &sections));
    assert!(!looks_like_key("main.css", &sections));
    assert!(!looks_like_key("hero..title", &sections));
    assert!(!looks_like_key("hero.title {x}", &sections));
}
