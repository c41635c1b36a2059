//! Per-locale translation trees, embedded at compile time from `locales/<code>.json`.
//!
//! Trees are expected to share the default locale's key paths. That is not
//! enforced here: a diverging tree only produces key fallbacks at lookup time.
//! The `locale_parity` integration test guards it instead.

use std::collections::{BTreeSet, HashMap};

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde_json::Value;

use super::locale::Locale;

#[derive(Embed)]
#[folder = "locales"]
struct Catalogs;

/// Nested mapping of string keys to sub-trees or string leaves.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationTree {
    root: Value,
}

impl TranslationTree {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let root: Value = serde_json::from_str(raw)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Dot paths of every string leaf, sorted.
    pub fn leaf_paths(&self) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        collect_leaves(&self.root, &mut String::new(), &mut paths);
        paths
    }
}

fn collect_leaves(node: &Value, prefix: &mut String, out: &mut BTreeSet<String>) {
    match node {
        Value::Object(map) => {
            for (segment, child) in map {
                let len = prefix.len();
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);
                collect_leaves(child, prefix, out);
                prefix.truncate(len);
            }
        }
        Value::String(_) if !prefix.is_empty() => {
            out.insert(prefix.clone());
        }
        _ => {}
    }
}

/// Leaf paths of `reference` that `candidate` does not provide.
pub fn missing_paths(reference: &TranslationTree, candidate: &TranslationTree) -> Vec<String> {
    let have = candidate.leaf_paths();
    reference
        .leaf_paths()
        .into_iter()
        .filter(|path| !have.contains(path))
        .collect()
}

static TREES: Lazy<HashMap<Locale, TranslationTree>> = Lazy::new(|| {
    Locale::ALL
        .into_iter()
        .map(|locale| (locale, load(locale)))
        .collect()
});

/// Translation tree for `locale`. Never fails; an unloadable catalog is empty.
pub fn tree(locale: Locale) -> &'static TranslationTree {
    static EMPTY: Lazy<TranslationTree> = Lazy::new(TranslationTree::default);
    TREES.get(&locale).unwrap_or(&*EMPTY)
}

fn load(locale: Locale) -> TranslationTree {
    let file = format!("{}.json", locale.code());
    let Some(asset) = Catalogs::get(&file) else {
        tracing::error!(locale = %locale, file = %file, "translation catalog not embedded");
        return TranslationTree::default();
    };

    let parsed = std::str::from_utf8(asset.data.as_ref())
        .map_err(|err| err.to_string())
        .and_then(|raw| TranslationTree::from_json(raw).map_err(|err| err.to_string()));

    match parsed {
        Ok(tree) => tree,
        Err(err) => {
            tracing::error!(locale = %locale, error = %err, "failed to parse translation catalog");
            TranslationTree::default()
        }
    }
}
