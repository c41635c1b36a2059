//! Durable key-value storage for user preferences.
//!
//! Web builds use `localStorage`; native builds keep a small JSON file in the
//! platform data directory. Both can fail (privacy mode, quota, read-only home),
//! so every operation returns a `Result` and callers decide how to degrade.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::i18n::locale::UnsupportedLocale;
#[cfg(not(target_arch = "wasm32"))]
use crate::i18n::{Locale, STORAGE_KEY};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("preference file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed preference file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Unsupported(#[from] UnsupportedLocale),
}

pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// In-memory store. Clones share the same map, which lets tests simulate a
/// fresh session reading what a previous one wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
            .local_storage()
            .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
            .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable("localStorage read failed".into()))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable("localStorage write failed".into()))
    }
}

/// On-disk layout of the native preference file. The locale is typed so a
/// hand-edited unsupported code is reported as malformed instead of read back.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct PreferenceFile {
    #[serde(rename = "preferred-locale", default, skip_serializing_if = "Option::is_none")]
    locale: Option<Locale>,
    #[serde(flatten)]
    other: std::collections::BTreeMap<String, String>,
}

/// JSON preference file; the locale preference is stored as a `Locale`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/preferences.json` for this application.
    pub fn in_data_dir() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("pl", "Gabinet", "Gabinet")
            .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
        Ok(Self::at(dirs.data_dir().join("preferences.json")))
    }

    fn load(&self) -> Result<PreferenceFile, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(PreferenceFile::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut file = self.load()?;
        if key == STORAGE_KEY {
            return Ok(file.locale.map(|locale| locale.code().to_string()));
        }
        Ok(file.other.remove(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut file = self.load().unwrap_or_default();
        if key == STORAGE_KEY {
            file.locale = Some(value.parse()?);
        } else {
            file.other.insert(key.to_string(), value.to_string());
        }
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

/// Store used by the running application on this target.
pub fn default_store() -> Rc<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileStore::in_data_dir() {
            Ok(store) => Rc::new(store),
            Err(err) => {
                tracing::debug!(error = %err, "no durable preference store; using memory");
                Rc::new(MemoryStore::new())
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let first = MemoryStore::new();
        let second = first.clone();
        first.write("k", "v").unwrap();
        assert_eq!(second.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn file_store_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("nested").join("prefs.json"));

        assert_eq!(store.read("preferred-locale").unwrap(), None);
        store.write("preferred-locale", "uk").unwrap();
        store.write("other", "1").unwrap();

        let reopened = FileStore::at(dir.path().join("nested").join("prefs.json"));
        assert_eq!(
            reopened.read("preferred-locale").unwrap().as_deref(),
            Some("uk")
        );
        assert_eq!(reopened.read("other").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn file_store_keeps_locale_typed_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileStore::at(&path);

        store.write(STORAGE_KEY, "uk").unwrap();
        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk[STORAGE_KEY], "uk");

        let file: PreferenceFile = serde_json::from_value(on_disk).unwrap();
        assert_eq!(file.locale, Some(Locale::Uk));
        assert_eq!(store.read(STORAGE_KEY).unwrap().as_deref(), Some("uk"));
    }

    #[test]
    fn file_store_rejects_unsupported_locale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileStore::at(&path);

        assert!(matches!(
            store.write(STORAGE_KEY, "de"),
            Err(StorageError::Unsupported(_))
        ));
        assert_eq!(store.read(STORAGE_KEY).unwrap(), None);

        std::fs::write(&path, r#"{ "preferred-locale": "de" }"#).unwrap();
        assert!(matches!(store.read(STORAGE_KEY), Err(StorageError::Malformed(_))));
    }

    #[test]
    fn file_store_reports_corrupt_file_and_recovers_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::at(&path);
        assert!(matches!(store.read("k"), Err(StorageError::Malformed(_))));

        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }
}
