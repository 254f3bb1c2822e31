//! Persisted editor state and preferences
//!
//! Layout matches what the editor keeps in client-local storage:
//! - `editor-storage`: `{ "state": { "themeState": ..., "hasChangedThemeFromDefault": ... }, "version": ... }`
//! - `preferences-storage`: `{ "state": { "tailwindVersion": ..., "colorFormat": ..., "packageManager": ... } }`

use crate::color::{ColorFormat, TailwindVersion};
use crate::error::Result;
use crate::share::PackageManager;
use crate::state::ThemeEditor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const EDITOR_STORAGE_KEY: &str = "editor-storage";
pub const PREFERENCES_STORAGE_KEY: &str = "preferences-storage";

/// Current `editor-storage` layout version
pub const EDITOR_STORAGE_VERSION: u32 = 1;

/// String key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store, one `<key>.json` file per key
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path(key)) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

/// Envelope around persisted state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persisted<T> {
    pub state: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// User preferences for code export
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub tailwind_version: TailwindVersion,
    pub color_format: ColorFormat,
    pub package_manager: PackageManager,
}

fn load<T: DeserializeOwned + Default>(store: &impl KeyValueStore, key: &str) -> Result<T> {
    match store.get(key)? {
        Some(raw) => {
            let persisted: Persisted<T> = serde_json::from_str(&raw)?;
            Ok(persisted.state)
        }
        None => Ok(T::default()),
    }
}

fn save<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &str,
    state: &T,
    version: Option<u32>,
) -> Result<()> {
    let raw = serde_json::to_string_pretty(&Persisted { state, version })?;
    store.set(key, &raw)
}

impl ThemeEditor {
    /// Load the editor from `editor-storage`, or a fresh editor if absent
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        load(store, EDITOR_STORAGE_KEY)
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        save(store, EDITOR_STORAGE_KEY, self, Some(EDITOR_STORAGE_VERSION))
    }
}

impl Preferences {
    /// Load preferences from `preferences-storage`, or defaults if absent
    pub fn load(store: &impl KeyValueStore) -> Result<Self> {
        load(store, PREFERENCES_STORAGE_KEY)
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        save(store, PREFERENCES_STORAGE_KEY, self, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use crate::tokens::TokenKey;
    use serde_json::{json, Value};

    #[test]
    fn editor_round_trips_through_store() {
        let mut editor = ThemeEditor::new();
        editor.apply_preset("catppuccin");
        editor.set_mode(ThemeMode::Dark);
        editor.update_token(TokenKey::Radius, "0.75rem");

        let mut store = MemoryStore::new();
        editor.save(&mut store).unwrap();
        assert_eq!(ThemeEditor::load(&store).unwrap(), editor);
    }

    #[test]
    fn editor_storage_layout() {
        let mut store = MemoryStore::new();
        ThemeEditor::new().save(&mut store).unwrap();

        let raw: Value = serde_json::from_str(&store.get(EDITOR_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(raw["version"], 1);
        assert_eq!(raw["state"]["hasChangedThemeFromDefault"], false);
        assert_eq!(raw["state"]["themeState"]["currentMode"], "light");
        assert_eq!(
            raw["state"]["themeState"]["styles"]["light"]["background"],
            "#ffffff"
        );
    }

    #[test]
    fn missing_keys_load_defaults() {
        let store = MemoryStore::new();
        assert_eq!(ThemeEditor::load(&store).unwrap(), ThemeEditor::new());
        assert_eq!(Preferences::load(&store).unwrap(), Preferences::default());
    }

    #[test]
    fn preferences_layout() {
        let mut store = MemoryStore::new();
        store
            .set(
                PREFERENCES_STORAGE_KEY,
                &json!({ "state": { "tailwindVersion": "4", "colorFormat": "oklch", "packageManager": "bun" } })
                    .to_string(),
            )
            .unwrap();

        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.tailwind_version, TailwindVersion::V4);
        assert_eq!(prefs.color_format, ColorFormat::Oklch);
        assert_eq!(prefs.package_manager, PackageManager::Bun);
    }

    #[test]
    fn partial_preferences_fill_defaults() {
        let mut store = MemoryStore::new();
        store
            .set(PREFERENCES_STORAGE_KEY, r#"{"state":{"colorFormat":"hex"}}"#)
            .unwrap();
        let prefs = Preferences::load(&store).unwrap();
        assert_eq!(prefs.color_format, ColorFormat::Hex);
        assert_eq!(prefs.tailwind_version, TailwindVersion::V3);
        assert_eq!(prefs.package_manager, PackageManager::Pnpm);
    }

    #[test]
    fn file_store_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("state"));
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(FileStore::new(dir.path().join("state")).get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
