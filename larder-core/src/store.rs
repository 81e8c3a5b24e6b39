//! Durable state: pantry, equipment, condiments, language, pending recipe.
//!
//! Each key is its own JSON file under a data directory, independently
//! loadable and saveable. A missing file seeds starter data so a first run
//! has something to cook with; a file that exists but will not read or
//! parse loads as the empty value with a warning. The in-memory state stays
//! authoritative for the session when a save fails.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::types::{Language, PantryEntry, Recipe};

const PANTRY_FILE: &str = "pantry.json";
const EQUIPMENT_FILE: &str = "equipment.json";
const CONDIMENTS_FILE: &str = "condiments.json";
const LANGUAGE_FILE: &str = "language.json";
const RECIPE_FILE: &str = "recipe.json";

/// File-backed store for all persisted state.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    /// Create a store rooted at the given directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Create a store at `LARDER_DATA_DIR`, or `~/.larder` when unset.
    pub fn from_env() -> Self {
        let data_dir = std::env::var("LARDER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());
        Self::new(data_dir)
    }

    /// Get the default data directory: ~/.larder
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".larder"))
            .unwrap_or_else(|| PathBuf::from(".larder"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn load_pantry(&self) -> Vec<PantryEntry> {
        self.load_or(PANTRY_FILE, starter_pantry, Vec::new)
    }

    pub fn save_pantry(&self, entries: &[PantryEntry]) -> Result<(), StoreError> {
        self.save(PANTRY_FILE, &entries)
    }

    pub fn load_equipment(&self) -> Vec<String> {
        self.load_or(EQUIPMENT_FILE, starter_equipment, Vec::new)
    }

    pub fn save_equipment(&self, equipment: &[String]) -> Result<(), StoreError> {
        self.save(EQUIPMENT_FILE, &equipment)
    }

    pub fn load_condiments(&self) -> Vec<String> {
        self.load_or(CONDIMENTS_FILE, starter_condiments, Vec::new)
    }

    pub fn save_condiments(&self, condiments: &[String]) -> Result<(), StoreError> {
        self.save(CONDIMENTS_FILE, &condiments)
    }

    pub fn load_language(&self) -> Language {
        self.load_or(LANGUAGE_FILE, Language::default, Language::default)
    }

    pub fn save_language(&self, language: Language) -> Result<(), StoreError> {
        self.save(LANGUAGE_FILE, &language)
    }

    /// The recipe awaiting a cook confirmation, if any.
    pub fn load_pending_recipe(&self) -> Option<Recipe> {
        self.load_or(RECIPE_FILE, || None, || None)
    }

    pub fn save_pending_recipe(&self, recipe: &Recipe) -> Result<(), StoreError> {
        self.save(RECIPE_FILE, recipe)
    }

    /// Discard the pending recipe. Missing file is fine.
    pub fn clear_pending_recipe(&self) -> Result<(), StoreError> {
        match fs::remove_file(self.data_dir.join(RECIPE_FILE)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load one key. Missing file -> `missing_default`; unreadable or
    /// unparseable file -> `corrupt_default` plus a warning.
    fn load_or<T: DeserializeOwned>(
        &self,
        file: &str,
        missing_default: impl FnOnce() -> T,
        corrupt_default: impl FnOnce() -> T,
    ) -> T {
        let path = self.data_dir.join(file);

        if !path.exists() {
            return missing_default();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(file = file, error = %e, "failed to read store file");
                return corrupt_default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(file = file, error = %e, "failed to parse store file");
                corrupt_default()
            }
        }
    }

    fn save<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.data_dir.join(file), json)?;
        Ok(())
    }
}

/// Sample pantry seeded on first run.
fn starter_pantry() -> Vec<PantryEntry> {
    vec![
        PantryEntry::new("chicken breasts", "3", None),
        PantryEntry::new("rice", "1 cup", None),
        PantryEntry::new("broccoli", "1 head", None),
    ]
}

fn starter_equipment() -> Vec<String> {
    ["Oven", "Microwave", "Stovetop"]
        .map(String::from)
        .to_vec()
}

fn starter_condiments() -> Vec<String> {
    ["Salt", "Black Pepper", "Olive Oil", "Soy Sauce"]
        .map(String::from)
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path());
        (dir, store)
    }

    #[test]
    fn pantry_round_trips() {
        let (_dir, store) = store();

        let entries = vec![
            PantryEntry::new("rice", "1 cup", None),
            PantryEntry::new(
                "milk",
                "1 carton",
                Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 17).unwrap()),
            ),
        ];

        store.save_pantry(&entries).unwrap();
        assert_eq!(store.load_pantry(), entries);
    }

    #[test]
    fn missing_files_yield_starter_defaults() {
        let (_dir, store) = store();

        let pantry = store.load_pantry();
        assert_eq!(pantry.len(), 3);
        assert_eq!(pantry[0].name, "chicken breasts");

        assert_eq!(store.load_equipment(), starter_equipment());
        assert_eq!(store.load_condiments(), starter_condiments());
        assert_eq!(store.load_language(), Language::En);
        assert!(store.load_pending_recipe().is_none());
    }

    #[test]
    fn corrupt_files_yield_empty_values() {
        let (dir, store) = store();

        fs::write(dir.path().join(PANTRY_FILE), "not json {{").unwrap();
        fs::write(dir.path().join(EQUIPMENT_FILE), "[1, 2, 3]").unwrap();

        assert!(store.load_pantry().is_empty());
        assert!(store.load_equipment().is_empty());
    }

    #[test]
    fn language_round_trips() {
        let (_dir, store) = store();
        store.save_language(Language::Zh).unwrap();
        assert_eq!(store.load_language(), Language::Zh);
    }

    #[test]
    fn keys_are_independent() {
        let (dir, store) = store();

        store.save_language(Language::Zh).unwrap();
        fs::write(dir.path().join(PANTRY_FILE), "garbage").unwrap();

        // A corrupt pantry does not disturb the language key
        assert!(store.load_pantry().is_empty());
        assert_eq!(store.load_language(), Language::Zh);
    }

    #[test]
    fn pending_recipe_lifecycle() {
        let (_dir, store) = store();

        let recipe = Recipe {
            title: "Toast".to_string(),
            description: "Crispy bread.".to_string(),
            prep_time: "1 minute".to_string(),
            cook_time: "3 minutes".to_string(),
            total_time: Some("4 minutes".to_string()),
            ingredients: vec!["2 slices of bread".to_string()],
            instructions: vec!["Toast the bread.".to_string()],
        };

        store.save_pending_recipe(&recipe).unwrap();
        assert_eq!(store.load_pending_recipe(), Some(recipe));

        store.clear_pending_recipe().unwrap();
        assert!(store.load_pending_recipe().is_none());

        // Clearing twice is fine
        store.clear_pending_recipe().unwrap();
    }
}
