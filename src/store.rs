//! Local persistence for the inventory document.
//!
//! One JSON file plays the role the browser's localStorage key played in
//! the original form: read once at startup, rewritten after every edit.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::models::InventoryDocument;

pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the document from disk.
    ///
    /// A missing file means a fresh form. Unreadable or malformed state is
    /// never an error either: the form must always come up renderable, so
    /// corruption is logged and replaced with a fresh default.
    pub fn load(&self) -> InventoryDocument {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return InventoryDocument::new();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", self.path.display(), e);
                return InventoryDocument::new();
            }
        };

        match serde_json::from_str::<InventoryDocument>(&raw) {
            Ok(doc) => doc.normalized(),
            Err(e) => {
                tracing::warn!(
                    "Discarding malformed document at {}: {}",
                    self.path.display(),
                    e
                );
                InventoryDocument::new()
            }
        }
    }

    /// Write the document to disk, creating parent directories as needed.
    pub fn save(&self, doc: &InventoryDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(parent.to_path_buf(), e))?;
        }
        let json = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io(self.path.clone(), e))?;
        tracing::debug!("Saved document to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io(PathBuf, io::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(path, e) => {
                write!(f, "Failed to write '{}': {}", path.display(), e)
            }
            StoreError::Serialize(e) => write!(f, "Failed to serialize document: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_fresh() {
        let temp_dir = tempdir().unwrap();
        let store = DocumentStore::new(temp_dir.path().join("inventory.json"));

        let doc = store.load();
        assert_eq!(doc.quantity(Category::Cold, "וואפו"), 0.0);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let store = DocumentStore::new(temp_dir.path().join("data").join("inventory.json"));

        let doc = InventoryDocument::new()
            .with_quantity(Category::Hot, "פונזו", 3.5)
            .with_general_note("בדיקה")
            .with_language("en");
        store.save(&doc).unwrap();

        assert_eq!(store.load(), doc);
    }

    #[test]
    fn test_load_malformed_json_is_fresh() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("inventory.json");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{{ not json").unwrap();

        let store = DocumentStore::new(path);
        let doc = store.load();
        assert_eq!(doc.quantity(Category::Cold, "וואפו"), 0.0);
    }

    #[test]
    fn test_load_wrong_shape_is_fresh() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("inventory.json");
        std::fs::write(&path, r#"{"date": 7, "categories": "nope"}"#).unwrap();

        let store = DocumentStore::new(path);
        let doc = store.load();
        assert!(doc.general_note.is_empty());
    }

    #[test]
    fn test_load_repairs_partial_document() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("inventory.json");
        // an old save with a missing catalog entry and a negative amount
        std::fs::write(
            &path,
            r#"{
                "date": "2026-08-30",
                "categories": {
                    "hot": { "quantities": { "פונזו": -2.0 } }
                },
                "language": "he"
            }"#,
        )
        .unwrap();

        let store = DocumentStore::new(path);
        let doc = store.load();
        assert_eq!(doc.quantity(Category::Hot, "פונזו"), 0.0);
        assert_eq!(doc.quantity(Category::Cold, "וואפו"), 0.0);
        assert_eq!(doc.date.to_string(), "2026-08-30");
    }
}
