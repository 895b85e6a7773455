//! Store module.
//! Manages I/O for templates.json: a single JSON object mapping display name to template record.
//! Entries this tool did not write are kept as raw JSON, so unknown fields survive a rewrite.
//! No locking: concurrent runs on the same file are last-writer-wins.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::template::TemplateRecord;

pub const STORE_FILE_NAME: &str = "templates.json";

/// In-memory copy of templates.json, bound to the path it will be written back to.
#[derive(Debug)]
pub struct TemplateStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl TemplateStore {
    /// Loads the store at `path`. A missing file is an empty store; malformed content is an error.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            log::debug!("{} does not exist, starting empty", path.display());
            return Ok(Self {
                path,
                entries: Map::new(),
            });
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let entries: Map<String, Value> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {} as a JSON object", path.display()))?;

        log::debug!("Loaded {} templates from {}", entries.len(), path.display());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Sets `name` to `record`, replacing any previous entry wholesale.
    /// An existing key keeps its position; a new key is appended.
    pub fn upsert(&mut self, name: &str, record: &TemplateRecord) -> Result<()> {
        let value = serde_json::to_value(record)
            .with_context(|| format!("Failed to serialize template \"{}\"", name))?;

        if self.entries.insert(name.to_string(), value).is_some() {
            log::info!("Replaced existing template \"{}\"", name);
        }
        Ok(())
    }

    /// Overwrites the file in place with 2-space indented JSON and a trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut text = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize templates")?;
        text.push('\n');

        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::debug!("Wrote {} templates to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{FontSizes, TemplateRecord};
    use tempfile::TempDir;

    fn cover(max_font: i64) -> TemplateRecord {
        let fonts = FontSizes {
            max_font,
            name_font: 60,
            position_font: 50,
        };
        TemplateRecord::cover("opinion".to_string(), fonts, false)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        let store = TemplateStore::load(path).unwrap();
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_load_rejects_malformed_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let err = TemplateStore::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_rejects_non_object_top_level() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(TemplateStore::load(&path).is_err());
    }

    #[test]
    fn test_upsert_replaces_whole_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        let existing = r#"{"Bio Card": {"maxFont": 10, "legacy": "x"}}"#;
        fs::write(&path, existing).unwrap();

        let mut store = TemplateStore::load(&path).unwrap();
        store.upsert("Bio Card", &cover(72)).unwrap();

        let entry = store.get("Bio Card").unwrap();
        assert_eq!(entry["maxFont"], 72);
        assert!(entry.get("legacy").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_save_keeps_order_and_other_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        let existing = r#"{"Zeta": {"maxFont": 1, "extra": true}, "Alpha": {"maxFont": 2}}"#;
        fs::write(&path, existing).unwrap();

        let mut store = TemplateStore::load(&path).unwrap();
        store.upsert("Zeta", &cover(70)).unwrap();
        store.upsert("Middle", &cover(75)).unwrap();
        store.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let zeta = text.find("\"Zeta\"").unwrap();
        let alpha = text.find("\"Alpha\"").unwrap();
        let middle = text.find("\"Middle\"").unwrap();
        assert!(zeta < alpha && alpha < middle);

        let reloaded = TemplateStore::load(&path).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.get("Alpha").unwrap()["maxFont"], 2);
    }

    #[test]
    fn test_save_format_is_indented_with_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);

        let mut store = TemplateStore::load(&path).unwrap();
        store.upsert("Bio Card", &cover(72)).unwrap();
        store.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let head = "{\n  \"Bio Card\": {\n    \"type\": \"cover\"";
        assert!(text.starts_with(head));
        assert!(text.ends_with("}\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn test_save_keeps_numbers_beyond_64_bits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORE_FILE_NAME);
        let existing = r#"{"Old": {"maxFont": 18446744073709551616, "nameFont": 0}}"#;
        fs::write(&path, existing).unwrap();

        let mut store = TemplateStore::load(&path).unwrap();
        store.upsert("New", &cover(72)).unwrap();
        store.save().unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"maxFont\": 18446744073709551616"));
    }
}
