use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Narrow key-value seam in front of whatever actually holds the
/// scores. Readers treat missing or unreadable data as "no data";
/// writers may fail, and callers log and carry on with the in-memory
/// state as the source of truth for the session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Plain in-memory store: used by tests, and as the fallback when no
/// data directory can be resolved.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// All keys in one JSON object file, rewritten atomically on every set
/// (tmp file + rename).
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// A missing or corrupt file opens as an empty store.
    pub fn open(path: PathBuf) -> Self {
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();
        FileStore { path, values }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        let data = serde_json::to_vec_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        atomic_rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn atomic_rename(from: &Path, to: &Path) -> Result<()> {
    // Best-effort atomic replace on the same filesystem.
    if to.exists() {
        let _ = fs::remove_file(to);
    }
    fs::rename(from, to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::default();
        assert_eq!(store.get("bestScore"), None);
        store.set("bestScore", "7").unwrap();
        assert_eq!(store.get("bestScore").as_deref(), Some("7"));
        store.set("bestScore", "9").unwrap();
        assert_eq!(store.get("bestScore").as_deref(), Some("9"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let path = std::env::temp_dir().join(format!(
            "serpent-store-test-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let mut store = FileStore::open(path.clone());
        assert_eq!(store.get("topScores"), None);
        store.set("topScores", "[]").unwrap();
        store.set("bestScore", "3").unwrap();
        drop(store);

        let reopened = FileStore::open(path.clone());
        assert_eq!(reopened.get("topScores").as_deref(), Some("[]"));
        assert_eq!(reopened.get("bestScore").as_deref(), Some("3"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_opens_empty() {
        let path = std::env::temp_dir().join(format!(
            "serpent-corrupt-test-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json at all").unwrap();
        let store = FileStore::open(path.clone());
        assert_eq!(store.get("bestScore"), None);
        let _ = fs::remove_file(&path);
    }
}
