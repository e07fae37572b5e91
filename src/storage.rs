use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{FinwellError, Result};

/// Durable key-value capability backing the ledger and leaderboard stores.
///
/// Each key holds one whole JSON document; writes replace the document
/// (last writer wins). Stores depend only on this trait, so the file
/// backing can be swapped for a server- or memory-backed one.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<data_dir>/<key>.json` file per key.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .map_err(|e| FinwellError::Persistence(format!("reading {}: {e}", path.display())))?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| FinwellError::Persistence(format!("creating {}: {e}", self.dir.display())))?;
        let path = self.key_path(key);
        std::fs::write(&path, format!("{value}\n"))
            .map_err(|e| FinwellError::Persistence(format!("writing {}: {e}", path.display())))?;
        Ok(())
    }
}

/// In-memory backend for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
