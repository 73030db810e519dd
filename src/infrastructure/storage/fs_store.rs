use crate::domain::storage::RegistryStore;
use crate::domain::Registry;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    next_id: u64,
}

#[derive(Clone)]
pub struct FileSystemStore {
    registry_path: PathBuf,
    counter_path: PathBuf,
}

impl FileSystemStore {
    pub fn new(registry_path: impl Into<PathBuf>, counter_path: impl Into<PathBuf>) -> Self {
        Self {
            registry_path: registry_path.into(),
            counter_path: counter_path.into(),
        }
    }

    fn ensure_parent(&self, path: &Path) -> Result<PathBuf> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Writes the whole file next to its destination, then swaps it in.
    fn write_json_file<T: Serialize + ?Sized>(&self, path: &Path, data: &T) -> Result<()> {
        let dir = self.ensure_parent(path)?;
        let content = serde_json::to_string_pretty(data)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| GameError::Io(e.error))?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| GameError::MalformedStorage {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl RegistryStore for FileSystemStore {
    fn load_registry(&self) -> Result<Registry> {
        Ok(self
            .read_json_file(&self.registry_path)?
            .unwrap_or_default())
    }

    fn save_registry(&self, registry: &Registry) -> Result<()> {
        self.write_json_file(&self.registry_path, registry)
    }

    fn load_counter(&self) -> Result<Option<u64>> {
        let counter: Option<Counter> = self.read_json_file(&self.counter_path)?;
        Ok(counter.map(|c| c.next_id))
    }

    fn save_counter(&self, next_id: u64) -> Result<()> {
        self.write_json_file(&self.counter_path, &Counter { next_id })
    }
}
