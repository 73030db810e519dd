use crate::domain::storage::{RegistryStore, StorageKeys};
use crate::domain::{GameRecord, Registry, RegistryEntry};
use crate::error::{GameError, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub struct RegistryService {
    store: Arc<dyn RegistryStore>,
}

impl RegistryService {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Sets the entry for `identifier`, rewriting the whole registry.
    pub fn upsert(&self, identifier: &str, display_name: &str, file_name: &str) -> Result<()> {
        if identifier.trim().is_empty() {
            return Err(GameError::InvalidInput(
                "game identifier must not be empty".to_string(),
            ));
        }

        let record = GameRecord {
            identifier: identifier.to_string(),
            display_name: display_name.to_string(),
            file_name: file_name.to_string(),
        };

        let mut registry = self.store.load_registry()?;
        let previous = registry.insert(record.identifier.clone(), RegistryEntry::from(&record));
        self.store.save_registry(&registry)?;

        match previous {
            Some(old) => info!(
                "Updated registry entry {}: {} -> {} ({})",
                record.identifier, old.name, record.display_name, record.file_name
            ),
            None => info!(
                "Registered {} as {} ({})",
                record.display_name, record.identifier, record.file_name
            ),
        }
        Ok(())
    }

    /// Fails when the stored registry or counter cannot be read.
    pub fn check(&self) -> Result<()> {
        self.store.load_registry()?;
        self.store.load_counter()?;
        Ok(())
    }

    /// Hands out the next `game_N` identifier and advances the stored counter.
    pub fn allocate_identifier(&self) -> Result<String> {
        let next = match self.store.load_counter()? {
            Some(next) => next,
            None => {
                let seeded = seed_counter(&self.store.load_registry()?);
                debug!("No identifier counter found, starting at {}", seeded);
                seeded
            }
        };

        self.store.save_counter(next + 1)?;
        Ok(format!("{}{}", StorageKeys::IDENTIFIER_PREFIX, next))
    }
}

fn seed_counter(registry: &Registry) -> u64 {
    let highest = registry
        .keys()
        .filter_map(|key| key.strip_prefix(StorageKeys::IDENTIFIER_PREFIX))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    highest.max(registry.len() as u64) + 1
}
