use super::Registry;
use crate::error::Result;

pub trait RegistryStore {
    /// Absent storage is an empty registry.
    fn load_registry(&self) -> Result<Registry>;
    fn save_registry(&self, registry: &Registry) -> Result<()>;
    fn load_counter(&self) -> Result<Option<u64>>;
    fn save_counter(&self, next_id: u64) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const GAMES_DIR: &'static str = "games";
    pub const IFRAMES_DIR: &'static str = "iframes";

    pub const COUNTER_FILE: &'static str = "games.counter.json";
    pub const IDENTIFIER_PREFIX: &'static str = "game_";
}
