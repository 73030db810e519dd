mod game;
pub(crate) mod storage;

pub use game::{GameRecord, Registry, RegistryEntry};
