use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A generated game as known at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub identifier: String,
    pub display_name: String,
    pub file_name: String,
}

/// Value stored in the registry under a game identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub folder_id: String,
}

impl From<&GameRecord> for RegistryEntry {
    fn from(record: &GameRecord) -> Self {
        Self {
            name: record.display_name.clone(),
            folder_id: record.identifier.clone(),
        }
    }
}

/// Whole registry mapping, identifier -> entry. Keys stay sorted on disk.
pub type Registry = BTreeMap<String, RegistryEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_uses_identifier_as_folder() {
        let record = GameRecord {
            identifier: "game_3".to_string(),
            display_name: "Chess".to_string(),
            file_name: "chess.html".to_string(),
        };

        let entry = RegistryEntry::from(&record);
        assert_eq!(entry.name, "Chess");
        assert_eq!(entry.folder_id, "game_3");
    }
}
