use crate::config::SitePaths;
use crate::domain::GameRecord;
use crate::error::{GameError, Result};
use crate::index::{insert_link, sort_links, InsertOutcome, SortOutcome};
use crate::services::registry::RegistryService;
use crate::templates::{game_page, BLANK_GAME_PAGE};
use crate::utils::page_file_name;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct GameService {
    paths: SitePaths,
    registry: RegistryService,
}

impl GameService {
    pub fn new(paths: SitePaths, registry: RegistryService) -> Self {
        Self { paths, registry }
    }

    /// Creates the page and iframe folder for a new game, registers it and
    /// links it from the index.
    pub fn create_game(&self, display_name: &str) -> Result<GameRecord> {
        let file_name = page_file_name(display_name)?;
        let page_path = self.paths.games_dir.join(&file_name);
        if page_path.exists() {
            return Err(GameError::InvalidInput(format!(
                "{} already exists",
                page_path.display()
            )));
        }

        // Index edits are computed before anything touches the disk.
        let document = fs::read_to_string(&self.paths.index)?;
        let (updated, outcome) = insert_link(&document, &file_name, display_name)?;
        self.registry.check()?;

        let identifier = self.registry.allocate_identifier()?;
        let record = GameRecord {
            identifier,
            display_name: display_name.to_string(),
            file_name,
        };

        self.write_page(&page_path, &game_page(&record.display_name, &record.identifier))?;
        self.create_iframe_folder(&record.identifier)?;

        self.registry
            .upsert(&record.identifier, &record.display_name, &record.file_name)?;
        self.write_index(updated, outcome, &record)?;

        info!(
            "Game {} ready, drop its build into {}",
            record.display_name,
            self.paths.iframes_dir.join(&record.identifier).display()
        );
        Ok(record)
    }

    /// Writes the bare placeholder page and iframe folder. The registry and
    /// index are left alone.
    pub fn create_template(&self, file_name: &str, folder_id: &str) -> Result<PathBuf> {
        let page_path = self.paths.games_dir.join(file_name);
        self.write_page(&page_path, BLANK_GAME_PAGE)?;
        self.create_iframe_folder(folder_id)?;
        Ok(page_path)
    }

    /// Sorts the index links in place. Returns whether the file changed.
    pub fn sort_index(&self) -> Result<bool> {
        let document = fs::read_to_string(&self.paths.index)?;
        let (sorted, outcome) = sort_links(&document)?;

        match outcome {
            SortOutcome::NothingToSort => {
                info!("No games found in {}", self.paths.index.display());
                Ok(false)
            }
            SortOutcome::Sorted {
                order,
                unrecognized,
            } => {
                for fragment in &unrecognized {
                    warn!("Kept unrecognized fragment after sorted links: {}", fragment);
                }

                let changed = sorted != document;
                if changed {
                    fs::write(&self.paths.index, &sorted)?;
                }

                info!("Sorted {} games alphabetically", order.len());
                for name in &order {
                    info!("  - {}", name);
                }
                Ok(changed)
            }
        }
    }

    fn write_index(
        &self,
        updated: String,
        outcome: InsertOutcome,
        record: &GameRecord,
    ) -> Result<()> {
        if !outcome.is_inserted() {
            info!(
                "{} already links to {}, left unchanged",
                self.paths.index.display(),
                record.file_name
            );
            return Ok(());
        }

        fs::write(&self.paths.index, updated)?;
        info!(
            "Added link for {} to {}",
            record.display_name,
            self.paths.index.display()
        );
        Ok(())
    }

    fn write_page(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, content)?;
        info!("Created HTML file: {}", path.display());
        Ok(())
    }

    fn create_iframe_folder(&self, folder_id: &str) -> Result<()> {
        let folder = self.paths.iframes_dir.join(folder_id);
        fs::create_dir_all(&folder)?;
        info!("Created folder: {}", folder.display());
        Ok(())
    }
}
