use crate::config::cli::Args;
use crate::domain::storage::StorageKeys;
use crate::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;

pub(crate) mod cli;

/// Resolved locations of everything the tool reads or writes.
#[derive(Debug, Clone)]
pub struct SitePaths {
    pub index: PathBuf,
    pub registry: PathBuf,
    pub counter: PathBuf,
    pub games_dir: PathBuf,
    pub iframes_dir: PathBuf,
}

impl SitePaths {
    pub fn new(root: &Path, index: &Path, registry: &Path) -> Self {
        let registry = root.join(registry);
        let counter = registry.with_file_name(StorageKeys::COUNTER_FILE);

        Self {
            index: root.join(index),
            registry,
            counter,
            games_dir: root.join(StorageKeys::GAMES_DIR),
            iframes_dir: root.join(StorageKeys::IFRAMES_DIR),
        }
    }
}

pub struct Config {
    pub args: Args,
    pub paths: SitePaths,
}

impl Config {
    pub fn new() -> Self {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Self {
        let paths = SitePaths::new(&args.root, &args.index, &args.registry);
        Self { args, paths }
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.paths.games_dir.exists() {
            std::fs::create_dir_all(&self.paths.games_dir)?;
        }
        if !self.paths.iframes_dir.exists() {
            std::fs::create_dir_all(&self.paths.iframes_dir)?;
        }

        debug!("Games and iframes dirs exist");
        Ok(())
    }
}
