use crate::config::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::game_service::GameService;
use crate::services::registry::RegistryService;
use crate::utils::{value_or_prompt, with_html_extension};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod error;
mod index;
mod infrastructure;
mod services;
mod templates;
mod utils;

fn main() {
    let config = Config::new();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    config.ensure_directories()?;

    let store = FileSystemStore::new(&config.paths.registry, &config.paths.counter);
    let service = GameService::new(
        config.paths.clone(),
        RegistryService::new(Arc::new(store)),
    );

    match &config.args.command {
        Command::New { name } => {
            let name = value_or_prompt(name.clone(), "Enter the game name: ")?;
            let record = service.create_game(&name)?;
            info!(
                "Created {} ({}) as {}",
                record.display_name, record.file_name, record.identifier
            );
        }
        Command::Template { name, folder_id } => {
            let name = value_or_prompt(
                name.clone(),
                "Enter the name for the HTML file (without .html): ",
            )?;
            let folder_id = value_or_prompt(
                folder_id.clone(),
                "Enter the folder ID for the iframes directory: ",
            )?;
            service.create_template(&with_html_extension(&name), &folder_id)?;
        }
        Command::Sort => {
            service.sort_index()?;
        }
    }

    Ok(())
}
