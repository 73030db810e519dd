use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Site root holding index.html, games/ and iframes/
    #[arg(long, env = "GAMEPAGES_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Index page to edit, relative to the site root
    #[arg(long, default_value = "index.html")]
    pub index: PathBuf,

    /// Game registry file, relative to the site root
    #[arg(long, default_value = "games.json")]
    pub registry: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a game page, register it and link it from the index
    New {
        /// Display name of the game (prompted for when omitted)
        name: Option<String>,
    },
    /// Write the bare placeholder page and iframe folder only
    Template {
        /// File name for the page, `.html` is appended when missing
        name: Option<String>,
        /// Folder created under iframes/
        folder_id: Option<String>,
    },
    /// Sort the game links in the index by display name
    Sort,
}
