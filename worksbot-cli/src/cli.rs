//! CLI parser and settings loading.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use worksbot_sender::{Settings, DEFAULT_SETTINGS_FILE};

#[derive(Parser)]
#[command(name = "worksbot")]
#[command(about = "LINE WORKS bot CLI: push a message to a recipient list", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Push the message in the input file to every recipient it lists.
    Send {
        /// Message-input JSON file: { "message": "...", "send_to": [ { "id": "..." } ] }
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
        /// Settings file path; WORKSBOT_SETTINGS env or ./worksbot.toml when omitted.
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

/// Resolves the settings path (flag > WORKSBOT_SETTINGS > default) and loads
/// it. Load failures fall back to defaults with a logged warning; the run
/// then proceeds with empty credentials and every recipient is skipped.
pub fn load_settings(path: Option<PathBuf>) -> Settings {
    let path = path.unwrap_or_else(|| {
        std::env::var("WORKSBOT_SETTINGS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_FILE))
    });
    Settings::load_or_default(path)
}
