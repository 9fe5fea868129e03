use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum PreferencesCommands {
    /// Save preferences from a JSON draft
    Create {
        /// Path to the preferences draft (camelCase JSON)
        #[arg(long)]
        file: PathBuf,
    },
    /// Fetch saved preferences
    Get {
        /// Whose preferences to fetch (defaults to the signed-in user)
        #[arg(long)]
        user_id: Option<String>,
    },
}
