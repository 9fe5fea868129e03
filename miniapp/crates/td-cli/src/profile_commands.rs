use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create the profile from a JSON draft
    Create {
        /// Path to the profile draft (camelCase JSON)
        #[arg(long)]
        file: PathBuf,
    },
    /// Apply a partial profile edit
    Update {
        /// Path to the JSON edit; absent fields are left alone
        #[arg(long)]
        file: PathBuf,
    },
}
