use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Check a profile draft against every wizard step
    Profile {
        #[arg(long)]
        file: PathBuf,
    },
    /// Check a preferences draft
    Preferences {
        #[arg(long)]
        file: PathBuf,
    },
}
