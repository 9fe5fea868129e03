use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum PhotoCommands {
    /// Upload one or more images
    Upload {
        /// Image files
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Delete a photo
    Delete {
        /// Photo ID
        id: String,
    },
    /// Make a photo the main one
    SetMain {
        /// Photo ID
        id: String,
    },
}
