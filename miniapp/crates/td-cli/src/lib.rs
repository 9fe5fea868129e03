//! td-cli library
//!
//! Argument parsing, command dispatch and file helpers behind the `td` binary.

pub mod cli;
pub(crate) mod commands;
pub mod error;
pub mod input;
pub mod logger;
pub(crate) mod photo_commands;
pub(crate) mod preferences_commands;
pub(crate) mod profile_commands;
mod runner;
pub(crate) mod validate_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use runner::{CommandOutput, load_config, run};
