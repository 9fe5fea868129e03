use crate::{
    photo_commands::PhotoCommands, preferences_commands::PreferencesCommands,
    profile_commands::ProfileCommands, validate_commands::ValidateCommands,
};

use clap::Subcommand;
use td_core::ThemeMode;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign in (probe, refresh, identity exchange) and print the session state
    Session,

    /// Print the signed-in user
    Me,

    /// List discovery candidates
    Discover,

    /// List mutual matches
    Matches,

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Preferences operations
    Preferences {
        #[command(subcommand)]
        action: PreferencesCommands,
    },

    /// Photo operations
    Photo {
        #[command(subcommand)]
        action: PhotoCommands,
    },

    /// Check a form file locally without contacting the server
    Validate {
        #[command(subcommand)]
        action: ValidateCommands,
    },

    /// Resolve the color scheme for a theme mode
    Theme {
        /// Theme mode: system, light or dark
        #[arg(long, default_value = "system")]
        mode: ThemeMode,

        /// Advance the mode one step (system → dark → light → system) first
        #[arg(long)]
        toggle: bool,
    },
}
