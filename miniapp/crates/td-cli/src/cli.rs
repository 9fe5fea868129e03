use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;
use td_core::ColorScheme;

#[derive(Parser)]
#[command(name = "td")]
#[command(about = "Command-line client for the dating mini-app API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Directory holding config.toml (defaults to TD_CONFIG_DIR, then ./.td)
    #[arg(long, global = true)]
    pub(crate) config_dir: Option<PathBuf>,

    /// API root, overriding the one configured for the current mode
    #[arg(long, global = true)]
    pub(crate) base_url: Option<String>,

    /// Signed identity payload, as the host would hand it over
    #[arg(long, global = true, env = "TD_TG_INIT_DATA", hide_env_values = true)]
    pub(crate) init_data: Option<String>,

    /// Color scheme the host reports (light or dark)
    #[arg(long, global = true)]
    pub(crate) color_scheme: Option<ColorScheme>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

impl Cli {
    pub fn pretty(&self) -> bool {
        self.pretty
    }
}
