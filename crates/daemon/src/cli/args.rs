pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "epochlock")]
#[command(about = "Time-lock key release: epoch keys that unlock once their epoch has passed")]
#[command(version)]
pub struct Args {
    /// URL of a running daemon (defaults to localhost on the configured api_port)
    #[arg(long, global = true)]
    pub remote: Option<Url>,

    /// Path to the epochlock config directory (defaults to ~/.epochlock)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: crate::Command,
}
