use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pm-bcf")]
#[command(about = "Export issues as BCF packages")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON dataset holding projects and issues
    #[arg(long, global = true, default_value = "dataset.json")]
    pub data: PathBuf,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
