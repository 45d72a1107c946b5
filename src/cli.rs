use clap::Parser;
use std::path::PathBuf;

/// Mvn Shepherd - Sequential Maven build runner with local repository pruning
#[derive(Parser, Debug)]
#[command(name = "mvn-shepherd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
