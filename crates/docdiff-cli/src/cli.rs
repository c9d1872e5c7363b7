use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docdiff",
    about = "Structural diff for indentation-delimited documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the edit operations that turn OLD into NEW
    Diff(DiffArgs),
    /// Print the parsed tree of a document, level by level
    Tree(TreeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub old: PathBuf,
    pub new: PathBuf,
    /// Attribute that identifies a node across versions (overrides --config)
    #[arg(long)]
    pub id_attribute: Option<String>,
    /// TOML file with diff settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct TreeArgs {
    pub file: PathBuf,
}
