mod cmd;
mod logging;
mod prompt;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "vault-indexer",
    version,
    about = "Write a privacy-safe structural index of an Obsidian vault",
    long_about = "Walks a vault, classifies every file by its naming pattern and writes a \
                  Markdown index of the folder tree. Folder names are kept; file titles are \
                  redacted and note contents are never read."
)]
pub struct Cli {
    /// Config file (TOML, or legacy JSON with a .json extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Profile to use from the config file
    #[arg(long)]
    pub profile: Option<String>,

    /// Vault directory to index
    #[arg(short, long)]
    pub vault: Option<PathBuf>,

    /// File to write the index to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the report as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,

    /// Log debug detail to stderr
    #[arg(long)]
    pub verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    cmd::index::run(&cli);
}
