use clap::Parser;
use std::path::PathBuf;

/// treeyank – browse, mark, and copy annotated file contents to clipboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to browse (defaults to CWD)
    #[arg(value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Include files ignored by .gitignore
    #[arg(long)]
    pub include_ignored: bool,
}
