use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "clyper",
    about = "Save text snippets under short keys and copy them to the clipboard",
    override_usage = "clyper <KEY>\n       clyper <COMMAND> [ARGS]",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Key whose text is copied to the clipboard (default action)
    #[arg(allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Data file to use instead of the one next to the executable
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new key-text pair interactively
    #[command(alias = "a")]
    Add,

    /// List all saved keys
    List,

    /// Delete a saved key
    Delete {
        /// The key to delete
        #[arg(allow_hyphen_values = true)]
        key: Option<String>,
    },
}
