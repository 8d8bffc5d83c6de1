// src/cli.rs

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "notas",
    version,
    about = "notas - append timestamped notes to a plain text file",
    long_about = "notas keeps a flat text file of timestamped one-line notes, either in your app-data directory or on a removable medium. The active filename and storage location are persisted settings, changed with `notas config`."
)]
pub struct Cli {
    /// Print what is being done (paths, storage mode, actions)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Appends a note to the active file and shows the file afterwards.
    /// With no MESSAGE, enters interactive mode: the file is shown, then
    /// every line typed is appended in turn until Ctrl+D.
    Add {
        /// The note to append (trimmed, capped at 140 characters)
        message: Option<String>,
    },

    /// Shows the contents of the active file.
    Show,

    /// Deletes the active file after a confirmation prompt.
    Clear,

    /// Shows or changes the persisted settings.
    /// With no options, prints the current filename and storage location.
    Config {
        #[arg(short, long, help = "Name of the file notes are appended to")]
        filename: Option<String>,

        #[arg(short, long, value_enum, help = "Where the file lives")]
        storage: Option<StorageArg>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StorageArg {
    /// App-private data directory
    Internal,
    /// Removable medium (SD card, USB drive)
    External,
}
