use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod csf;
mod execute;

use crate::converter::DEFAULT_SECTION;

#[derive(Subcommand)]
pub enum Commands {
    /// CSF string-table operations
    Csf {
        #[command(subcommand)]
        command: CsfCommands,
    },

    /// Convert between CSF, INI and JSON
    Convert {
        #[command(subcommand)]
        command: ConvertCommands,
    },
}

/// CSF string-table commands
#[derive(Subcommand)]
pub enum CsfCommands {
    /// List records in a CSF file
    List {
        /// CSF file to read
        path: PathBuf,

        /// Maximum records to display
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Get the effective value of a key
    Get {
        /// CSF file to read
        path: PathBuf,

        /// Label key (e.g., "Name:E1")
        key: String,
    },

    /// Search for records by text or key
    Search {
        /// CSF file to read
        path: PathBuf,

        /// Text to search for (case-insensitive)
        query: String,

        /// Search keys instead of values
        #[arg(short, long)]
        key: bool,

        /// Maximum results to return
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Add or update a record
    Set {
        /// CSF file to modify
        path: PathBuf,

        /// Label key
        key: String,

        /// New text (use \n for line breaks)
        text: String,

        /// Create the file if it does not exist
        #[arg(long)]
        create: bool,
    },

    /// Show CSF file statistics
    Stats {
        /// CSF files to analyze
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

/// Conversion commands
#[derive(Subcommand)]
pub enum ConvertCommands {
    /// Export a CSF file to INI
    ToIni {
        /// Source CSF file
        source: PathBuf,

        /// Output INI file (defaults to the source name with .ini)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Section label to write records under
        #[arg(short, long, default_value = DEFAULT_SECTION)]
        section: String,

        /// Suppress step output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Export a CSF file to JSON
    ToJson {
        /// Source CSF file
        source: PathBuf,

        /// Output JSON file (defaults to the source name with .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a CSF file from JSON
    FromJson {
        /// Source JSON file
        source: PathBuf,

        /// Output CSF file (defaults to the source name with .csf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every CSF file under a directory to INI
    Batch {
        /// Directory to search
        dir: PathBuf,

        /// Section label to write records under
        #[arg(short, long, default_value = DEFAULT_SECTION)]
        section: String,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },
}
