//! # ra2csf
//!
//! A pure-Rust library for the Red Alert 2 / Yuri's Revenge `.csf` string-table
//! format.
//!
//! ## Supported Operations
//!
//! - **Decode** - `.csf` bytes into an ordered table of key/value records
//! - **Encode** - tables back into byte-identical `.csf` data
//! - **INI export** - one `[section]` of `key = value` lines per table
//! - **JSON** - lossless CSF ↔ JSON for hand editing
//! - **Translation** - translate-and-rewrite through a pluggable service
//!
//! ## Quick Start
//!
//! ```
//! use ra2csf::formats::csf::{CsfRecord, CsfTable, encode_csf_bytes, parse_csf_bytes};
//!
//! let table = CsfTable::from_records(vec![
//!     CsfRecord::new("CONTROLBAR:ToolTipTest", "Hello\nWorld"),
//! ]);
//! let bytes = encode_csf_bytes(&table)?;
//!
//! let decoded = parse_csf_bytes(&bytes)?;
//! assert_eq!(decoded.records[0].value, "Hello\\nWorld");
//! # Ok::<(), ra2csf::FormatError>(())
//! ```
//!
//! ### Exporting to INI
//!
//! ```no_run
//! use ra2csf::converter::{IniExportOptions, convert_csf_to_ini};
//!
//! convert_csf_to_ini("ra2md.csf", "ra2md.ini", &IniExportOptions::new())?;
//! # Ok::<(), ra2csf::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `ra2csf` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod translation;

// Re-exports for convenience
pub use error::{Error, FormatError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, FormatError, Result};
    pub use crate::formats::csf::{
        CsfRecord, CsfTable, encode_csf_bytes, parse_csf_bytes, read_csf, write_csf,
    };
    pub use crate::formats::ini::IniDocument;

    pub use crate::converter::{
        IniExportOptions, batch_convert_to_ini, convert_csf_to_ini, find_csf_files,
    };
    pub use crate::translation::{
        TextGenerator, Translation, Translator, generate_name, translate_table,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
