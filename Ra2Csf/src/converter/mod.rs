//! Format conversion utilities
//!
//! - CSF (binary) → INI (text, one section)
//! - CSF ↔ JSON (lossless, for editing outside the game tools)
//! - Batch CSF → INI over a directory tree

mod batch;
mod csf_ini;
mod csf_json;

pub use batch::{BatchConvertResult, batch_convert_to_ini, find_csf_files};
pub use csf_ini::{
    convert_csf_to_ini, convert_csf_to_ini_with_progress, ini_path_for, to_ini_document,
    to_ini_string,
};
pub use csf_json::{convert_csf_to_json, convert_json_to_csf, from_json, to_json};

/// Section label for Traditional Chinese string tables
pub const DEFAULT_SECTION: &str = "zh-TW";

/// Options for exporting a string table to INI.
///
/// # Example
///
/// ```
/// use ra2csf::converter::IniExportOptions;
///
/// let options = IniExportOptions::new().with_section("en-US");
/// assert_eq!(options.section, "en-US");
/// ```
#[derive(Debug, Clone)]
pub struct IniExportOptions {
    /// Section label all records are written under
    pub section: String,
}

impl IniExportOptions {
    /// Create options with the default section label.
    #[must_use]
    pub fn new() -> Self {
        Self {
            section: DEFAULT_SECTION.to_string(),
        }
    }

    /// Set the section label.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }
}

impl Default for IniExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Progress update for a conversion
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    /// Current operation phase
    pub phase: ConvertPhase,
    /// Current step number (1-indexed)
    pub current: usize,
    /// Total number of steps
    pub total: usize,
    /// Description of the current step or the file being processed
    pub current_file: Option<String>,
}

impl ConvertProgress {
    /// Create a new progress update
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: None,
        }
    }

    /// Create a progress update with a file/step description
    #[must_use]
    pub fn with_file(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        file: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            current_file: Some(file.into()),
        }
    }
}

/// Phase of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    /// Reading and decoding the source file
    ReadingSource,
    /// Transforming the decoded data
    Converting,
    /// Writing the output file
    WritingOutput,
    /// Operation complete
    Complete,
}

impl ConvertPhase {
    /// Get a human-readable description of this phase
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadingSource => "Reading source",
            Self::Converting => "Converting",
            Self::WritingOutput => "Writing output",
            Self::Complete => "Complete",
        }
    }
}

/// Progress callback type for conversion operations.
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);
