//! Error types for `ra2csf`

use thiserror::Error;

/// Structural problems found while decoding or encoding a CSF string table.
///
/// Decoding is all-or-nothing: when one of these is returned, no partial
/// table has been produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A record has no `" RTS"` / `"WRTS"` marker where its key section ends.
    #[error("unterminated record at offset {offset}: expected \" RTS\" or \"WRTS\"")]
    UnterminatedRecord {
        /// Byte offset of the record's `" LBL"` marker.
        offset: usize,
    },

    /// A length field claims more bytes than its section holds.
    #[error("truncated {field} at offset {offset}: need {needed} bytes, {available} available")]
    Truncated {
        /// Which field was being read (`"key"`, `"value"`, ...).
        field: &'static str,
        /// Byte offset where the field starts.
        offset: usize,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes actually present (up to the end-of-key marker for keys).
        available: usize,
    },

    /// A key contains a byte outside 7-bit ASCII.
    #[error("invalid key encoding at offset {offset}: byte {byte:#04x} is not ASCII")]
    InvalidKeyEncoding {
        /// Byte offset of the offending byte.
        offset: usize,
        /// The offending byte.
        byte: u8,
    },

    /// A value payload does not form valid UTF-16 after un-inversion, or an
    /// extra value is not ASCII.
    #[error("invalid text encoding at offset {offset}: {message}")]
    InvalidTextEncoding {
        /// Byte offset where the payload starts; 0 for encode failures,
        /// whose message names the key.
        offset: usize,
        /// What was wrong with it.
        message: String,
    },

    /// A key cannot be written: it is not ASCII or does not fit the 24-bit
    /// length field.
    #[error("key cannot be encoded as a CSF label: {key:?}")]
    KeyNotAscii {
        /// The key that was rejected.
        key: String,
    },

    /// A value has more UTF-16 code units than the 32-bit length field holds.
    #[error("value for {key:?} is too long: {units} UTF-16 code units")]
    ValueTooLong {
        /// Key of the record holding the value.
        key: String,
        /// Number of UTF-16 code units in the value.
        units: usize,
    },
}

/// The error type for `ra2csf` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== CSF Format Errors ====================
    /// The CSF data is malformed, or a table cannot be encoded.
    #[error("CSF format error: {0}")]
    Format(#[from] FormatError),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// An INI line could not be understood.
    #[error("INI parse error on line {line}: {message}")]
    IniParse {
        /// 1-indexed line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// The requested INI section does not exist.
    #[error("section not found: {0}")]
    SectionNotFound(String),

    // ==================== Translation Errors ====================
    /// A translation or text-generation collaborator failed.
    #[error("translation service error: {0}")]
    Translation(String),

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for `ra2csf` operations.
pub type Result<T> = std::result::Result<T, Error>;
