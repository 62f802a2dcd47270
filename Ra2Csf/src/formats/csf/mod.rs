//! `.csf` string-table format
//!
//! Binary localization format used by Red Alert 2 / Yuri's Revenge. Each
//! record ("label") is introduced by a `" LBL"` marker, followed by the key
//! section, a `" RTS"` or `"WRTS"` marker, and the value section. Value text
//! is UTF-16LE with every byte inverted.
//!
//! ```text
//! " LBL" | count: u32 | klen: u24 | pad: u8 | key[klen]
//! " RTS" | vlen: u32 | !utf16le[vlen * 2]
//! "WRTS" | vlen: u32 | !utf16le[vlen * 2] [| xlen: u32 | extra[xlen]]
//! ```
//!
//! The bracketed trailing field of a `"WRTS"` record is optional. It is only
//! written when the extra value is non-empty.

mod editor;
mod reader;
pub mod text;
mod writer;

pub use reader::{parse_csf_bytes, read_csf};
pub use writer::{encode_csf_bytes, write_csf};

use serde::{Deserialize, Serialize};

/// Block-start marker preceding every record.
pub const LABEL_MARKER: &[u8; 4] = b" LBL";

/// Terminator for records with a single value.
pub const STRING_MARKER: &[u8; 4] = b" RTS";

/// Terminator for records that carry a trailing extra value.
pub const WIDE_STRING_MARKER: &[u8; 4] = b"WRTS";

/// Size of the fixed part of the key section (count + klen + padding).
pub const KEY_HEADER_SIZE: usize = 8;

/// Largest key length the 24-bit length field can describe.
pub const MAX_KEY_LEN: usize = 0x00FF_FFFF;

/// Count field written for every record.
pub const CANONICAL_STRING_COUNT: u32 = 1;

/// Padding byte written after the key length.
pub const CANONICAL_PADDING: u8 = 0;

/// A single CSF record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsfRecord {
    /// Label name (e.g., "CONTROLBAR:ToolTipTest"), 7-bit ASCII
    pub key: String,
    /// Decoded text, with newlines escaped as `\n`
    pub value: String,
    /// Whether the record was terminated by `"WRTS"`
    #[serde(default)]
    pub has_extra_value: bool,
    /// ASCII content of the trailing field of a `"WRTS"` record, empty when
    /// the record has none
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_value: String,
}

impl CsfRecord {
    /// Create a simple (`" RTS"`) record
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            has_extra_value: false,
            extra_value: String::new(),
        }
    }

    /// Create an extended (`"WRTS"`) record carrying `extra`
    #[must_use]
    pub fn with_extra(
        key: impl Into<String>,
        value: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            has_extra_value: true,
            extra_value: extra.into(),
        }
    }
}

/// An ordered collection of CSF records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsfTable {
    /// Bytes preceding the first `" LBL"` marker, kept verbatim
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<u8>,
    /// Records in on-disk order
    pub records: Vec<CsfRecord>,
}

impl CsfTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a header-less table from records
    #[must_use]
    pub fn from_records(records: Vec<CsfRecord>) -> Self {
        Self {
            header: Vec::new(),
            records,
        }
    }
}
