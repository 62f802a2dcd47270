//! File format handlers
//!
//! - `csf` - binary string tables
//! - `ini` - the flat text form string tables are exported to

pub mod csf;
pub mod ini;

pub use csf::{
    CsfRecord, CsfTable, encode_csf_bytes, parse_csf_bytes, read_csf, write_csf,
};
pub use ini::{IniDocument, IniSection};
