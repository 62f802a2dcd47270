//! `.csf` file writing

use super::text::encode_payload;
use super::{
    CANONICAL_PADDING, CANONICAL_STRING_COUNT, CsfRecord, CsfTable, KEY_HEADER_SIZE,
    LABEL_MARKER, MAX_KEY_LEN, STRING_MARKER, WIDE_STRING_MARKER,
};
use crate::error::{FormatError, Result};
use byteorder::{ByteOrder, LittleEndian};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a .csf file to disk
///
/// The whole table is encoded before the file is created, so an encoding
/// error leaves any existing file untouched.
///
/// # Errors
/// Returns an error if encoding or file writing fails.
pub fn write_csf<P: AsRef<Path>>(path: P, table: &CsfTable) -> Result<()> {
    let bytes = encode_csf_bytes(table)?;

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;

    tracing::debug!(
        "Wrote {} CSF records ({} bytes) to {}",
        table.records.len(),
        bytes.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Encode a table into .csf bytes
///
/// The header prefix is emitted verbatim, followed by each record in order.
///
/// # Errors
/// Returns [`FormatError::KeyNotAscii`] for keys that are not ASCII or too
/// long for the 24-bit length field, and [`FormatError::ValueTooLong`] for
/// values exceeding the 32-bit length field.
pub fn encode_csf_bytes(table: &CsfTable) -> std::result::Result<Vec<u8>, FormatError> {
    let mut out = Vec::with_capacity(table.header.len() + estimate_size(&table.records));
    out.extend_from_slice(&table.header);

    for record in &table.records {
        encode_record(&mut out, record)?;
    }

    Ok(out)
}

fn estimate_size(records: &[CsfRecord]) -> usize {
    records
        .iter()
        .map(|r| 24 + r.key.len() + r.value.len() * 2 + r.extra_value.len())
        .sum()
}

fn encode_record(out: &mut Vec<u8>, record: &CsfRecord) -> std::result::Result<(), FormatError> {
    let key = record.key.as_bytes();
    if !record.key.is_ascii() || key.len() > MAX_KEY_LEN {
        return Err(FormatError::KeyNotAscii {
            key: record.key.clone(),
        });
    }

    if record.has_extra_value && !record.extra_value.is_ascii() {
        return Err(FormatError::InvalidTextEncoding {
            offset: 0,
            message: format!("extra value of {:?} is not ASCII", record.key),
        });
    }

    let (units, payload) = encode_payload(&record.value);
    let units = u32::try_from(units).map_err(|_| FormatError::ValueTooLong {
        key: record.key.clone(),
        units,
    })?;

    out.extend_from_slice(LABEL_MARKER);

    let mut key_header = [0u8; KEY_HEADER_SIZE];
    LittleEndian::write_u32(&mut key_header[0..4], CANONICAL_STRING_COUNT);
    LittleEndian::write_u24(&mut key_header[4..7], key.len() as u32);
    key_header[7] = CANONICAL_PADDING;
    out.extend_from_slice(&key_header);
    out.extend_from_slice(key);

    if record.has_extra_value {
        out.extend_from_slice(WIDE_STRING_MARKER);
    } else {
        out.extend_from_slice(STRING_MARKER);
    }

    push_u32(out, units);
    out.extend_from_slice(&payload);

    // an empty extra value is written as a bare "WRTS" record
    if record.has_extra_value && !record.extra_value.is_empty() {
        let extra = record.extra_value.as_bytes();
        let extra_len = u32::try_from(extra.len()).map_err(|_| FormatError::ValueTooLong {
            key: record.key.clone(),
            units: extra.len(),
        })?;
        push_u32(out, extra_len);
        out.extend_from_slice(extra);
    }

    Ok(())
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    let mut buf = [0u8; 4];
    LittleEndian::write_u32(&mut buf, value);
    out.extend_from_slice(&buf);
}
