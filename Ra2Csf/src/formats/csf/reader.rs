//! `.csf` file reading and parsing
//!
//! Records are walked with an explicit cursor. Length fields are
//! authoritative, so marker bytes that happen to occur inside an inverted
//! payload never split a record.

use super::text::decode_payload;
use super::{
    CsfRecord, CsfTable, KEY_HEADER_SIZE, LABEL_MARKER, STRING_MARKER, WIDE_STRING_MARKER,
};
use crate::error::{FormatError, Result};
use byteorder::{ByteOrder, LittleEndian};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a .csf file from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read.
/// Returns [`Error::Format`] if the contents are not a valid string table.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::Format`]: crate::Error::Format
pub fn read_csf<P: AsRef<Path>>(path: P) -> Result<CsfTable> {
    let mut file = File::open(path.as_ref())?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    drop(file);

    let table = parse_csf_bytes(&buffer)?;
    tracing::debug!(
        "Read {} CSF records from {}",
        table.records.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Parse .csf data from bytes
///
/// Bytes before the first `" LBL"` marker are kept as the table header.
///
/// # Errors
///
/// Returns a [`FormatError`] describing the first malformed record. No
/// partial table is returned.
pub fn parse_csf_bytes(data: &[u8]) -> std::result::Result<CsfTable, FormatError> {
    let Some(first) = find_label(data, 0) else {
        return Ok(CsfTable {
            header: data.to_vec(),
            records: Vec::new(),
        });
    };

    let mut scanner = RecordScanner { data, pos: first };
    let mut records = Vec::new();
    while let Some(record) = scanner.next_record()? {
        records.push(record);
    }

    Ok(CsfTable {
        header: data[..first].to_vec(),
        records,
    })
}

/// Find the next `" LBL"` marker at or after `from`
fn find_label(data: &[u8], from: usize) -> Option<usize> {
    data.get(from..)?
        .windows(LABEL_MARKER.len())
        .position(|window| window == LABEL_MARKER)
        .map(|i| i + from)
}

/// Cursor over the record area of a CSF buffer
struct RecordScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> RecordScanner<'a> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Take exactly `len` bytes or fail with `Truncated`
    fn take(
        &mut self,
        len: usize,
        field: &'static str,
    ) -> std::result::Result<&'a [u8], FormatError> {
        let available = self.remaining();
        if len > available {
            return Err(FormatError::Truncated {
                field,
                offset: self.pos,
                needed: len,
                available,
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    fn read_u32(&mut self, field: &'static str) -> std::result::Result<u32, FormatError> {
        self.take(4, field).map(LittleEndian::read_u32)
    }

    /// Advance to the next record, skipping stray bytes between records
    fn next_record(&mut self) -> std::result::Result<Option<CsfRecord>, FormatError> {
        if self.remaining() == 0 {
            return Ok(None);
        }

        if !self.data[self.pos..].starts_with(LABEL_MARKER) {
            let Some(next) = find_label(self.data, self.pos) else {
                tracing::warn!(
                    "Ignoring {} trailing bytes after last CSF record at offset {}",
                    self.remaining(),
                    self.pos
                );
                self.pos = self.data.len();
                return Ok(None);
            };
            tracing::warn!(
                "Skipping {} unexpected bytes between CSF records at offset {}",
                next - self.pos,
                self.pos
            );
            self.pos = next;
        }

        self.parse_record().map(Some)
    }

    fn parse_record(&mut self) -> std::result::Result<CsfRecord, FormatError> {
        let start = self.pos;
        self.pos += LABEL_MARKER.len();

        // count (u32, uninterpreted) | klen (u24) | padding (u8)
        let key_header = self.take(KEY_HEADER_SIZE, "key header")?;
        let key_len = LittleEndian::read_u24(&key_header[4..7]) as usize;

        let key_offset = self.pos;
        let key_end = self.key_section_end(key_len, start)?;
        let key_bytes = &self.data[key_offset..key_offset + key_len];
        if let Some(i) = key_bytes.iter().position(|b| !b.is_ascii()) {
            return Err(FormatError::InvalidKeyEncoding {
                offset: key_offset + i,
                byte: key_bytes[i],
            });
        }
        let key: String = key_bytes.iter().map(|&b| char::from(b)).collect();
        self.pos = key_end;

        let has_extra_value = match self.data.get(self.pos..self.pos + 4) {
            Some(marker) if marker == STRING_MARKER => false,
            Some(marker) if marker == WIDE_STRING_MARKER => true,
            _ => return Err(FormatError::UnterminatedRecord { offset: start }),
        };
        self.pos += 4;

        let units = self.read_u32("value length")? as usize;
        let payload_offset = self.pos;
        let payload_len = units.checked_mul(2).unwrap_or(usize::MAX);
        let payload = self.take(payload_len, "value")?;
        let value = decode_payload(payload, payload_offset)?;

        let extra_value = if has_extra_value {
            self.take_extra_value()
        } else {
            String::new()
        };

        Ok(CsfRecord {
            key,
            value,
            has_extra_value,
            extra_value,
        })
    }

    /// Offset of the end-of-key terminator for a key declared `key_len` bytes
    /// long, starting at the cursor.
    ///
    /// The key section ends at the first `" RTS"`/`"WRTS"` before the next
    /// `" LBL"`, unless the declared length already lands on a terminator.
    fn key_section_end(
        &self,
        key_len: usize,
        record_offset: usize,
    ) -> std::result::Result<usize, FormatError> {
        let key_start = self.pos;
        let declared_end = key_start + key_len;
        if self
            .data
            .get(declared_end..)
            .is_some_and(starts_with_terminator)
        {
            return Ok(declared_end);
        }

        let segment_end = find_label(self.data, key_start).unwrap_or(self.data.len());
        let Some(section_len) = self.data[key_start..segment_end]
            .windows(4)
            .position(starts_with_terminator)
        else {
            return Err(FormatError::UnterminatedRecord {
                offset: record_offset,
            });
        };

        if key_len > section_len {
            return Err(FormatError::Truncated {
                field: "key",
                offset: key_start,
                needed: key_len,
                available: section_len,
            });
        }

        tracing::warn!(
            "Ignoring {} bytes between key and terminator at offset {}",
            section_len - key_len,
            declared_end
        );
        Ok(key_start + section_len)
    }

    /// Consume the trailing field of a `"WRTS"` record when one is present
    ///
    /// The field is a u32 length plus that many ASCII bytes, ending at the end
    /// of the buffer or at the next `" LBL"`. Anything else is left in place
    /// and the record gets an empty extra value.
    fn take_extra_value(&mut self) -> String {
        let rest = &self.data[self.pos..];
        let Some(len_bytes) = rest.get(..4) else {
            return String::new();
        };
        let extra_len = LittleEndian::read_u32(len_bytes) as usize;
        let Some(end) = extra_len.checked_add(4) else {
            return String::new();
        };
        let Some(extra) = rest.get(4..end) else {
            return String::new();
        };

        let after = &rest[end..];
        if !extra.is_ascii() || !(after.is_empty() || after.starts_with(LABEL_MARKER)) {
            return String::new();
        }

        self.pos += end;
        extra.iter().map(|&b| char::from(b)).collect()
    }
}

fn starts_with_terminator(bytes: &[u8]) -> bool {
    bytes.starts_with(STRING_MARKER) || bytes.starts_with(WIDE_STRING_MARKER)
}
