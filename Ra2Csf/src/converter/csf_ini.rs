//! CSF to INI conversion

use std::path::{Path, PathBuf};

use super::{ConvertPhase, ConvertProgress, ConvertProgressCallback, IniExportOptions};
use crate::error::Result;
use crate::formats::csf::{self, CsfTable};
use crate::formats::ini::IniDocument;

/// Output path for a CSF file: same base name, `.ini` extension
#[must_use]
pub fn ini_path_for(source: &Path) -> PathBuf {
    source.with_extension("ini")
}

/// Convert .csf file to INI format
///
/// # Errors
/// Returns an error if reading, decoding, or writing fails.
pub fn convert_csf_to_ini<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: &IniExportOptions,
) -> Result<()> {
    convert_csf_to_ini_with_progress(source, dest, options, &|_| {})
}

/// Convert .csf file to INI format with progress callback
///
/// # Errors
/// Returns an error if reading, decoding, or writing fails.
pub fn convert_csf_to_ini_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    options: &IniExportOptions,
    progress: ConvertProgressCallback,
) -> Result<()> {
    tracing::info!(
        "Converting CSF→INI: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    progress(&ConvertProgress::with_file(
        ConvertPhase::ReadingSource,
        1,
        3,
        "Reading CSF file...",
    ));
    let table = csf::read_csf(&source)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::Converting,
        2,
        3,
        format!("Converting {} records to INI...", table.len()),
    ));
    let doc = to_ini_document(&table, &options.section);

    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        3,
        3,
        "Writing INI file...",
    ));
    doc.write(&dest)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Conversion complete");
    Ok(())
}

/// Build an INI document holding the table under a single section
///
/// Duplicate keys collapse to the value of their last record.
#[must_use]
pub fn to_ini_document(table: &CsfTable, section: &str) -> IniDocument {
    let mut doc = IniDocument::new();
    doc.set_section(section, table.to_map());
    doc
}

/// Render a table as INI text under a single section
#[must_use]
pub fn to_ini_string(table: &CsfTable, section: &str) -> String {
    to_ini_document(table, section).render()
}
