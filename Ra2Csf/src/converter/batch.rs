//! Batch CSF conversion
//!
//! Finds `.csf` files under a directory and converts them to INI in
//! parallel. Each file is decoded independently.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::Result;

use super::csf_ini::{convert_csf_to_ini, ini_path_for};
use super::{ConvertPhase, ConvertProgress, IniExportOptions};

/// Result of a batch conversion
#[derive(Debug, Clone)]
pub struct BatchConvertResult {
    /// Number of successful conversions
    pub success_count: usize,
    /// Number of failed conversions
    pub fail_count: usize,
    /// Messages for each file processed
    pub results: Vec<String>,
}

/// Find all .csf files in a directory recursively
///
/// # Returns
/// A sorted list of paths to .csf files found in the directory tree.
///
/// # Errors
/// Returns [`Error::WalkDirError`] if the directory tree cannot be traversed.
///
/// [`Error::WalkDirError`]: crate::Error::WalkDirError
pub fn find_csf_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut csf_files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csf"))
        {
            csf_files.push(path.to_path_buf());
        }
    }

    csf_files.sort();
    Ok(csf_files)
}

/// Convert CSF files to INI in parallel
///
/// Each output is written next to its source with an `.ini` extension. A
/// failing file is counted and reported; it does not stop the batch.
pub fn batch_convert_to_ini<F>(
    csf_files: &[PathBuf],
    options: &IniExportOptions,
    progress: F,
) -> BatchConvertResult
where
    F: Fn(&ConvertProgress) + Send + Sync,
{
    let success_counter = AtomicUsize::new(0);
    let fail_counter = AtomicUsize::new(0);
    let processed = AtomicUsize::new(0);
    let total = csf_files.len();

    let results: Vec<String> = csf_files
        .par_iter()
        .map(|csf_path| {
            let display_path = csf_path.display().to_string();

            let current = processed.fetch_add(1, Ordering::SeqCst) + 1;
            progress(&ConvertProgress::with_file(
                ConvertPhase::Converting,
                current,
                total,
                display_path.clone(),
            ));

            let ini_path = ini_path_for(csf_path);
            match convert_csf_to_ini(csf_path.as_path(), ini_path.as_path(), options) {
                Ok(()) => {
                    success_counter.fetch_add(1, Ordering::SeqCst);
                    format!("Converted: {display_path}")
                }
                Err(e) => {
                    fail_counter.fetch_add(1, Ordering::SeqCst);
                    tracing::warn!("Failed to convert {display_path}: {e}");
                    format!("Failed {display_path}: {e}")
                }
            }
        })
        .collect();

    progress(&ConvertProgress::new(ConvertPhase::Complete, total, total));

    BatchConvertResult {
        success_count: success_counter.load(Ordering::SeqCst),
        fail_count: fail_counter.load(Ordering::SeqCst),
        results,
    }
}
