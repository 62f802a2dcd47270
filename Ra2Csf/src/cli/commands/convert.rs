//! CLI commands for format conversion

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{
    DISK, GEAR, LOOKING_GLASS, TRUCK, print_done, print_step, simple_bar,
};
use crate::converter::{
    self, ConvertPhase, IniExportOptions, find_csf_files, ini_path_for,
};

/// Export one CSF file to INI
pub fn to_ini(
    source: &Path,
    output: Option<&Path>,
    section: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let dest = output.map_or_else(|| ini_path_for(source), Path::to_path_buf);
    let options = IniExportOptions::new().with_section(section);

    converter::convert_csf_to_ini_with_progress(source, dest.as_path(), &options, &|p| {
        if quiet {
            return;
        }
        let emoji = match p.phase {
            ConvertPhase::ReadingSource => LOOKING_GLASS,
            ConvertPhase::Converting => GEAR,
            ConvertPhase::WritingOutput => DISK,
            ConvertPhase::Complete => return,
        };
        print_step(
            p.current,
            p.total,
            emoji,
            p.current_file.as_deref().unwrap_or(p.phase.as_str()),
        );
    })?;

    if !quiet {
        println!("Wrote {}", dest.display());
        print_done(started.elapsed());
    }
    Ok(())
}

/// Export one CSF file to JSON
pub fn to_json(source: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let dest = output.map_or_else(|| source.with_extension("json"), Path::to_path_buf);
    converter::convert_csf_to_json(source, dest.as_path())?;
    println!("Wrote {}", dest.display());
    Ok(())
}

/// Build a CSF file from JSON
pub fn from_json(source: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let dest = output.map_or_else(|| source.with_extension("csf"), Path::to_path_buf);
    converter::convert_json_to_csf(source, dest.as_path())?;
    println!("Wrote {}", dest.display());
    Ok(())
}

/// Export every CSF file under `dir` to INI
pub fn batch(dir: &Path, section: &str, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let files = find_csf_files(dir)?;
    if files.is_empty() {
        anyhow::bail!("No .csf files found under {}", dir.display());
    }

    if !quiet {
        print_step(1, 1, TRUCK, &format!("Converting {} CSF files...", files.len()));
    }

    let options = IniExportOptions::new().with_section(section);
    let bar = (!quiet).then(|| simple_bar(files.len() as u64, "Converting"));

    let result = converter::batch_convert_to_ini(&files, &options, |p| {
        if p.phase == ConvertPhase::Converting {
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }
    });

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    for line in &result.results {
        println!("{line}");
    }
    println!(
        "Converted {} files, {} failed",
        result.success_count, result.fail_count
    );
    if !quiet {
        print_done(started.elapsed());
    }

    if result.fail_count > 0 {
        anyhow::bail!("{} of {} files failed", result.fail_count, files.len());
    }
    Ok(())
}
