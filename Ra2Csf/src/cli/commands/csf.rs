//! CLI commands for CSF string-table operations

use std::path::{Path, PathBuf};

use crate::formats::csf::{CsfTable, read_csf, write_csf};

/// List records in file order
pub fn list(path: &Path, limit: Option<usize>) -> anyhow::Result<()> {
    let table = read_csf(path)?;
    let shown = limit.unwrap_or(table.len());

    for record in table.iter().take(shown) {
        let marker = if record.has_extra_value { "*" } else { " " };
        println!("{marker}{} = {}", record.key, truncate_text(&record.value, 80));
    }

    if shown < table.len() {
        println!("... {} more records", table.len() - shown);
    }

    Ok(())
}

/// Get the effective record for a key
pub fn get(path: &Path, key: &str) -> anyhow::Result<()> {
    let table = read_csf(path)?;

    let Some(record) = table.get(key) else {
        anyhow::bail!("Record not found: {}", key);
    };

    println!("Key: {}", record.key);
    if record.has_extra_value {
        println!("Extra: {}", record.extra_value);
    }
    println!("Text:");
    println!("{}", record.value);

    Ok(())
}

/// Search records by value text or by key
pub fn search(path: &Path, query: &str, search_key: bool, limit: usize) -> anyhow::Result<()> {
    let table = read_csf(path)?;
    let query_lower = query.to_lowercase();

    let matches: Vec<_> = table
        .iter()
        .filter(|r| {
            let haystack = if search_key { &r.key } else { &r.value };
            haystack.to_lowercase().contains(&query_lower)
        })
        .take(limit)
        .collect();

    if matches.is_empty() {
        println!("No records found matching '{query}'");
        return Ok(());
    }

    println!("Found {} records matching '{}':", matches.len(), query);
    println!();
    for record in &matches {
        println!("{}", record.key);
        println!("  {}", truncate_text(&record.value, 100));
    }

    Ok(())
}

/// Add or update a record and rewrite the file
pub fn set(path: &Path, key: &str, text: &str, create: bool) -> anyhow::Result<()> {
    let mut table = if path.exists() {
        read_csf(path)?
    } else if create {
        CsfTable::new()
    } else {
        anyhow::bail!(
            "File does not exist: {}. Use --create to create a new file.",
            path.display()
        );
    };

    let is_new = table.set(key, text);
    write_csf(path, &table)?;

    if is_new {
        println!("Added record: {key}");
    } else {
        println!("Updated record: {key}");
    }

    Ok(())
}

/// Show CSF file statistics
pub fn stats(paths: &[PathBuf]) -> anyhow::Result<()> {
    let mut total_records = 0;
    let mut total_chars = 0;

    for path in paths {
        let table = read_csf(path)?;
        let records = table.len();
        let chars: usize = table.iter().map(|r| r.value.chars().count()).sum();
        let unique = table.to_map().len();
        let extended = table.iter().filter(|r| r.has_extra_value).count();
        let empty = table.iter().filter(|r| r.value.is_empty()).count();

        println!("{}:", path.display());
        println!("  Records: {records}");
        println!("  Unique keys: {unique}");
        if records > unique {
            println!("  Duplicate records: {}", records - unique);
        }
        println!("  With extra value: {extended}");
        println!("  Total characters: {chars}");
        if empty > 0 {
            println!("  Empty values: {empty}");
        }
        if let Some(longest) = table.iter().max_by_key(|r| r.value.chars().count()) {
            println!(
                "  Longest: {} ({} chars)",
                longest.key,
                longest.value.chars().count()
            );
        }
        println!();

        total_records += records;
        total_chars += chars;
    }

    if paths.len() > 1 {
        println!("Total across {} files:", paths.len());
        println!("  Records: {total_records}");
        println!("  Characters: {total_chars}");
    }

    Ok(())
}

/// Truncate text for display
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
