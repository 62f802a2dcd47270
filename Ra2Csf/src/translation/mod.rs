//! Translation workflow support
//!
//! Remote translation and text-generation services are collaborators behind
//! the [`Translator`] and [`TextGenerator`] traits. This crate ships no
//! network client; callers plug one in. Failures are logged and degrade to
//! an empty string rather than aborting a batch.

mod lookup;

pub use lookup::Translation;

use crate::error::Result;
use crate::formats::csf::CsfTable;
use crate::formats::csf::text::{escape_newlines, unescape_newlines};

/// A service translating text between languages
pub trait Translator: Send + Sync {
    /// Translate `text` from `source_lang` to `target_lang` (BCP-47 codes).
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

impl<F> Translator for F
where
    F: Fn(&str, &str, &str) -> Result<String> + Send + Sync,
{
    fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        self(text, source_lang, target_lang)
    }
}

/// A service generating text from a prompt
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;
}

impl<F> TextGenerator for F
where
    F: Fn(&str) -> Result<String> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String> {
        self(prompt)
    }
}

/// Progress update for a translation pass
#[derive(Debug, Clone)]
pub struct TranslationProgress {
    /// Current record number (1-indexed)
    pub current: usize,
    /// Total number of records
    pub total: usize,
    /// Key of the record being translated
    pub key: String,
}

/// Progress callback type for translation passes.
pub type TranslationProgressCallback<'a> = &'a dyn Fn(&TranslationProgress);

/// Outcome of [`translate_table`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationSummary {
    /// Records whose value was replaced by a translation
    pub translated: usize,
    /// Records left alone because their value was empty
    pub skipped: usize,
    /// Records whose translation failed (value set to empty)
    pub failed: usize,
    /// Keys of the failed records
    pub failed_keys: Vec<String>,
}

/// Translate every record value in place
///
/// Values are handed to the translator with real newlines and the result is
/// escaped again. A failed call is logged and leaves the record with an empty
/// value.
pub fn translate_table(
    table: &mut CsfTable,
    translator: &dyn Translator,
    source_lang: &str,
    target_lang: &str,
    progress: TranslationProgressCallback,
) -> TranslationSummary {
    let mut summary = TranslationSummary::default();
    let total = table.records.len();

    tracing::info!("Translating {total} records from {source_lang} to {target_lang}");

    for (index, record) in table.records.iter_mut().enumerate() {
        progress(&TranslationProgress {
            current: index + 1,
            total,
            key: record.key.clone(),
        });

        if record.value.is_empty() {
            summary.skipped += 1;
            continue;
        }

        let source = unescape_newlines(&record.value);
        match translator.translate(&source, source_lang, target_lang) {
            Ok(translated) => {
                record.value = escape_newlines(&translated).into_owned();
                summary.translated += 1;
            }
            Err(e) => {
                tracing::error!("Error translating {}: {:?}, Error: {e}", record.key, source);
                record.value.clear();
                summary.failed += 1;
                summary.failed_keys.push(record.key.clone());
            }
        }
    }

    summary
}

/// Build the prompt asking for a short configuration name
#[must_use]
pub fn name_prompt(description: &str) -> String {
    format!(
        "Generate a short configuration name from the given configuration description.\n\
         Reply with the configuration name only and nothing else.\n\
         Configuration description: {description}"
    )
}

/// Ask a text generator for a short name describing `description`
///
/// Returns an empty string if generation fails.
pub fn generate_name(generator: &dyn TextGenerator, description: &str) -> String {
    match generator.generate(&name_prompt(description)) {
        Ok(name) => name.trim().to_string(),
        Err(e) => {
            tracing::error!("Error generating name for {description:?}: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::formats::csf::CsfRecord;
    use std::cell::RefCell;

    fn upper(text: &str, _: &str, _: &str) -> Result<String> {
        if text.contains("fail") {
            Err(Error::Translation("quota exceeded".into()))
        } else {
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn test_translate_table() {
        let mut table = CsfTable::from_records(vec![
            CsfRecord::new("A", "hello\\nworld"),
            CsfRecord::new("B", ""),
            CsfRecord::new("C", "please fail"),
        ]);
        let seen = RefCell::new(Vec::new());

        let summary = translate_table(&mut table, &upper, "en", "zh", &|p| {
            seen.borrow_mut().push((p.current, p.total, p.key.clone()));
        });

        assert_eq!(table.records[0].value, "HELLO\\nWORLD");
        assert_eq!(table.records[1].value, "");
        assert_eq!(table.records[2].value, "");
        assert_eq!(
            summary,
            TranslationSummary {
                translated: 1,
                skipped: 1,
                failed: 1,
                failed_keys: vec!["C".to_string()],
            }
        );
        assert_eq!(
            seen.into_inner(),
            vec![(1, 3, "A".into()), (2, 3, "B".into()), (3, 3, "C".into())]
        );
    }

    #[test]
    fn test_translator_receives_real_newlines() {
        let mut table = CsfTable::from_records(vec![CsfRecord::new("A", "a\\nb")]);
        let check = |text: &str, source: &str, target: &str| -> Result<String> {
            assert_eq!(text, "a\nb");
            assert_eq!((source, target), ("en", "zh-TW"));
            Ok("甲\n乙".to_string())
        };

        translate_table(&mut table, &check, "en", "zh-TW", &|_| {});
        assert_eq!(table.records[0].value, "甲\\n乙");
    }

    #[test]
    fn test_generate_name() {
        let echo = |prompt: &str| -> Result<String> {
            assert!(prompt.ends_with("Configuration description: Cost of the unit"));
            Ok("  Cost \n".to_string())
        };
        assert_eq!(generate_name(&echo, "Cost of the unit"), "Cost");

        let broken = |_: &str| -> Result<String> { Err(Error::Translation("offline".into())) };
        assert_eq!(generate_name(&broken, "anything"), "");
    }
}
