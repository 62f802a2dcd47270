//! Key → text lookup over an exported language section

use std::path::Path;

use crate::error::{Error, Result};
use crate::formats::csf::CsfTable;
use crate::formats::ini::{IniDocument, IniSection};

/// Localized strings for one language
#[derive(Debug, Clone)]
pub struct Translation {
    lang: String,
    entries: IniSection,
}

impl Translation {
    /// Load the `lang` section of an exported INI file
    ///
    /// # Errors
    /// Returns [`Error::SectionNotFound`] if the file has no such section,
    /// or an IO/parse error if it cannot be read.
    pub fn load<P: AsRef<Path>>(path: P, lang: &str) -> Result<Self> {
        let doc = IniDocument::read(path)?;
        Self::from_document(&doc, lang)
    }

    /// Take the `lang` section of a parsed document
    ///
    /// # Errors
    /// Returns [`Error::SectionNotFound`] if the section is missing.
    pub fn from_document(doc: &IniDocument, lang: &str) -> Result<Self> {
        let entries = doc
            .section(lang)
            .ok_or_else(|| Error::SectionNotFound(lang.to_string()))?;
        Ok(Self {
            lang: lang.to_string(),
            entries: entries.clone(),
        })
    }

    /// Build directly from a decoded string table
    #[must_use]
    pub fn from_table(table: &CsfTable, lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            entries: table.to_map(),
        }
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key without fallback
    #[must_use]
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key, falling back to the key itself when it is missing
    #[must_use]
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(text) = self.try_get(key) {
            text
        } else {
            tracing::error!("failed to get key {key} in section {}", self.lang);
            key
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::csf::CsfRecord;

    #[test]
    fn test_lookup_with_fallback() {
        let table = CsfTable::from_records(vec![
            CsfRecord::new("Name:E1", "GI"),
            CsfRecord::new("Name:E1", "美國大兵"),
        ]);
        let translation = Translation::from_table(&table, "zh-TW");

        assert_eq!(translation.lang(), "zh-TW");
        assert_eq!(translation.len(), 1);
        assert_eq!(translation.get("Name:E1"), "美國大兵");
        assert_eq!(translation.get("Name:Missing"), "Name:Missing");
        assert!(translation.try_get("Name:Missing").is_none());
    }

    #[test]
    fn test_missing_section() {
        let doc = IniDocument::parse("[en-US]\nA = 1\n").unwrap();
        assert!(matches!(
            Translation::from_document(&doc, "zh-TW"),
            Err(Error::SectionNotFound(lang)) if lang == "zh-TW"
        ));
        assert_eq!(Translation::from_document(&doc, "en-US").unwrap().get("A"), "1");
    }
}
