//! Minimal ordered INI document
//!
//! Covers exactly what CSF export needs: named sections of `key = value`
//! lines, rendered in insertion order. Reading accepts the same subset
//! (plus `;` / `#` comment lines and `key=value` without spaces). Values are
//! single-line; decoded CSF text already has its newlines escaped.

use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// Ordered key/value pairs of one section
pub type IniSection = IndexMap<String, String>;

/// An INI file as ordered sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: IndexMap<String, IniSection>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a section by name
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    /// Get a section, creating it empty if missing
    pub fn section_mut(&mut self, name: &str) -> &mut IniSection {
        self.sections.entry(name.to_string()).or_default()
    }

    /// Replace a whole section
    pub fn set_section(&mut self, name: impl Into<String>, entries: IniSection) {
        self.sections.insert(name.into(), entries);
    }

    /// Iterate section names in order
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Look up one value
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section)?.get(key).map(String::as_str)
    }

    /// Render as INI text
    ///
    /// Each section is followed by a blank line, and pairs are written as
    /// `key = value`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, entries) in &self.sections {
            out.push('[');
            out.push_str(name);
            out.push_str("]\n");
            for (key, value) in entries {
                out.push_str(key);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Parse INI text
    ///
    /// Later duplicates of a key within a section replace earlier values.
    ///
    /// # Errors
    /// Returns [`Error::IniParse`] for a line that is neither a section
    /// header, a comment, nor a `key=value` pair inside a section.
    pub fn parse(text: &str) -> Result<Self> {
        let mut doc = Self::new();
        let mut current: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[') {
                let name = name.strip_suffix(']').ok_or_else(|| Error::IniParse {
                    line: index + 1,
                    message: format!("unclosed section header: {line}"),
                })?;
                let name = name.trim().to_string();
                doc.sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(Error::IniParse {
                    line: index + 1,
                    message: format!("expected key = value, found: {line}"),
                });
            };
            let Some(section) = current.as_deref() else {
                return Err(Error::IniParse {
                    line: index + 1,
                    message: format!("key {:?} appears before any section", key.trim()),
                });
            };

            doc.section_mut(section)
                .insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(doc)
    }

    /// Read and parse an INI file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Render and write to disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.render())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render() {
        let mut doc = IniDocument::new();
        let section = doc.section_mut("zh-TW");
        section.insert("GUI:Ok".into(), "確定".into());
        section.insert("TXT_EMPTY".into(), String::new());
        doc.section_mut("Other").insert("A".into(), "1\\n2".into());

        assert_eq!(
            doc.render(),
            "[zh-TW]\nGUI:Ok = 確定\nTXT_EMPTY = \n\n[Other]\nA = 1\\n2\n\n"
        );
    }

    #[test]
    fn test_parse_own_output() {
        let mut doc = IniDocument::new();
        let section = doc.section_mut("zh-TW");
        section.insert("Name:E1".into(), "美國大兵".into());
        section.insert("Tip".into(), "a = b; c".into());

        assert_eq!(IniDocument::parse(&doc.render()).unwrap(), doc);
    }

    #[test]
    fn test_parse_tolerant_forms() {
        let doc = IniDocument::parse("; comment\n[A]\nx=1\n# note\n  y =  2  \n\n[B]\n").unwrap();
        assert_eq!(doc.get("A", "x"), Some("1"));
        assert_eq!(doc.get("A", "y"), Some("2"));
        assert!(doc.section("B").unwrap().is_empty());
        assert_eq!(doc.section_names().collect::<Vec<_>>(), ["A", "B"]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            IniDocument::parse("x = 1"),
            Err(Error::IniParse { line: 1, .. })
        ));
        assert!(matches!(
            IniDocument::parse("[A]\nnot a pair"),
            Err(Error::IniParse { line: 2, .. })
        ));
        assert!(matches!(
            IniDocument::parse("[A"),
            Err(Error::IniParse { line: 1, .. })
        ));
    }
}
