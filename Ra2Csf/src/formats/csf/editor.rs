//! CSF table lookup and editing
//!
//! Keys are not unique on disk. Lookups follow the same policy as
//! [`CsfTable::to_map`]: the last record with a given key wins.

use indexmap::IndexMap;

use super::{CsfRecord, CsfTable};

impl CsfTable {
    /// Get the number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the table has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in file order
    pub fn iter(&self) -> std::slice::Iter<'_, CsfRecord> {
        self.records.iter()
    }

    /// Get the effective record for a key (the last one with that key)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CsfRecord> {
        self.records.iter().rev().find(|r| r.key == key)
    }

    /// Mutable access to the effective record for a key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut CsfRecord> {
        self.records.iter_mut().rev().find(|r| r.key == key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.iter().any(|r| r.key == key)
    }

    /// Set the value for a key
    ///
    /// Updates the effective record if the key exists, otherwise appends a
    /// new simple record.
    ///
    /// # Returns
    /// `true` if a new record was appended, `false` if one was updated
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();

        if let Some(record) = self.get_mut(&key) {
            record.value = value;
            false
        } else {
            self.records.push(CsfRecord::new(key, value));
            true
        }
    }

    /// Remove every record with the given key
    ///
    /// # Returns
    /// Number of records removed
    pub fn remove(&mut self, key: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.key != key);
        before - self.records.len()
    }

    /// Materialize the table as an ordered key → value mapping
    ///
    /// A duplicate key keeps the position of its first occurrence but takes
    /// the value of its last.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, String> {
        let mut map = IndexMap::with_capacity(self.records.len());
        for record in &self.records {
            map.insert(record.key.clone(), record.value.clone());
        }
        map
    }

    /// Find records whose key contains `pattern`
    #[must_use]
    pub fn find_by_key_pattern(&self, pattern: &str) -> Vec<&CsfRecord> {
        self.records
            .iter()
            .filter(|r| r.key.contains(pattern))
            .collect()
    }

    /// Find records whose value contains `text`
    #[must_use]
    pub fn find_by_text(&self, text: &str, case_sensitive: bool) -> Vec<&CsfRecord> {
        if case_sensitive {
            self.records.iter().filter(|r| r.value.contains(text)).collect()
        } else {
            let text_lower = text.to_lowercase();
            self.records
                .iter()
                .filter(|r| r.value.to_lowercase().contains(&text_lower))
                .collect()
        }
    }
}

impl<'a> IntoIterator for &'a CsfTable {
    type Item = &'a CsfRecord;
    type IntoIter = std::slice::Iter<'a, CsfRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsfTable {
        CsfTable::from_records(vec![
            CsfRecord::new("Name:E1", "GI"),
            CsfRecord::new("Name:E2", "Conscript"),
            CsfRecord::new("Name:E1", "Allied Soldier"),
        ])
    }

    #[test]
    fn test_duplicate_key_overwrite() {
        let map = sample().to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["Name:E1"], "Allied Soldier");
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Name:E1", "Name:E2"]);
    }

    #[test]
    fn test_get_returns_last() {
        let table = sample();
        assert_eq!(table.get("Name:E1").unwrap().value, "Allied Soldier");
        assert!(table.get("Name:E3").is_none());
        assert!(table.contains_key("Name:E2"));
    }

    #[test]
    fn test_set_updates_or_appends() {
        let mut table = sample();
        assert!(!table.set("Name:E1", "美國大兵"));
        assert_eq!(table.records[0].value, "GI");
        assert_eq!(table.records[2].value, "美國大兵");

        assert!(table.set("Name:DOG", "Attack Dog"));
        assert_eq!(table.len(), 4);
        assert!(!table.records[3].has_extra_value);
    }

    #[test]
    fn test_remove_all_duplicates() {
        let mut table = sample();
        assert_eq!(table.remove("Name:E1"), 2);
        assert_eq!(table.len(), 1);
        assert_eq!(table.remove("Name:E1"), 0);
    }

    #[test]
    fn test_find() {
        let table = sample();
        assert_eq!(table.find_by_key_pattern("E2").len(), 1);
        assert_eq!(table.find_by_text("soldier", false).len(), 1);
        assert!(table.find_by_text("soldier", true).is_empty());
        assert_eq!((&table).into_iter().count(), 3);
    }
}
