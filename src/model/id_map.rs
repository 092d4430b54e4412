use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// An opaque player or game identifier. Exports use integers, but strings
/// are accepted as well.
///
/// Numbers outside `i64` (large unsigned values, floats) land in `Number` and
/// only match ids written the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// One `{ "id": ..., "name": ... }` entry from the `players` or `games` list
#[derive(Debug, Clone, Deserialize)]
pub struct IdRecord {
    pub id: RecordId,
    pub name: String,
}

/// Maps ids to display names, iterating in the order ids were first seen.
///
/// Inserting an id that is already present replaces its name in place.
#[derive(Debug, Clone, Default)]
pub struct IdMap {
    entries: Vec<(RecordId, String)>,
    index: HashMap<RecordId, usize>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from id records. Later duplicates win.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = IdRecord>,
    {
        records
            .into_iter()
            .map(|record| (record.id, record.name))
            .collect()
    }

    pub fn insert(&mut self, id: RecordId, name: String) {
        match self.index.get(&id) {
            Some(&pos) => self.entries[pos].1 = name,
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
            }
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&str> {
        self.index.get(id).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecordId, &str)> {
        self.entries.iter().map(|(id, name)| (id, name.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, name)| name.as_str())
    }
}

impl FromIterator<(RecordId, String)> for IdMap {
    fn from_iter<T: IntoIterator<Item = (RecordId, String)>>(iter: T) -> Self {
        let mut map = IdMap::new();
        for (id, name) in iter {
            map.insert(id, name);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, name: &str) -> IdRecord {
        IdRecord {
            id: RecordId::Int(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_from_records() {
        let map = IdMap::from_records(vec![record(1, "Alice"), record(2, "Bob")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&RecordId::Int(1)), Some("Alice"));
        assert_eq!(map.get(&RecordId::Int(2)), Some("Bob"));
        assert_eq!(map.get(&RecordId::Int(3)), None);
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let map = IdMap::from_records(vec![
            record(1, "Alice"),
            record(2, "Bob"),
            record(1, "Alicia"),
        ]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&RecordId::Int(1)), Some("Alicia"));
        // Position of the first occurrence is kept
        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["Alicia", "Bob"]);
    }

    #[test]
    fn test_int_and_text_ids_are_distinct() {
        let mut map = IdMap::new();
        map.insert(RecordId::Int(7), "Seven".to_string());
        map.insert(RecordId::from("7"), "Text seven".to_string());
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&RecordId::Int(7)), Some("Seven"));
        assert_eq!(map.get(&RecordId::from("7")), Some("Text seven"));
    }

    #[test]
    fn test_record_id_deserialize() {
        let id: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(id, RecordId::Int(42));
        let id: RecordId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(id, RecordId::from("abc"));
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn test_record_id_outside_i64() {
        let big: RecordId = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(big, RecordId::Number(_)));
        assert_eq!(big.to_string(), "18446744073709551615");

        let float: RecordId = serde_json::from_str("1.5").unwrap();
        assert!(matches!(float, RecordId::Number(_)));
        assert_eq!(float.to_string(), "1.5");

        let mut map = IdMap::new();
        map.insert(big.clone(), "Big".to_string());
        map.insert(float.clone(), "Half".to_string());
        assert_eq!(map.get(&big), Some("Big"));
        assert_eq!(map.get(&float), Some("Half"));
    }
}
