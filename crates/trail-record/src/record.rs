//! The insertion-ordered record mapping.

use crate::value::Value;

/// One structured log entry: an ordered mapping from string keys to
/// [`Value`]s.
///
/// Insertion order is preserved and survives into the serialized JSON
/// object. Inserting an existing key replaces the value in place without
/// moving the key. Records are small, so the backing store is a plain
/// vector of pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Inserts a key/value pair.
    ///
    /// If the key already exists its value is replaced in place; otherwise
    /// the pair is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Returns true if every value in the record is JSON-representable.
    #[must_use]
    pub fn is_representable(&self) -> bool {
        self.fields.iter().all(|(_, v)| v.is_representable())
    }

    /// Converts the record into a [`serde_json::Value`] object, preserving
    /// field order.
    ///
    /// Returns `None` if any value is not representable.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        let mut map = serde_json::Map::with_capacity(self.fields.len());
        for (key, value) in &self.fields {
            map.insert(key.clone(), value.to_json()?);
        }
        Some(serde_json::Value::Object(map))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a (String, Value);
    type IntoIter = std::slice::Iter<'a, (String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let mut record = Record::new();
        record.insert("event", "login");
        record.insert("attempts", 3i64);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("event").and_then(Value::as_str), Some("login"));
        assert_eq!(record.get("attempts").and_then(Value::as_i64), Some(3));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut record = Record::new();
        record.insert("a", 1i64);
        record.insert("b", 2i64);
        record.insert("a", 10i64);

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a").and_then(Value::as_i64), Some(10));
        // Replacement must not move the key
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let record: Record = [("z", 1i64), ("a", 2i64), ("m", 3i64)]
            .into_iter()
            .collect();
        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
        assert!(record.is_representable());
        assert_eq!(record.to_json(), Some(serde_json::json!({})));
    }

    #[test]
    fn to_json_preserves_order() {
        let record: Record = [("z", 1i64), ("a", 2i64)].into_iter().collect();
        let json = record.to_json();
        assert!(json.is_some());

        if let Some(serde_json::Value::Object(map)) = json {
            let keys: Vec<&String> = map.keys().collect();
            assert_eq!(keys, vec!["z", "a"]);
        }
    }

    #[test]
    fn to_json_rejects_non_finite() {
        let mut record = Record::new();
        record.insert("ok", "fine");
        record.insert("bad", f64::NAN);

        assert!(!record.is_representable());
        assert_eq!(record.to_json(), None);
    }

    #[test]
    fn nested_records() {
        let mut inner = Record::new();
        inner.insert("id", "a1");

        let mut outer = Record::new();
        outer.insert("user", inner);

        let json = outer.to_json();
        assert_eq!(json, Some(serde_json::json!({"user": {"id": "a1"}})));
    }

    #[test]
    fn contains_key() {
        let mut record = Record::new();
        record.insert("present", Value::Null);
        assert!(record.contains_key("present"));
        assert!(!record.contains_key("absent"));
    }

    #[test]
    fn into_iterator_yields_pairs() {
        let record: Record = [("a", 1i64), ("b", 2i64)].into_iter().collect();
        let pairs: Vec<(String, Value)> = record.into_iter().collect();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0, "a");
        assert_eq!(pairs[1].0, "b");
    }
}
