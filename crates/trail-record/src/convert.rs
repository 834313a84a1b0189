//! Conversion of domain objects into records.

use crate::record::Record;

/// Trait for domain objects that can describe themselves as a [`Record`].
///
/// Implement this before passing complex objects to the log store; the
/// store only ever sees records.
pub trait ToRecord {
    /// Yields the record representation of this object.
    fn to_record(&self) -> Record;
}

impl ToRecord for Record {
    fn to_record(&self) -> Record {
        self.clone()
    }
}

/// Merges two records, keeping `base`'s value when a key appears in both.
///
/// `additional` fields are appended after the base fields in insertion
/// order.
#[must_use]
pub fn merged(base: Record, additional: Record) -> Record {
    let mut out = base;
    for (key, value) in additional {
        if !out.contains_key(&key) {
            out.insert(key, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Login {
        user: String,
    }

    impl ToRecord for Login {
        fn to_record(&self) -> Record {
            let mut record = Record::new();
            record.insert("event", "login");
            record.insert("user", self.user.as_str());
            record
        }
    }

    #[test]
    fn domain_object_converts() {
        let login = Login {
            user: "a1".to_string(),
        };
        let record = login.to_record();
        assert_eq!(record.get("event").and_then(Value::as_str), Some("login"));
        assert_eq!(record.get("user").and_then(Value::as_str), Some("a1"));
    }

    #[test]
    fn record_converts_to_itself() {
        let record: Record = [("k", 1i64)].into_iter().collect();
        assert_eq!(record.to_record(), record);
    }

    #[test]
    fn merged_base_wins_on_collision() {
        let base: Record = [("shared", 1i64), ("only_base", 2i64)].into_iter().collect();
        let additional: Record = [("shared", 99i64), ("only_add", 3i64)]
            .into_iter()
            .collect();

        let out = merged(base, additional);
        assert_eq!(out.get("shared").and_then(Value::as_i64), Some(1));
        assert_eq!(out.get("only_base").and_then(Value::as_i64), Some(2));
        assert_eq!(out.get("only_add").and_then(Value::as_i64), Some(3));
    }

    #[test]
    fn merged_preserves_base_order() {
        let base: Record = [("b", 1i64), ("a", 2i64)].into_iter().collect();
        let additional: Record = [("c", 3i64)].into_iter().collect();

        let out = merged(base, additional);
        let keys: Vec<&str> = out.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }
}
