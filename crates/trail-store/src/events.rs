//! Convenience wrappers for common record shapes.
//!
//! Thin record-building glue over [`LogStore::append`]. Each wrapper can
//! echo a one-line diagnostic through `tracing` when the store's `console`
//! flag is set, tagged with the configured label prefix.

use trail_record::{Record, ToRecord, Value};

use crate::store::LogStore;

impl LogStore {
    /// Logs an error event: `{"error": name, "description": ...}`.
    pub fn log_error(&self, name: &str, error: Option<&dyn std::error::Error>) {
        if !self.config().enabled {
            return;
        }

        let mut record = Record::new();
        record.insert("error", name);
        if let Some(error) = error {
            record.insert("description", error.to_string());
        }

        if self.config().console {
            tracing::warn!(
                target: "trail_store",
                name,
                "[{}] error",
                self.config().entry_label_prefix
            );
        }

        self.append(record);
    }

    /// Logs a labeled event with caller-supplied fields.
    ///
    /// The `event` label wins over a caller-supplied `event` field;
    /// store-managed keys still win over both at commit.
    pub fn log_event(&self, event: &str, fields: Record) {
        if !self.config().enabled {
            return;
        }

        let mut record = Record::new();
        record.insert("event", event);
        let record = trail_record::merged(record, fields);

        if self.config().console {
            tracing::debug!(
                target: "trail_store",
                event,
                "[{}] event",
                self.config().entry_label_prefix
            );
        }

        self.append(record);
    }

    /// Logs a single converted message under the `message` key.
    pub fn log_message(&self, event: &str, message: &impl ToRecord) {
        if !self.config().enabled {
            return;
        }

        let mut record = Record::new();
        record.insert("event", event);
        record.insert("message", message.to_record());
        self.append(record);
    }

    /// Logs named groups of converted messages, skipping empty groups.
    ///
    /// Useful for snapshots like received/current/updated message sets.
    pub fn log_message_groups(&self, event: &str, groups: &[(&str, &[&dyn ToRecord])]) {
        if !self.config().enabled {
            return;
        }

        let mut record = Record::new();
        record.insert("event", event);
        for (name, items) in groups {
            if items.is_empty() {
                continue;
            }
            let converted: Vec<Value> = items
                .iter()
                .map(|item| Value::Map(item.to_record()))
                .collect();
            record.insert(*name, converted);
        }
        self.append(record);
    }

    /// Logs a callback invocation with its payload and response.
    pub fn log_callback(&self, key: &str, payload: Record, response: Vec<Value>) {
        if !self.config().enabled {
            return;
        }

        if self.config().console {
            tracing::debug!(
                target: "trail_store",
                key,
                "[{}] callback",
                self.config().entry_label_prefix
            );
        }

        let mut record = Record::new();
        record.insert("event", "callback");
        record.insert("key", key);
        record.insert("payload", payload);
        record.insert("response", response);
        self.append(record);
    }
}
