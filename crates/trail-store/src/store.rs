//! The concurrency-safe log store.
//!
//! This module provides:
//! - [`LogStore`] — Thread-safe ordered record storage with a mirrored
//!   JSON file
//! - [`SharedLogStore`] — Arc alias for sharing a store across producers
//!
//! Reads share the lock; mutations (`append`, `clear`, `persist`) take it
//! exclusively, so a read observes either the complete state before a
//! mutation or the complete state after it, never an in-between.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{mpsc, oneshot};

use trail_record::{Record, loggable_date};

use crate::config::LogStoreConfig;
use crate::error::{LogError, Result};
use crate::writer::{self, MirrorCommand};

/// Store-managed key holding the record's zero-based position.
pub const INDEX_KEY: &str = "index";

/// Store-managed key holding the commit timestamp.
pub const DATE_KEY: &str = "date";

/// Opt-in event log store mirrored to a JSON file.
///
/// The in-memory sequence is authoritative; the mirror is best-effort.
/// Appends are fire-and-forget: the caller pays for the enqueue, the disk
/// write runs on a background task in mutation order.
///
/// Must be created inside a tokio runtime (the mirror writer is spawned at
/// construction). The writer exits when the store is dropped.
pub struct LogStore {
    config: LogStoreConfig,
    /// Mirror file path. Owned exclusively by this store.
    path: PathBuf,
    /// The ordered record sequence. `entries[i]` carries `index == i`.
    entries: RwLock<Vec<Record>>,
    /// Command queue to the mirror writer. `None` when disabled.
    mirror: Option<mpsc::UnboundedSender<MirrorCommand>>,
}

impl LogStore {
    /// Creates a new store.
    ///
    /// When enabled, resolves the mirror directory (explicit `base_dir`,
    /// else the platform documents directory, else the platform data
    /// directory), creates it, and spawns the mirror writer. A disabled
    /// store does none of that and can never fail.
    ///
    /// # Errors
    ///
    /// Returns an error if no mirror directory can be resolved or created.
    pub fn new(config: LogStoreConfig) -> Result<Self> {
        if !config.enabled {
            let dir = config.base_dir.clone().unwrap_or_default();
            let path = dir.join(&config.file_name);
            return Ok(Self {
                config,
                path,
                entries: RwLock::new(Vec::new()),
                mirror: None,
            });
        }

        let dir = config
            .base_dir
            .clone()
            .or_else(dirs::document_dir)
            .or_else(dirs::data_dir)
            .ok_or(LogError::DataDirUnavailable)?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(&config.file_name);

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(writer::run(
            rx,
            path.clone(),
            config.entry_label_prefix.clone(),
        ));

        Ok(Self {
            config,
            path,
            entries: RwLock::new(Vec::new()),
            mirror: Some(tx),
        })
    }

    /// Appends a record, stamping the store-managed `index` and `date`
    /// fields (caller-supplied values under those keys are overwritten).
    ///
    /// No-op if the store is disabled. Returns after the entry is
    /// committed in memory and a mirror rewrite is enqueued; the disk
    /// write itself runs asynchronously.
    pub fn append(&self, record: Record) {
        if !self.config.enabled {
            return;
        }

        let mut entries = self.entries.write();
        let mut record = record;
        record.insert(INDEX_KEY, entries.len() as i64);
        record.insert(DATE_KEY, loggable_date());
        entries.push(record);
        self.enqueue_write(&entries);
    }

    /// Returns a full, consistent snapshot of the sequence.
    ///
    /// Empty if the store is disabled.
    #[must_use]
    pub fn read_all(&self) -> Vec<Record> {
        if !self.config.enabled {
            return Vec::new();
        }
        self.entries.read().clone()
    }

    /// Empties the sequence and removes the mirror file.
    ///
    /// No-op if the store is disabled. A missing mirror file is not an
    /// error.
    pub fn clear(&self) {
        if !self.config.enabled {
            return;
        }

        let mut entries = self.entries.write();
        entries.clear();
        if let Some(mirror) = &self.mirror {
            let _ = mirror.send(MirrorCommand::Remove);
        }
    }

    /// Schedules a rewrite of the mirror file from the current sequence.
    ///
    /// Appends do this automatically; exposed for callers that want to
    /// force a mirror refresh. No-op if the store is disabled.
    pub fn persist(&self) {
        if !self.config.enabled {
            return;
        }

        let entries = self.entries.write();
        self.enqueue_write(&entries);
    }

    /// Waits until every mirror command enqueued so far has completed.
    ///
    /// Returns immediately if the store is disabled. Persistence is
    /// best-effort, so this is a completion fence, not a success
    /// guarantee.
    pub async fn flush(&self) {
        let Some(mirror) = &self.mirror else {
            return;
        };
        let (ack, done) = oneshot::channel();
        if mirror.send(MirrorCommand::Flush(ack)).is_ok() {
            let _ = done.await;
        }
    }

    /// Returns the number of committed records. Zero if disabled.
    #[must_use]
    pub fn len(&self) -> usize {
        if !self.config.enabled {
            return 0;
        }
        self.entries.read().len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the mirror file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LogStoreConfig {
        &self.config
    }

    /// Enqueues a mirror rewrite. Callers hold the write lock, which
    /// makes queue order match mutation order.
    fn enqueue_write(&self, entries: &[Record]) {
        if let Some(mirror) = &self.mirror {
            let _ = mirror.send(MirrorCommand::Write(entries.to_vec()));
        }
    }
}

/// Shared log store handle.
pub type SharedLogStore = Arc<LogStore>;

/// Creates a new shared log store.
///
/// # Errors
///
/// Returns an error if the mirror directory cannot be resolved or created.
pub fn shared_store(config: LogStoreConfig) -> Result<SharedLogStore> {
    LogStore::new(config).map(Arc::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trail_record::Value;

    fn disabled_store(dir: &Path) -> LogStore {
        LogStore::new(LogStoreConfig::new("disabled.json").with_base_dir(dir))
            .expect("disabled store never fails")
    }

    #[test]
    fn disabled_store_is_a_no_op() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = disabled_store(dir.path());

        let mut record = Record::new();
        record.insert("event", "login");
        store.append(record);
        store.persist();

        assert!(store.read_all().is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());

        store.clear();
        assert!(store.read_all().is_empty());
        // No file, and not even the directory entry for it
        assert!(!store.path().exists());
    }

    #[test]
    fn disabled_store_requires_no_runtime() {
        // Constructing a disabled store outside a tokio runtime must work.
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = disabled_store(dir.path());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn append_stamps_index_and_overwrites_reserved_keys() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = LogStore::new(
            LogStoreConfig::new("log.json")
                .with_base_dir(dir.path())
                .with_enabled(true),
        )
        .expect("create store");

        // Caller-supplied index/date lose to the store-managed values
        let mut record = Record::new();
        record.insert("index", 999i64);
        record.insert("date", "not a date");
        record.insert("event", "login");
        store.append(record);

        let entries = store.read_all();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].get(INDEX_KEY).and_then(Value::as_i64), Some(0));
        let date = entries[0].get(DATE_KEY).and_then(Value::as_str);
        assert!(date.is_some_and(|d| d != "not a date" && !d.is_empty()));
    }

    #[tokio::test]
    async fn len_tracks_appends() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = LogStore::new(
            LogStoreConfig::new("log.json")
                .with_base_dir(dir.path())
                .with_enabled(true),
        )
        .expect("create store");

        assert!(store.is_empty());
        for _ in 0..3 {
            store.append(Record::new());
        }
        assert_eq!(store.len(), 3);

        store.clear();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn shared_store_clones_observe_the_same_log() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = shared_store(
            LogStoreConfig::new("log.json")
                .with_base_dir(dir.path())
                .with_enabled(true),
        )
        .expect("create store");

        let clone = Arc::clone(&store);
        clone.append(Record::new());
        assert_eq!(store.len(), 1);
    }
}
