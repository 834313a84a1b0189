//! # trail-store
//!
//! Concurrency-safe, opt-in event log store with a mirrored JSON file.
//!
//! Producers append [`Record`]s; records accumulate in memory in arrival
//! order and are mirrored, best-effort, to a pretty-printed JSON array on
//! disk. The in-memory sequence is authoritative; disk failures are logged
//! and never escalate.
//!
//! This crate provides:
//!
//! - [`LogStore`] — The ordered record sequence and its mirror file
//! - [`LogStoreConfig`] — Construction-time configuration (file name,
//!   label prefix, opt-in gate)
//! - Convenience wrappers (`log_error`, `log_event`, ...) for common
//!   record shapes
//!
//! ## Example
//!
//! ```rust,no_run
//! use trail_store::{LogStore, LogStoreConfig, Record};
//!
//! # async fn example() -> trail_store::Result<()> {
//! let store = LogStore::new(
//!     LogStoreConfig::new("ui_events.json").with_enabled(true),
//! )?;
//!
//! let mut record = Record::new();
//! record.insert("event", "login");
//! record.insert("user", "a1");
//! store.append(record);
//!
//! // Appends are fire-and-forget; wait for the mirror when needed.
//! store.flush().await;
//! assert_eq!(store.read_all().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! [`LogStore::new`] spawns the mirror writer and therefore must be called
//! from within a tokio runtime.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod events;
pub mod store;

mod writer;

// Re-export main types
pub use config::LogStoreConfig;
pub use error::{LogError, Result};
pub use store::{DATE_KEY, INDEX_KEY, LogStore, SharedLogStore, shared_store};
pub use trail_record::{Record, ToRecord, Value};
