//! # trail-record
//!
//! Record and value model for the Trail event logger.
//!
//! This crate provides:
//!
//! - [`Value`] — Tagged union over the JSON-representable shapes
//! - [`Record`] — Insertion-ordered mapping from string keys to values
//! - [`ToRecord`] — Conversion trait for domain objects
//! - [`pretty_json`] / [`pretty_records`] — Human-readable JSON formatting
//! - Date helpers producing the fixed `dd.MM.yyyy. HH:mm:ss` stamp
//!
//! ## Example
//!
//! ```rust
//! use trail_record::{Record, Value};
//!
//! let mut record = Record::new();
//! record.insert("event", "login");
//! record.insert("attempts", 3i64);
//!
//! // Every finite tree is representable as JSON
//! assert!(record.to_json().is_some());
//!
//! // Non-finite numbers are not
//! record.insert("ratio", f64::NAN);
//! assert!(record.to_json().is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod convert;
pub mod date;
pub mod format;
pub mod record;
pub mod value;

// Re-export main types
pub use convert::{ToRecord, merged};
pub use date::{DATE_FORMAT, format_date, loggable_date};
pub use format::{pretty_json, pretty_records, summarize};
pub use record::Record;
pub use value::Value;
