//! The fixed date stamp used for the store-managed `date` field.

use chrono::{DateTime, Local};

/// chrono pattern for the `dd.MM.yyyy. HH:mm:ss` stamp.
pub const DATE_FORMAT: &str = "%d.%m.%Y. %H:%M:%S";

/// Formats a timestamp with [`DATE_FORMAT`].
#[must_use]
pub fn format_date(timestamp: DateTime<Local>) -> String {
    timestamp.format(DATE_FORMAT).to_string()
}

/// Returns the current local time formatted with [`DATE_FORMAT`].
#[must_use]
pub fn loggable_date() -> String {
    format_date(Local::now())
}
