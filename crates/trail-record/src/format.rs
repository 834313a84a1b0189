//! Human-readable formatting helpers for diagnostics.

use crate::record::Record;
use crate::value::Value;

/// Pretty-prints a sequence of values as a JSON array.
///
/// Returns `None` if any value is not JSON-representable. Intended for
/// diagnostic output; the persisted mirror format is owned by the store.
#[must_use]
pub fn pretty_json(values: &[Value]) -> Option<String> {
    let json: Vec<serde_json::Value> = values
        .iter()
        .map(Value::to_json)
        .collect::<Option<Vec<_>>>()?;
    serde_json::to_string_pretty(&json).ok()
}

/// Pretty-prints a sequence of records as a JSON array of objects.
///
/// Returns `None` if any record is not JSON-representable.
#[must_use]
pub fn pretty_records(records: &[Record]) -> Option<String> {
    let json: Vec<serde_json::Value> = records
        .iter()
        .map(Record::to_json)
        .collect::<Option<Vec<_>>>()?;
    serde_json::to_string_pretty(&json).ok()
}

/// Summarizes a string as `"<prefix> (+ N characters)"`, keeping at most
/// `up_to` characters of the input.
#[must_use]
pub fn summarize(input: &str, up_to: usize) -> String {
    let prefix: String = input.chars().take(up_to).collect();
    let remaining = input.chars().count() - prefix.chars().count();
    format!("{prefix} (+ {remaining} characters)")
}
