//! Construction-time configuration for a log store.

use std::path::PathBuf;

/// Configuration for a [`crate::LogStore`].
///
/// Each logical logging channel gets its own store with its own file name
/// and label prefix. The `enabled` gate makes the whole store opt-in:
/// a disabled store performs no work, no I/O, and no memory growth.
#[derive(Debug, Clone)]
pub struct LogStoreConfig {
    /// Name of the mirror file.
    pub file_name: String,
    /// Prefix used when echoing entries to the diagnostic log.
    pub entry_label_prefix: String,
    /// Whether the store is active. When false, every operation is a no-op.
    pub enabled: bool,
    /// Whether convenience wrappers echo a line through `tracing`.
    pub console: bool,
    /// Directory for the mirror file. `None` means the platform documents
    /// directory, falling back to the platform data directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            file_name: "trail_log.json".to_string(),
            entry_label_prefix: "trail".to_string(),
            enabled: false,
            console: false,
            base_dir: None,
        }
    }
}

impl LogStoreConfig {
    /// Creates a config with the given mirror file name.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Sets the label prefix for diagnostic output.
    #[must_use]
    pub fn with_entry_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.entry_label_prefix = prefix.into();
        self
    }

    /// Sets the enabled gate.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets whether convenience wrappers echo through `tracing`.
    #[must_use]
    pub const fn with_console(mut self, console: bool) -> Self {
        self.console = console;
        self
    }

    /// Sets the mirror directory explicitly.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = LogStoreConfig::default();
        assert_eq!(config.file_name, "trail_log.json");
        assert_eq!(config.entry_label_prefix, "trail");
        assert!(!config.enabled);
        assert!(!config.console);
        assert!(config.base_dir.is_none());
    }

    #[test]
    fn config_builder() {
        let config = LogStoreConfig::new("ui_events.json")
            .with_entry_label_prefix("ui")
            .with_enabled(true)
            .with_console(true)
            .with_base_dir("/tmp/trail");

        assert_eq!(config.file_name, "ui_events.json");
        assert_eq!(config.entry_label_prefix, "ui");
        assert!(config.enabled);
        assert!(config.console);
        assert_eq!(config.base_dir, Some(PathBuf::from("/tmp/trail")));
    }
}
