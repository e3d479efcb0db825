// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "hw_explorer.log";

/// Configure where the engine's [`tracing`] events go, and how verbose they are. The
/// engine itself never installs a subscriber, the host does this once at startup with
/// [`crate::try_initialize_logging_global`] (or per test with
/// [`crate::try_initialize_logging_thread_local`]).
///
/// Any of [`tracing::Level`], [`LevelFilter`], [`DisplayPreference`] or
/// [`WriterConfig`] converts into this type, so callers can pass just the part they care
/// about:
///
/// ```no_run
/// use hw_explorer::{DisplayPreference, try_initialize_logging_global};
///
/// try_initialize_logging_global(DisplayPreference::Stderr).ok();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path of the log file. It is created if needed and never rotated.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl Default for TracingConfig {
    /// Logging is off unless the host asks for it.
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_off() {
        let it = TracingConfig::default();
        assert_eq2!(it.get_level_filter(), LevelFilter::OFF);
        assert_eq2!(it.get_writer_config(), WriterConfig::None);
    }

    #[test]
    fn test_conversions() {
        let it: TracingConfig = tracing::Level::INFO.into();
        assert_eq2!(it.level_filter, LevelFilter::INFO);
        assert_eq2!(
            it.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let it: TracingConfig = DisplayPreference::Stdout.into();
        assert_eq2!(it.level_filter, LevelFilter::DEBUG);
        assert_eq2!(
            it.writer_config,
            WriterConfig::Display(DisplayPreference::Stdout)
        );
    }
}
