// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry,
                         filter::Targets,
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::{DisplayPreference, TracingConfig, WriterConfig, ok, try_create_file_appender};

/// Every event emitted by the engine has a target under this prefix (the default target
/// is the module path).
pub const ENGINE_TARGET: &str = "hw_explorer";

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the subscriber for the whole process. Logging is **disabled** by default: if
/// the level filter is [`LevelFilter::OFF`] nothing is installed.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let config: TracingConfig = options.into();
    if config.get_level_filter() == LevelFilter::OFF {
        return ok!();
    }

    tracing_subscriber::registry()
        .with(try_create_layers(&config)?)
        .try_init()
        .into_diagnostic()
}

/// Same as [`try_initialize_logging_global`] but only for the current thread, which is
/// what tests want. Drop the returned guard to uninstall.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let config: TracingConfig = options.into();
    if config.get_level_filter() == LevelFilter::OFF {
        return ok!(None);
    }

    let subscriber = tracing_subscriber::registry().with(try_create_layers(&config)?);
    ok!(Some(tracing::subscriber::set_default(subscriber)))
}

/// One layer per writer in `config`, each only passing engine events at or above the
/// configured level. Events from the host's other crates are left to the host's own
/// layers. This does not initialize the tracing system.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(config: &TracingConfig) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let level_filter = config.get_level_filter();
    let writer_config = config.get_writer_config();

    let display_layer = try_create_display_layer::<Registry>(level_filter, &writer_config);
    let file_layer = try_create_file_layer::<Registry>(level_filter, &writer_config)?;

    ok!(display_layer.into_iter().chain(file_layer).collect())
}

/// Only engine events, at `level_filter` or more severe.
#[must_use]
pub fn engine_targets(level_filter: LevelFilter) -> Targets {
    Targets::new().with_target(ENGINE_TARGET, level_filter)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let display_pref = match writer_config {
        WriterConfig::Display(it) | WriterConfig::DisplayAndFile(it, _) => *it,
        WriterConfig::None | WriterConfig::File(_) => return None,
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter = engine_targets(level_filter);
    let layer: Box<DynLayer<S>> = match display_pref {
        DisplayPreference::Stdout => {
            Box::new(fmt_layer.with_writer(std::io::stdout).with_filter(filter))
        }
        DisplayPreference::Stderr => {
            Box::new(fmt_layer.with_writer(std::io::stderr).with_filter(filter))
        }
    };
    Some(layer)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file_path = match writer_config {
        WriterConfig::File(it) | WriterConfig::DisplayAndFile(_, it) => it,
        WriterConfig::None | WriterConfig::Display(_) => return ok!(None),
    };

    let layer: Box<DynLayer<S>> = Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(try_create_file_appender(file_path)?)
            .with_filter(engine_targets(level_filter)),
    );
    ok!(Some(layer))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_display_layer_only_for_display_writers() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                &WriterConfig::Display(DisplayPreference::Stdout),
            );
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, &WriterConfig::None);
        assert!(layer.is_none());
    }

    #[test]
    fn test_file_layer_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("engine.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(LevelFilter::DEBUG, &WriterConfig::File(file_path.clone()))
                .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_layers_for_display_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("engine.log");
        let config = TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                file_path.to_str().unwrap().to_string(),
            ),
            level_filter: LevelFilter::TRACE,
        };

        // Display + file.
        assert_eq2!(try_create_layers(&config).unwrap().len(), 2);
        assert_eq2!(try_create_layers(&TracingConfig::default()).unwrap().len(), 0);
    }

    #[test]
    fn test_engine_targets() {
        use tracing_core::Level;

        let targets = engine_targets(LevelFilter::INFO);
        assert!(targets.would_enable("hw_explorer::curriculum::task_sequencer", &Level::INFO));
        assert!(!targets.would_enable("hw_explorer::animator", &Level::TRACE));
        assert!(!targets.would_enable("some_host_crate", &Level::ERROR));
    }

    #[test]
    fn test_thread_local_off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn test_thread_local_display() {
        let guard =
            try_initialize_logging_thread_local(DisplayPreference::Stderr).unwrap();
        assert!(guard.is_some());
        tracing::debug!(message = "thread local subscriber installed");
    }

    #[serial]
    #[test]
    fn test_global_can_only_be_installed_once() {
        assert!(try_initialize_logging_global(DisplayPreference::Stderr).is_ok());
        assert!(try_initialize_logging_global(DisplayPreference::Stderr).is_err());
    }
}
