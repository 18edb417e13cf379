//! Logging subsystem initialization.
//!
//! The factory only *describes* its logging configuration — see
//! [`logging_methods`](crate::factory::PluginFactory::logging_methods) and
//! [`log_level`](crate::factory::PluginFactory::log_level) — and this module realizes it, by
//! installing a global `tracing` subscriber with one output layer per configured sink.
//!
//! The host binding layer calls [`initialize`] once during startup. Both queries happen at that
//! point only; changing what the factory reports afterwards has no effect.

use crate::module::PluginModule;
use firewisp_common::log::{LogLevel, LogMethod};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Errors reported by [`initialize`].
#[derive(Debug)]
pub enum LoggingError {
    /// A file sink could not be opened.
    Io(io::Error),
    /// A global subscriber was already installed for this process.
    AlreadyInstalled,
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::Io(e) => Display::fmt(&e, f),
            LoggingError::AlreadyInstalled => {
                f.write_str("A global logging subscriber was already installed for this process")
            }
        }
    }
}

impl Error for LoggingError {}

impl From<io::Error> for LoggingError {
    #[inline]
    fn from(e: io::Error) -> Self {
        LoggingError::Io(e)
    }
}

fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
    }
}

/// Initializes process-wide logging from the module's factory configuration.
///
/// With an empty sink list — the default — this is a successful no-op and the plugin stays
/// silent.
///
/// # Errors
///
/// Fails if a configured log file cannot be opened, or if some other subscriber was installed
/// for this process first. The factory's configuration is not consulted again either way.
pub fn initialize(module: &PluginModule) -> Result<(), LoggingError> {
    let mut methods = Vec::new();
    module.factory().logging_methods(&mut methods);

    if methods.is_empty() {
        return Ok(());
    }

    let mut layers: Vec<Box<dyn Layer<_> + Send + Sync>> = Vec::new();

    for method in &methods {
        match method {
            LogMethod::Console => layers.push(fmt::layer().with_writer(io::stderr).boxed()),
            LogMethod::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;

                layers.push(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file))
                        .boxed(),
                );
            }
            // `LogMethod` is non-exhaustive; no other variants exist today.
            _ => {}
        }
    }

    let level = module.factory().log_level();

    tracing_subscriber::registry()
        .with(level_filter(level))
        .with(layers)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::debug!(%level, sinks = methods.len(), "logging initialized");

    Ok(())
}
