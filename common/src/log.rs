//! Logging configuration types.
//!
//! A plugin factory never logs on its own behalf: it only *describes* where log output should be
//! delivered ([`LogMethod`]) and how verbose it should be ([`LogLevel`]). The logging subsystem
//! queries this configuration once, during its own initialization, and the factory is free to
//! ignore logging entirely — the defaults are an empty sink list and [`LogLevel::Info`].

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// The minimum severity of log records a plugin wants to see.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    /// The level used when a factory doesn't override
    /// [`log_level`](https://docs.rs/firewisp-plugin/latest/firewisp_plugin/factory/trait.PluginFactory.html#method.log_level).
    pub const DEFAULT: LogLevel = LogLevel::Info;
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };

        f.write_str(name)
    }
}

/// Describes one log sink the plugin wants its output delivered to.
///
/// A factory reports an ordered list of these; the logging subsystem installs one output for
/// each entry, in order.
#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum LogMethod {
    /// Write log records to the standard error stream of the host process.
    Console,
    /// Append log records to the given file.
    File(PathBuf),
}
