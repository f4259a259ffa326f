//! Sink for non-fatal configuration problems met during validation.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        })
    }
}

/// Receives every diagnostic the engine records.
///
/// Any `Fn(LogLevel, &str)` closure is a logger.
pub trait Logger {
    fn log(&self, level: LogLevel, message: &str);
}

impl<F> Logger for F
where
    F: Fn(LogLevel, &str),
{
    fn log(&self, level: LogLevel, message: &str) {
        self(level, message)
    }
}

/// Forwards to the `tracing` macros under the `fieldcheck` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "fieldcheck", "{}", message),
            LogLevel::Info => tracing::info!(target: "fieldcheck", "{}", message),
            LogLevel::Warn => tracing::warn!(target: "fieldcheck", "{}", message),
            LogLevel::Error => tracing::error!(target: "fieldcheck", "{}", message),
        }
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}
