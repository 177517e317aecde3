//! Daylog - per-severity, date-named append-only log files
//!
//! A [`FileLogger`] writes `HH:MM:SS <message>` lines into
//! `<YYYY-MM-DD>.log`, `<YYYY-MM-DD> Warnings.log` and
//! `<YYYY-MM-DD> Errors.log` inside a `log` directory next to (or under) the
//! working directory.

pub mod color;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logger;
pub mod retention;
pub mod time;

pub use config::{LogPlacement, LoggerConfig};
pub use diagnostics::{Diagnostic, DiagnosticBuffer, DiagnosticSink, StderrSink, TracingSink};
pub use error::LoggerError;
pub use logger::{Channel, ChannelState, FileLogger, FileLoggerBuilder};
pub use time::{FixedTime, LocalTime, TimeProvider};
