//! Per-severity, date-named file logger
//!
//! A [`FileLogger`] resolves its log directory once, creates it if needed and
//! opens one append-mode file per [`Channel`], all named after the date at
//! construction time. Each write prefixes the message with the current time.
//!
//! Only directory creation can fail construction. A channel whose file cannot
//! be opened is reported to the [`DiagnosticSink`] and stays unusable while
//! the other channels keep working.

mod channel;

pub use channel::{Channel, ChannelState, ChannelStream};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{LogPlacement, LoggerConfig};
use crate::diagnostics::{Diagnostic, DiagnosticSink, StderrSink};
use crate::error::{LoggerError, Result};
use crate::retention::prune_expired_logs;
use crate::time::{LocalTime, TimeProvider};

/// Logger writing to `<dir>/<date>.log`, `<dir>/<date> Warnings.log` and
/// `<dir>/<date> Errors.log`
///
/// Not synchronized: the logger is `Send`, so share it across threads
/// behind a lock such as `Mutex<FileLogger>`.
pub struct FileLogger {
    directory: PathBuf,
    /// Fixed at construction; a run crossing midnight keeps its files
    date: String,
    info: ChannelStream,
    warning: ChannelStream,
    error: ChannelStream,
    time: Box<dyn TimeProvider + Send>,
    diagnostics: Box<dyn DiagnosticSink + Send>,
}

impl FileLogger {
    /// Create a logger rooted at the current working directory
    ///
    /// `is_subdirectory` selects `cwd/log`; otherwise the directory is
    /// `parent(cwd)/log`.
    pub fn new(is_subdirectory: bool) -> Result<Self> {
        Self::builder()
            .placement(LogPlacement::from_is_subdirectory(is_subdirectory))
            .build()
    }

    /// Create a logger rooted at the current working directory from `config`
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        Self::builder().config(config.clone()).build()
    }

    /// Start configuring a logger with non-default base, clock or sink
    pub fn builder() -> FileLoggerBuilder {
        FileLoggerBuilder::default()
    }

    /// Absolute path of the log directory
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Date used in every file name of this logger
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Path of the file backing `channel`
    pub fn path(&self, channel: Channel) -> &Path {
        self.stream(channel).path()
    }

    /// Lifecycle state of `channel`
    pub fn state(&self, channel: Channel) -> ChannelState {
        self.stream(channel).state()
    }

    /// Whether writes to `channel` reach its file
    pub fn is_open(&self, channel: Channel) -> bool {
        self.stream(channel).is_open()
    }

    /// Append `<HH:MM:SS> <message>` to the info log
    pub fn write(&mut self, message: &str) {
        self.write_to(Channel::Info, message);
    }

    /// Append `<HH:MM:SS> <message>` and a newline to the info log
    pub fn write_line(&mut self, message: &str) {
        self.write_line_to(Channel::Info, message);
    }

    /// Append `<HH:MM:SS> <message>` to the warnings log
    pub fn write_warning(&mut self, message: &str) {
        self.write_to(Channel::Warning, message);
    }

    /// Append `<HH:MM:SS> <message>` and a newline to the warnings log
    pub fn write_warning_line(&mut self, message: &str) {
        self.write_line_to(Channel::Warning, message);
    }

    /// Append `<HH:MM:SS> <message>` to the errors log
    pub fn write_error(&mut self, message: &str) {
        self.write_to(Channel::Error, message);
    }

    /// Append `<HH:MM:SS> <message>` and a newline to the errors log
    pub fn write_error_line(&mut self, message: &str) {
        self.write_line_to(Channel::Error, message);
    }

    /// Append `<HH:MM:SS> <message>` to `channel`, followed by a newline
    pub fn write_line_to(&mut self, channel: Channel, message: &str) {
        self.write_to(channel, &format!("{}\n", message));
    }

    /// Append `<HH:MM:SS> <message>` to `channel`
    ///
    /// Never fails. A channel that is not open produces a diagnostic and the
    /// message is dropped. Output is buffered, so a write the file rejects is
    /// usually reported later, as a `CloseFailure` from `flush`, `close` or
    /// drop; only a write too large for the buffer fails here.
    pub fn write_to(&mut self, channel: Channel, message: &str) {
        if !self.is_open(channel) {
            self.diagnostics
                .report(&Diagnostic::WriteToClosedChannel { channel });
            return;
        }

        let time = self.time.current_time();
        if let Err(e) = self.stream_mut(channel).append(&time, message) {
            self.diagnostics.report(&Diagnostic::WriteFailure {
                channel,
                reason: e.to_string(),
            });
        }
    }

    /// Push buffered output of every open channel to disk
    pub fn flush(&mut self) {
        for channel in Channel::ALL {
            if let Err(e) = self.stream_mut(channel).flush() {
                self.diagnostics.report(&Diagnostic::CloseFailure {
                    channel,
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Close every open channel
    ///
    /// Safe to call repeatedly; later writes report a closed channel.
    /// Dropping the logger does the same.
    pub fn close(&mut self) {
        for channel in Channel::ALL {
            let was_open = self.is_open(channel);
            if let Err(e) = self.stream_mut(channel).close() {
                self.diagnostics.report(&Diagnostic::CloseFailure {
                    channel,
                    reason: e.to_string(),
                });
            }
            if was_open {
                tracing::debug!("Closed {} channel {}", channel, self.path(channel).display());
            }
        }
    }

    fn stream(&self, channel: Channel) -> &ChannelStream {
        match channel {
            Channel::Info => &self.info,
            Channel::Warning => &self.warning,
            Channel::Error => &self.error,
        }
    }

    fn stream_mut(&mut self, channel: Channel) -> &mut ChannelStream {
        match channel {
            Channel::Info => &mut self.info,
            Channel::Warning => &mut self.warning,
            Channel::Error => &mut self.error,
        }
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("directory", &self.directory)
            .field("date", &self.date)
            .field("info", &self.info)
            .field("warning", &self.warning)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FileLogger`]
///
/// Defaults: parent-sibling `log` directory of the current working directory,
/// local wall clock, diagnostics on standard error.
#[derive(Default)]
pub struct FileLoggerBuilder {
    config: LoggerConfig,
    base_dir: Option<PathBuf>,
    time: Option<Box<dyn TimeProvider + Send>>,
    diagnostics: Option<Box<dyn DiagnosticSink + Send>>,
}

impl FileLoggerBuilder {
    /// Replace all settings with `config`
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Choose between `base/log` and `parent(base)/log`
    pub fn placement(mut self, placement: LogPlacement) -> Self {
        self.config.placement = placement;
        self
    }

    /// Resolve the log directory against `base` instead of the working directory
    ///
    /// A relative `base` is taken relative to the working directory.
    pub fn base_dir(mut self, base: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base.into());
        self
    }

    /// Use `time` instead of the local wall clock
    pub fn time_provider(mut self, time: impl TimeProvider + Send + 'static) -> Self {
        self.time = Some(Box::new(time));
        self
    }

    /// Send diagnostics to `sink` instead of standard error
    pub fn diagnostics(mut self, sink: impl DiagnosticSink + Send + 'static) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    /// Create the directory and open the three channels
    pub fn build(self) -> Result<FileLogger> {
        let base = match self.base_dir {
            Some(base) if base.is_absolute() => base,
            Some(base) => current_dir()?.join(base),
            None => current_dir()?,
        };
        let directory = self.config.log_dir(&base);
        let time = self.time.unwrap_or_else(|| Box::new(LocalTime));
        let diagnostics = self.diagnostics.unwrap_or_else(|| Box::new(StderrSink));

        fs::create_dir_all(&directory).map_err(|source| LoggerError::DirectoryCreation {
            path: directory.clone(),
            source,
        })?;
        tracing::debug!("Log directory: {}", directory.display());

        if let Some(days) = self.config.retention_days {
            match prune_expired_logs(&directory, days, time.today()) {
                Ok(count) if count > 0 => tracing::info!("Cleaned up {} old log files", count),
                Ok(_) => {}
                Err(e) => tracing::warn!("Failed to clean up old log files: {}", e),
            }
        }

        let date = time.current_date();
        let open = |channel: Channel| {
            let path = directory.join(channel.file_name(&date));
            let (stream, err) = ChannelStream::open(channel, path);
            match err {
                Some(e) => diagnostics.report(&Diagnostic::ChannelOpenFailure {
                    channel,
                    path: stream.path().to_path_buf(),
                    reason: e.to_string(),
                }),
                None => tracing::debug!("Opened {} channel {}", channel, stream.path().display()),
            }
            stream
        };

        let info = open(Channel::Info);
        let warning = open(Channel::Warning);
        let error = open(Channel::Error);

        Ok(FileLogger {
            directory,
            date,
            info,
            warning,
            error,
            time,
            diagnostics,
        })
    }
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(LoggerError::CurrentDir)
}
