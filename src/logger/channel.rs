//! One severity channel and the file stream it owns

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Severity channel, each backed by its own file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Info,
    Warning,
    Error,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Info, Channel::Warning, Channel::Error];

    /// Text placed between the date and `.log` in the file name
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Channel::Info => "",
            Channel::Warning => " Warnings",
            Channel::Error => " Errors",
        }
    }

    /// File name for this channel on `date`, e.g. `2026-01-21 Warnings.log`
    pub fn file_name(&self, date: &str) -> String {
        format!("{}{}.log", date, self.file_suffix())
    }

    /// Name used in operator diagnostics
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Info => "log",
            Channel::Warning => "warning log",
            Channel::Error => "error log",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Info => "info",
            Channel::Warning => "warning",
            Channel::Error => "error",
        };
        f.write_str(name)
    }
}

/// Lifecycle of a channel's stream
///
/// `Failed` and `Closed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Open,
    Failed,
    Closed,
}

enum Stream {
    Open(BufWriter<File>),
    Failed,
    Closed,
}

/// Append-mode file stream bound to one path for its whole lifetime
pub struct ChannelStream {
    channel: Channel,
    path: PathBuf,
    stream: Stream,
}

impl ChannelStream {
    /// Open `path` for appending, creating it if absent
    ///
    /// On failure the stream is returned in the `Failed` state together with
    /// the error, so the caller can report it and carry on.
    pub fn open(channel: Channel, path: PathBuf) -> (Self, Option<io::Error>) {
        match open_append(&path) {
            Ok(file) => (
                Self {
                    channel,
                    path,
                    stream: Stream::Open(BufWriter::new(file)),
                },
                None,
            ),
            Err(e) => (
                Self {
                    channel,
                    path,
                    stream: Stream::Failed,
                },
                Some(e),
            ),
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> ChannelState {
        match self.stream {
            Stream::Open(_) => ChannelState::Open,
            Stream::Failed => ChannelState::Failed,
            Stream::Closed => ChannelState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.stream, Stream::Open(_))
    }

    /// Append `<time> <message>` verbatim
    ///
    /// Returns `Ok(false)` without touching the file when the stream is not open.
    pub fn append(&mut self, time: &str, message: &str) -> io::Result<bool> {
        let Stream::Open(writer) = &mut self.stream else {
            return Ok(false);
        };
        writer.write_all(time.as_bytes())?;
        writer.write_all(b" ")?;
        writer.write_all(message.as_bytes())?;
        Ok(true)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match &mut self.stream {
            Stream::Open(writer) => writer.flush(),
            _ => Ok(()),
        }
    }

    /// Flush and release the file if open; no-op otherwise
    ///
    /// The stream is `Closed` afterwards even when the flush fails.
    pub fn close(&mut self) -> io::Result<()> {
        match std::mem::replace(&mut self.stream, Stream::Closed) {
            Stream::Open(mut writer) => writer.flush(),
            Stream::Failed => {
                self.stream = Stream::Failed;
                Ok(())
            }
            Stream::Closed => Ok(()),
        }
    }
}

impl fmt::Debug for ChannelStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelStream")
            .field("channel", &self.channel)
            .field("path", &self.path)
            .field("state", &self.state())
            .finish()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
