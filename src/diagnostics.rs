//! Operator diagnostics for logger-internal failures
//!
//! Channel failures never propagate to the caller. They are handed to a
//! [`DiagnosticSink`] instead, which defaults to standard error. The
//! [`DiagnosticBuffer`] keeps recent diagnostics in memory so a host
//! application (or a test) can inspect them without parsing stderr.

use std::collections::VecDeque;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::logger::Channel;

/// A non-fatal logger failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The channel's file could not be opened at construction
    ChannelOpenFailure {
        channel: Channel,
        path: PathBuf,
        reason: String,
    },
    /// A write was attempted on a channel that never opened or was closed
    WriteToClosedChannel { channel: Channel },
    /// The underlying file rejected a write on an open channel
    WriteFailure { channel: Channel, reason: String },
    /// Flushing buffered output failed while flushing or closing
    CloseFailure { channel: Channel, reason: String },
}

impl Diagnostic {
    /// The channel this diagnostic concerns
    pub fn channel(&self) -> Channel {
        match self {
            Diagnostic::ChannelOpenFailure { channel, .. }
            | Diagnostic::WriteToClosedChannel { channel }
            | Diagnostic::WriteFailure { channel, .. }
            | Diagnostic::CloseFailure { channel, .. } => *channel,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ChannelOpenFailure { path, reason, .. } => {
                write!(
                    f,
                    "Error: failed to open log file at {}: {}",
                    path.display(),
                    reason
                )
            }
            Diagnostic::WriteToClosedChannel { channel } => {
                write!(f, "Error: {} file is not open.", channel.label())
            }
            Diagnostic::WriteFailure { channel, reason } => {
                write!(f, "Error: failed to write to {} file: {}", channel.label(), reason)
            }
            Diagnostic::CloseFailure { channel, reason } => {
                write!(f, "Error: failed to flush {} file: {}", channel.label(), reason)
            }
        }
    }
}

/// Destination for diagnostics
pub trait DiagnosticSink {
    /// Handle one diagnostic; must not fail or panic
    fn report(&self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Box<T> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic)
    }
}

/// Writes each diagnostic as one line on the process's standard error
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: &Diagnostic) {
        eprintln!("{}", diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` subscriber of the host application
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::WriteToClosedChannel { .. } => tracing::warn!("{}", diagnostic),
            _ => tracing::error!("{}", diagnostic),
        }
    }
}

/// A recorded diagnostic
#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    /// When the diagnostic was reported
    pub timestamp: DateTime<Utc>,
    pub diagnostic: Diagnostic,
}

/// Thread-safe ring buffer of the most recent diagnostics
pub struct DiagnosticBuffer {
    entries: RwLock<VecDeque<DiagnosticEntry>>,
    /// Oldest entries are dropped beyond this
    max_entries: usize,
}

impl DiagnosticBuffer {
    /// Create a buffer keeping at most `max_entries` diagnostics
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_entries)),
            max_entries,
        }
    }

    /// Record a diagnostic, evicting the oldest when full
    pub fn push(&self, diagnostic: Diagnostic) {
        if self.max_entries == 0 {
            return;
        }
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.max_entries {
                entries.pop_front();
            }
            entries.push_back(DiagnosticEntry {
                timestamp: Utc::now(),
                diagnostic,
            });
        }
    }

    /// All recorded entries, oldest first
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .read()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// All recorded diagnostics, oldest first
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries
            .read()
            .map(|e| e.iter().map(|entry| entry.diagnostic.clone()).collect())
            .unwrap_or_default()
    }

    /// Get the number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything recorded so far
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl Default for DiagnosticBuffer {
    fn default() -> Self {
        Self::new(1_000)
    }
}

impl DiagnosticSink for DiagnosticBuffer {
    fn report(&self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}
