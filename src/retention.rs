//! Dated log file retention
//!
//! Deletes the daily log files whose date is older than the retention window.
//! Age comes from the date in the file name, not from file metadata.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{Duration, NaiveDate};

use crate::logger::Channel;
use crate::time::DATE_FORMAT;

/// Parse the date out of a log file name written by this crate
///
/// Only exact `<date>.log`, `<date> Warnings.log` and `<date> Errors.log`
/// names match.
pub fn log_file_date(name: &str) -> Option<NaiveDate> {
    // YYYY-MM-DD
    let date_part = name.get(..10)?;
    let rest = &name[10..];
    if !Channel::ALL
        .iter()
        .any(|channel| rest == format!("{}.log", channel.file_suffix()))
    {
        return None;
    }
    NaiveDate::parse_from_str(date_part, DATE_FORMAT).ok()
}

/// Delete log files dated more than `retention_days` before `today`
///
/// Returns the number of files deleted.
pub fn prune_expired_logs(logs_dir: &Path, retention_days: u64, today: NaiveDate) -> Result<usize> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let days = i64::try_from(retention_days).unwrap_or(i64::MAX);
    let cutoff = Duration::try_days(days)
        .and_then(|window| today.checked_sub_signed(window))
        .unwrap_or(NaiveDate::MIN);

    let mut deleted_count = 0;

    for entry in fs::read_dir(logs_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(date) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(log_file_date)
        else {
            continue;
        };

        if date < cutoff {
            match fs::remove_file(&path) {
                Ok(()) => {
                    tracing::debug!("Removed expired log file {}", path.display());
                    deleted_count += 1;
                }
                Err(e) => {
                    tracing::warn!("Failed to remove expired log file {}: {}", path.display(), e)
                }
            }
        }
    }

    Ok(deleted_count)
}
