//! Age-based pruning of the local Maven repository.
//!
//! The local repository lays out artifacts as `<group>/<artifact>/…`; pruning
//! walks one level of group directories and removes every aged subdirectory
//! below them. Best-effort housekeeping: listing and deletion errors are
//! logged and skipped, never escalated.

use chrono::{DateTime, Local, NaiveDate};
use humansize::{format_size, BINARY};
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Remove every second-level subdirectory of `root` whose last-modified
/// calendar date is at least `max_age_days` whole days before today.
///
/// Non-directory entries are left untouched at both levels. An unreadable
/// `root` makes the whole pass a no-op.
pub fn prune(root: &Path, max_age_days: u32) {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failure to list repository {}: {}", root.display(), e);
            return;
        }
    };

    let today = Local::now().date_naive();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            prune_group(&path, max_age_days, today);
        }
    }
}

fn prune_group(group: &Path, max_age_days: u32, today: NaiveDate) {
    let entries = match fs::read_dir(group) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Failure to list {}: {}", group.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        match age_in_days(&path, today) {
            Ok(age) if age >= i64::from(max_age_days) => remove_dir(&path),
            Ok(_) => {}
            Err(e) => {
                tracing::error!("Failure to read mtime of {}: {}", path.display(), e);
            }
        }
    }
}

/// Whole calendar days between the path's last-modified date and `today`,
/// not exact 24h multiples.
fn age_in_days(path: &Path, today: NaiveDate) -> io::Result<i64> {
    let modified = fs::metadata(path)?.modified()?;
    let modified_date = DateTime::<Local>::from(modified).date_naive();
    Ok((today - modified_date).num_days())
}

fn remove_dir(path: &Path) {
    let size = dir_size(path);
    tracing::info!(
        "Removing folder {} ({})",
        path.display(),
        format_size(size, BINARY)
    );

    if let Err(e) = fs::remove_dir_all(path) {
        tracing::error!("Failure to delete {}: {}", path.display(), e);
    }
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
