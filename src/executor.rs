use std::fs;
use std::path::Path;

use log::{debug, warn};
use rusqlite::{Connection, OpenFlags};

use crate::error::{Result, SweepError};
use crate::output;
use crate::plan::{CleanItem, CleanOptions};
use crate::report::ItemOutcome;
use crate::shredder;
use crate::utils;

/// Carry out one clean item and report what happened.
///
/// Absent targets are skipped quietly. A failure lands in the outcome and
/// never aborts the caller's loop.
pub fn execute(item: &CleanItem, options: &CleanOptions) -> ItemOutcome {
    match item {
        CleanItem::Remove { path } => remove_path(path, options),
        CleanItem::Sanitize { db, statements } => sanitize_database(db, statements, options),
        CleanItem::Preserve { path, reason } => preserve(path, *reason),
    }
}

fn remove_path(path: &Path, options: &CleanOptions) -> ItemOutcome {
    if !path.exists() {
        debug!("absent, skipping: {}", path.display());
        return ItemOutcome::Skipped {
            path: path.to_path_buf(),
        };
    }

    let size = utils::entry_size(path);
    if options.dry_run {
        output::print_would_delete(&utils::display_path(path), &utils::format_size(size));
        return ItemOutcome::Cleaned {
            path: path.to_path_buf(),
            bytes_freed: size,
        };
    }

    let removed = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        remove_file(path, options.shred)
    };

    match removed {
        Ok(()) => {
            output::print_deleted(&utils::display_path(path), &utils::format_size(size));
            ItemOutcome::Cleaned {
                path: path.to_path_buf(),
                bytes_freed: size,
            }
        }
        Err(err) => {
            let error = SweepError::from(err).to_string();
            output::print_delete_error(&utils::display_path(path), &error);
            ItemOutcome::Failed {
                path: path.to_path_buf(),
                error,
            }
        }
    }
}

fn remove_file(path: &Path, shred: bool) -> std::io::Result<()> {
    if shred {
        match shredder::shred_file(path) {
            Ok(()) => return Ok(()),
            Err(err) => {
                warn!(
                    "shred failed for {}, falling back to plain delete: {err}",
                    path.display()
                );
            }
        }
    }
    fs::remove_file(path)
}

fn sanitize_database(db: &Path, statements: &[&str], options: &CleanOptions) -> ItemOutcome {
    if !db.exists() {
        debug!("absent, skipping: {}", db.display());
        return ItemOutcome::Skipped {
            path: db.to_path_buf(),
        };
    }

    if options.dry_run {
        let estimate = reclaimable_estimate(db);
        output::print_would_sanitize(&utils::display_path(db), statements.len());
        return ItemOutcome::Cleaned {
            path: db.to_path_buf(),
            bytes_freed: estimate,
        };
    }

    let before = utils::entry_size(db);
    match run_statements(db, statements) {
        Ok(rows) => {
            let freed = before.saturating_sub(utils::entry_size(db));
            debug!("{} row(s) cleared from {}", rows, db.display());
            output::print_sanitized(&utils::display_path(db), &utils::format_size(freed));
            ItemOutcome::Cleaned {
                path: db.to_path_buf(),
                bytes_freed: freed,
            }
        }
        Err(err) => {
            let error = err.to_string();
            output::print_delete_error(&utils::display_path(db), &error);
            ItemOutcome::Failed {
                path: db.to_path_buf(),
                error,
            }
        }
    }
}

/// What a sanitize could free right now: pages already sitting on the
/// database freelist. Opened read-only so a dry run never writes a byte,
/// and any error collapses to a zero estimate.
fn reclaimable_estimate(db: &Path) -> u64 {
    let freed = Connection::open_with_flags(db, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .and_then(|conn| {
            let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;
            let freelist: i64 = conn.query_row("PRAGMA freelist_count", [], |row| row.get(0))?;
            Ok(page_size.saturating_mul(freelist))
        });
    match freed {
        Ok(bytes) => bytes.max(0) as u64,
        Err(err) => {
            debug!("no reclaim estimate for {}: {err}", db.display());
            0
        }
    }
}

/// Run the delete statements and the trailing VACUUM in order. The connection
/// closes on drop, releasing the file for the browser's next start.
fn run_statements(db: &Path, statements: &[&str]) -> Result<usize> {
    let conn = Connection::open(db)?;
    let mut rows = 0;
    for statement in statements {
        rows += conn.execute(statement, [])?;
    }
    Ok(rows)
}

fn preserve(path: &Path, reason: &'static str) -> ItemOutcome {
    if !path.exists() {
        return ItemOutcome::Skipped {
            path: path.to_path_buf(),
        };
    }
    output::print_preserved(&utils::display_path(path), reason);
    ItemOutcome::Preserved {
        path: path.to_path_buf(),
        reason,
    }
}
