//! Recursive tree removal with per-path failure collection.
//!
//! Removal never aborts on the first failed entry: the traversal keeps
//! going, deletes everything it still can, and reports the complete set of
//! unremoved paths at the end. Stopping early would leave an unknown amount
//! of the tree behind with no record of what survived.

use crate::errors::{CleanfsError, CleanfsResult};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ordered record of `(path, cause)` pairs for entries that could not be
/// removed. Insertion order is attempt order; [`record`] keeps the entries
/// unique per path even when locations overlap or repeat.
type RemovalLedger = Vec<(PathBuf, io::Error)>;

/// Remove all given locations and everything underneath them.
///
/// Absent and nonexistent locations are skipped, so repeating a cleanup
/// that already succeeded is a no-op. Each existing location is traversed
/// post-order (children before their parent directory) and every visited
/// entry is attempted even after earlier failures. Symbolic links are not
/// followed; the link itself is removed.
///
/// If anything could not be removed, the error lists every unremoved path
/// with its cause, in the order the attempts happened.
pub fn remove_trees<I, P>(locations: I) -> CleanfsResult<()>
where
    I: IntoIterator<Item = Option<P>>,
    P: AsRef<Path>,
{
    let mut ledger = RemovalLedger::new();

    for location in locations.into_iter().flatten() {
        let location = location.as_ref();
        // A top-level location that cannot be stat'd does not exist as far
        // as this call is concerned (this includes a path through a regular
        // file, NotADirectory): trivially removed, skip it. Only entries
        // inside an existing tree get recorded on stat failure.
        let Ok(meta) = fs::symlink_metadata(location) else {
            continue;
        };
        log::debug!("removing tree at {}", location.display());
        remove_known(&mut ledger, location, &meta);
    }

    if ledger.is_empty() {
        Ok(())
    } else {
        Err(CleanfsError::delete(unremoved_report(&ledger)))
    }
}

/// Remove a single location and everything underneath it.
pub fn remove_tree<P: AsRef<Path>>(location: P) -> CleanfsResult<()> {
    remove_trees(std::iter::once(Some(location)))
}

/// Delete all given files, discarding every failure.
///
/// Non-recursive and best-effort: absent entries, missing files and
/// undeletable files are all silently skipped. For cleanup paths that are
/// already handling another error.
pub fn delete_files_ignoring_failures<I, P>(files: I)
where
    I: IntoIterator<Item = Option<P>>,
    P: AsRef<Path>,
{
    for file in files.into_iter().flatten() {
        let _ = fs::remove_file(file.as_ref());
    }
}

/// Record a failure, keeping one ledger entry per path: the first failure
/// for a path wins and insertion order is preserved.
fn record(ledger: &mut RemovalLedger, path: &Path, err: io::Error) {
    if ledger.iter().all(|(recorded, _)| recorded != path) {
        ledger.push((path.to_path_buf(), err));
    }
}

/// Post-order removal of one entry inside an existing tree. Failures go
/// into the ledger; a path that vanishes between visit and delete already
/// achieved the goal and is not recorded.
fn remove_entry(ledger: &mut RemovalLedger, path: &Path) {
    match fs::symlink_metadata(path) {
        Ok(meta) => remove_known(ledger, path, &meta),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => record(ledger, path, err),
    }
}

fn remove_known(ledger: &mut RemovalLedger, path: &Path, meta: &fs::Metadata) {
    if meta.is_dir() {
        remove_dir_entry(ledger, path);
    } else {
        // Regular files and symlinks; the link itself is unlinked.
        if let Err(err) = fs::remove_file(path)
            && err.kind() != io::ErrorKind::NotFound
        {
            record(ledger, path, err);
        }
    }
}

fn remove_dir_entry(ledger: &mut RemovalLedger, dir: &Path) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return,
        Err(err) => {
            record(ledger, dir, err);
            return;
        }
    };

    for entry in entries {
        match entry {
            Ok(entry) => remove_entry(ledger, &entry.path()),
            Err(err) => {
                // Listing broke mid-iteration; record the directory and skip
                // its own delete attempt, which would fail anyway.
                record(ledger, dir, err);
                return;
            }
        }
    }

    if let Err(err) = fs::remove_dir(dir)
        && err.kind() != io::ErrorKind::NotFound
    {
        record(ledger, dir, err);
    }
}

fn unremoved_report(ledger: &RemovalLedger) -> String {
    let mut report =
        String::from("could not remove the following files (in the order of attempts):\n");
    for (path, cause) in ledger {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.clone());
        let _ = writeln!(report, "   {}: {}", absolute.display(), cause);
    }
    report
}
