//! Failure aggregation for batch operations.
//!
//! When a batch operation (bulk close, tree removal) hits several failures,
//! the first one becomes the primary failure and the rest are attached to it
//! as suppressed causes, preserving encounter order. The batch then raises
//! exactly one failure that carries the full set.

use crate::errors::{CleanfsError, ErrorKind};

/// Fold a newly caught failure into the running primary failure.
///
/// If no primary exists yet, `new` becomes the primary and is returned.
/// Otherwise `new` is appended to the primary's suppressed list and the
/// primary is returned otherwise unchanged.
pub fn aggregate(first: Option<CleanfsError>, new: CleanfsError) -> CleanfsError {
    match first {
        Some(mut primary) => {
            primary.add_suppressed(new);
            primary
        }
        None => new,
    }
}

/// Normalize an aggregated failure into the operation's error category.
///
/// Failures that already belong to the crate's natural I/O categories pass
/// through unchanged, keeping their original kind. A wrapped foreign error
/// is re-wrapped in a fresh failure with the original (and its suppressed
/// list) reachable as the cause.
///
/// Takes the failure by value, so the absent-argument contract violation of
/// a nullable-error design is unrepresentable here.
pub fn rethrow(failure: CleanfsError) -> CleanfsError {
    if failure.is_io_category() {
        failure
    } else {
        CleanfsError::new(ErrorKind::Other(Box::new(failure)))
    }
}
