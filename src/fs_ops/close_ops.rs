//! Bulk close operations for fallible resource handles.
//!
//! Closing a batch of resources must attempt every handle even when earlier
//! ones fail, so that no handle leaks, and must still surface every failure
//! that occurred. The strict variant raises the first failure with the rest
//! suppressed onto it; the lenient variant is for best-effort cleanup on
//! already-failing paths and discards everything.

use crate::core::aggregate;
use crate::errors::{CleanfsError, CleanfsResult};
use std::fs::File;

/// A resource with a single fallible close operation.
pub trait Closeable {
    fn close(&mut self) -> CleanfsResult<()>;
}

impl<C: Closeable + ?Sized> Closeable for Box<C> {
    fn close(&mut self) -> CleanfsResult<()> {
        (**self).close()
    }
}

impl Closeable for File {
    /// Surfaces pending write-back errors that a plain drop would discard.
    fn close(&mut self) -> CleanfsResult<()> {
        self.sync_all()?;
        Ok(())
    }
}

/// Close all given resources, raising the first failure after the full pass.
///
/// Absent entries are skipped. Every present resource is closed exactly
/// once, in input order, regardless of earlier failures; each resource is
/// dropped after its close attempt. If any close failed, the first failure
/// is raised with all later ones attached as suppressed causes.
pub fn close_all<I, C>(resources: I) -> CleanfsResult<()>
where
    I: IntoIterator<Item = Option<C>>,
    C: Closeable,
{
    let mut first: Option<CleanfsError> = None;

    for resource in resources {
        if let Some(mut resource) = resource
            && let Err(err) = resource.close()
        {
            first = Some(aggregate::aggregate(first, err));
        }
    }

    match first {
        Some(err) => Err(aggregate::rethrow(err)),
        None => Ok(()),
    }
}

/// Close all given resources, discarding every failure.
///
/// Same traversal as [`close_all`], for best-effort cleanup where a failure
/// signal would mask the error that triggered the cleanup in the first
/// place.
pub fn close_all_ignoring_failures<I, C>(resources: I)
where
    I: IntoIterator<Item = Option<C>>,
    C: Closeable,
{
    for resource in resources {
        if let Some(mut resource) = resource {
            let _ = resource.close();
        }
    }
}
