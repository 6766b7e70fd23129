use std::error::Error;
use std::fmt;

/// Classifies the origin of a [`CleanfsError`].
#[derive(Debug)]
pub enum ErrorKind {
    /// A resource could not be closed
    Close(String),
    /// A path could not be removed
    Delete(String),
    /// A flush to the storage device failed
    Fsync(String),
    /// An underlying I/O error, passed through unchanged
    Io(std::io::Error),
    /// Any other error, wrapped with the original as cause
    Other(Box<dyn Error + Send + Sync>),
}

/// Error type for cleanup and durability operations.
///
/// Carries a classifying [`ErrorKind`] plus an ordered list of suppressed
/// secondary failures, attached when several failures occur during one
/// logical operation (see [`crate::core::aggregate`]). Suppression is
/// one-level: reporting a failure shows its own message and the number of
/// suppressed failures, never the suppressed failures' own suppressed lists.
/// A failure cannot suppress itself; [`CleanfsError::add_suppressed`] takes
/// the secondary failure by value.
#[derive(Debug)]
pub struct CleanfsError {
    kind: ErrorKind,
    suppressed: Vec<CleanfsError>,
}

impl CleanfsError {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            suppressed: Vec::new(),
        }
    }

    /// A resource close failure.
    pub fn close(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Close(message.into()))
    }

    /// A path removal failure.
    pub fn delete(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Delete(message.into()))
    }

    /// A device flush failure on a regular file.
    pub fn fsync(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Fsync(message.into()))
    }

    /// Wrap an arbitrary error, keeping it reachable via [`Error::source`].
    pub fn other(err: impl Error + Send + Sync + 'static) -> Self {
        Self::new(ErrorKind::Other(Box::new(err)))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Attach a secondary failure. Encounter order is preserved.
    pub fn add_suppressed(&mut self, suppressed: CleanfsError) {
        self.suppressed.push(suppressed);
    }

    /// Secondary failures attached to this one, in the order they occurred.
    pub fn suppressed(&self) -> &[CleanfsError] {
        &self.suppressed
    }

    /// Whether this failure already belongs to one of the crate's natural
    /// I/O error categories, as opposed to a wrapped foreign error.
    pub fn is_io_category(&self) -> bool {
        !matches!(self.kind, ErrorKind::Other(_))
    }
}

impl fmt::Display for CleanfsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Close(msg) => write!(f, "Close error: {msg}")?,
            ErrorKind::Delete(msg) => write!(f, "Delete error: {msg}")?,
            ErrorKind::Fsync(msg) => write!(f, "Fsync error: {msg}")?,
            ErrorKind::Io(err) => write!(f, "I/O error: {err}")?,
            ErrorKind::Other(err) => write!(f, "Wrapped error: {err}")?,
        }
        if !self.suppressed.is_empty() {
            write!(f, " ({} suppressed)", self.suppressed.len())?;
        }
        Ok(())
    }
}

impl Error for CleanfsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CleanfsError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

impl PartialEq for CleanfsError {
    fn eq(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ErrorKind::Close(a), ErrorKind::Close(b)) => a == b,
            (ErrorKind::Delete(a), ErrorKind::Delete(b)) => a == b,
            (ErrorKind::Fsync(a), ErrorKind::Fsync(b)) => a == b,
            // std::io::Error does not implement PartialEq, compare string forms
            (ErrorKind::Io(a), ErrorKind::Io(b)) => a.to_string() == b.to_string(),
            (ErrorKind::Other(a), ErrorKind::Other(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

pub type CleanfsResult<T> = Result<T, CleanfsError>;
