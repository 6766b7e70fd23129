//! cleanfs - failure-aware cleanup and durability primitives
//!
//! Deterministic cleanup utilities for file-system resources, built for
//! callers that must never leak a handle or silently lose a cleanup error:
//!
//! - **Bulk close**: close a batch of resources, attempting every handle
//!   even after failures, and surface exactly one failure carrying the rest
//!   as suppressed causes.
//! - **Tree removal**: recursively delete file-system trees, continuing
//!   past per-entry failures and reporting every unremoved path at the end,
//!   in the order the attempts happened.
//! - **Durability fence**: fsync a file or directory, tolerating
//!   filesystems that cannot fsync a directory handle.
//!
//! Strict variants raise a single composite failure per call; the
//! `*_ignoring_failures` variants are for best-effort cleanup on paths that
//! are already handling another error.
//!
//! ## Architecture
//!
//! - `core`: failure aggregation shared by all operations
//! - `fs_ops`: the close, remove and sync operations
//! - `errors`: the error type with suppressed-failure chaining
//!
//! ## Usage
//!
//! ```rust
//! use std::fs;
//!
//! let temp = tempfile::tempdir().unwrap();
//! let tree = temp.path().join("scratch");
//! fs::create_dir(&tree).unwrap();
//! fs::write(tree.join("data.txt"), b"payload").unwrap();
//!
//! cleanfs::remove_tree(&tree).unwrap();
//! assert!(!tree.exists());
//! ```

pub mod core;
pub mod errors;
pub mod fs_ops;

// Re-export the operation surface for convenience
pub use errors::{CleanfsError, CleanfsResult, ErrorKind};
pub use fs_ops::close_ops::{Closeable, close_all, close_all_ignoring_failures};
pub use fs_ops::remove_ops::{
    delete_files_ignoring_failures, remove_tree, remove_trees,
};
pub use fs_ops::sync_ops::fsync;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information
pub const BUILD_INFO: &str = concat!(
    "version=",
    env!("CARGO_PKG_VERSION"),
    " build_time=",
    env!("VERGEN_BUILD_TIMESTAMP"),
    " git_sha=",
    env!("VERGEN_GIT_SHA"),
    " rustc=",
    env!("VERGEN_RUSTC_SEMVER")
);

/// Initialize logging for binaries embedding this crate.
pub fn init() -> CleanfsResult<()> {
    env_logger::init();
    log::info!("cleanfs v{VERSION} initialized");
    Ok(())
}
