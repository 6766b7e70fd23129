//! Cleanup and durability operations.
//!
//! Each submodule holds one family of operations:
//!
//! - `close_ops`: bulk close of resource handles without losing failures
//! - `remove_ops`: recursive tree removal with per-path failure collection
//! - `sync_ops`: fsync with directory tolerance

pub mod close_ops;
pub mod remove_ops;
pub mod sync_ops;
