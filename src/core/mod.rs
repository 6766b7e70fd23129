//! Core failure-composition primitives shared by the cleanup operations.

pub mod aggregate;
