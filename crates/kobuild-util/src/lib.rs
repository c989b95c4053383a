//! Shared utilities for the kobuild source engine.
//!
//! This crate provides the cross-cutting concerns used by the other kobuild
//! crates: error types and filesystem/path helpers (canonicalization,
//! directory-ancestor checks, and directory creation).

pub mod errors;
pub mod fs;
