//! Core data types for the kobuild source engine.
//!
//! This crate defines the fundamental types the engine works over: named
//! source-directory groups (source sets) and source-language classification
//! by file extension.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod language;
pub mod source_set;
