//! Source-root resolution and classification for one build-task invocation.
//!
//! The engine works in two stages:
//! 1. [`RootSet`] accumulates declared root directories from heterogeneous
//!    configuration inputs, applying an admission filter at insertion.
//! 2. [`SourceRoots`] snapshots a task's input files into Kotlin / common
//!    lists and, for JVM tasks, discovers which declared roots actually
//!    contain the Java inputs.
//!
//! Everything here is synchronous and in-memory; the only filesystem access
//! is canonical-path resolution during ancestor checks and logging.

pub mod collect;
pub mod log;
pub mod root_set;
pub mod snapshot;

pub use root_set::{RootCandidate, RootSet};
pub use snapshot::SourceRoots;
