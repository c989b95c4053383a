use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Represents a named source set (e.g., commonMain, jvmMain, main).
///
/// A source set is a directory group: one name covering one or more source
/// directories. The directories are not required to be disjoint from those
/// of other source sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSet {
    pub name: String,
    pub source_dirs: Vec<PathBuf>,
    pub resource_dirs: Vec<PathBuf>,
    pub depends_on: BTreeSet<String>,
}

impl SourceSet {
    /// Create a new source set with conventional directory paths under `base_dir`.
    pub fn new(name: impl Into<String>, base_dir: PathBuf) -> Self {
        let name = name.into();
        let kotlin_dir = base_dir.join(&name).join("kotlin");
        let java_dir = base_dir.join(&name).join("java");
        let resource_dir = base_dir.join(&name).join("resources");
        Self {
            name,
            source_dirs: vec![kotlin_dir, java_dir],
            resource_dirs: vec![resource_dir],
            depends_on: BTreeSet::new(),
        }
    }

    /// Add a dependency on another source set (builder pattern).
    pub fn with_depends_on(mut self, parent: impl Into<String>) -> Self {
        self.depends_on.insert(parent.into());
        self
    }

    /// Add an extra source directory declared by build configuration
    /// (builder pattern).
    pub fn with_source_dir(mut self, dir: PathBuf) -> Self {
        self.source_dirs.push(dir);
        self
    }

    /// Returns `true` if any of the source directories exist on disk.
    pub fn exists(&self) -> bool {
        self.source_dirs.iter().any(|d| d.is_dir())
    }
}
