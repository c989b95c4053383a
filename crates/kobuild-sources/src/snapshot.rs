//! Per-task classification of input files into Kotlin, common, and (for JVM
//! tasks) the declared roots containing the Java inputs.
//!
//! A snapshot is built once per build-task invocation from the task's flat
//! input collections and the current [`RootSet`] contents. It holds no
//! reference to the `RootSet` afterwards.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use kobuild_core::language::{is_java_file, is_kotlin_file};
use kobuild_util::fs::is_ancestor_of;

use crate::root_set::RootSet;

/// Immutable classification of one task's source inputs.
#[derive(Debug, Clone)]
pub enum SourceRoots {
    /// JVM compilation: Kotlin sources plus the java source roots that must
    /// be forwarded to the compiler.
    Jvm {
        kotlin_source_files: Vec<PathBuf>,
        kotlin_common_source_files: Vec<PathBuf>,
        /// Declared roots containing at least one Java input file.
        java_source_roots: HashSet<PathBuf>,
    },
    /// Non-JVM compilation: no Java-specific data exists.
    KotlinOnly {
        kotlin_source_files: Vec<PathBuf>,
        kotlin_common_source_files: Vec<PathBuf>,
    },
}

impl SourceRoots {
    /// Build the JVM-flavored snapshot.
    ///
    /// `task_sources` is the task's full input file collection;
    /// `common_sources` the inputs shared across compilation targets. Files
    /// without a recognized Kotlin extension are dropped from the result
    /// lists; the Java-extension subset of `task_sources` drives root
    /// discovery against the current contents of `roots`.
    pub fn for_jvm(
        task_sources: &[PathBuf],
        common_sources: &[PathBuf],
        roots: &RootSet,
    ) -> Self {
        let java_sources = task_sources.iter().filter(|f| is_java_file(f));
        Self::Jvm {
            kotlin_source_files: to_kotlin_file_list(task_sources),
            kotlin_common_source_files: to_kotlin_file_list(common_sources),
            java_source_roots: find_roots_for_sources(roots.roots(), java_sources),
        }
    }

    /// Build the snapshot for a target with no Java interop.
    pub fn kotlin_only(task_sources: &[PathBuf], common_sources: &[PathBuf]) -> Self {
        Self::KotlinOnly {
            kotlin_source_files: to_kotlin_file_list(task_sources),
            kotlin_common_source_files: to_kotlin_file_list(common_sources),
        }
    }

    /// Target-specific Kotlin sources.
    pub fn kotlin_source_files(&self) -> &[PathBuf] {
        match self {
            Self::Jvm {
                kotlin_source_files,
                ..
            }
            | Self::KotlinOnly {
                kotlin_source_files,
                ..
            } => kotlin_source_files,
        }
    }

    /// Kotlin sources shared across compilation targets.
    pub fn kotlin_common_source_files(&self) -> &[PathBuf] {
        match self {
            Self::Jvm {
                kotlin_common_source_files,
                ..
            }
            | Self::KotlinOnly {
                kotlin_common_source_files,
                ..
            } => kotlin_common_source_files,
        }
    }

    /// All Kotlin sources for the compiler invocation: target-specific
    /// first, then common.
    pub fn all_kotlin_source_files(&self) -> Vec<PathBuf> {
        let mut all = self.kotlin_source_files().to_vec();
        all.extend_from_slice(self.kotlin_common_source_files());
        all
    }

    /// The discovered java source roots, or `None` for non-JVM snapshots.
    pub fn java_source_roots(&self) -> Option<&HashSet<PathBuf>> {
        match self {
            Self::Jvm {
                java_source_roots, ..
            } => Some(java_source_roots),
            Self::KotlinOnly { .. } => None,
        }
    }
}

fn to_kotlin_file_list(files: &[PathBuf]) -> Vec<PathBuf> {
    files
        .iter()
        .filter(|f| is_kotlin_file(f))
        .cloned()
        .collect()
}

/// Find every root in `all_roots` that contains at least one of `sources`.
///
/// Each source file contributes its parent directory; the distinct parents
/// are then tested against every root with reflexive canonical containment.
/// O(source dirs × roots), run once per task invocation.
pub fn find_roots_for_sources<'a>(
    all_roots: &[PathBuf],
    sources: impl IntoIterator<Item = &'a PathBuf>,
) -> HashSet<PathBuf> {
    let source_dirs: HashSet<&Path> = sources
        .into_iter()
        .filter_map(|file| file.parent())
        .collect();

    let mut result_roots = HashSet::new();
    for source_dir in &source_dirs {
        for source_root in all_roots {
            if is_ancestor_of(source_root, source_dir) {
                result_roots.insert(source_root.clone());
            }
        }
    }

    result_roots
}
