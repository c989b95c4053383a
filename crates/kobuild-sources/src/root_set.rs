//! Accumulation and filtering of declared source-root directories.
//!
//! Build configuration contributes roots in several shapes: a bare
//! directory, a whole source set, or arbitrarily nested collections of
//! either. [`RootCandidate`] is the closed union of those shapes, so every
//! contribution is resolved by an exhaustive match rather than runtime type
//! inspection.

use std::path::{Path, PathBuf};

use kobuild_core::source_set::SourceSet;

/// One contribution of candidate root directories.
#[derive(Debug, Clone)]
pub enum RootCandidate {
    /// A single directory.
    Dir(PathBuf),
    /// A source set; expands to its member source directories.
    Group(SourceSet),
    /// A nested collection, flattened depth-first in encounter order.
    Many(Vec<RootCandidate>),
}

impl From<PathBuf> for RootCandidate {
    fn from(dir: PathBuf) -> Self {
        Self::Dir(dir)
    }
}

impl From<&Path> for RootCandidate {
    fn from(dir: &Path) -> Self {
        Self::Dir(dir.to_path_buf())
    }
}

impl From<&str> for RootCandidate {
    fn from(dir: &str) -> Self {
        Self::Dir(PathBuf::from(dir))
    }
}

impl From<SourceSet> for RootCandidate {
    fn from(set: SourceSet) -> Self {
        Self::Group(set)
    }
}

impl From<&SourceSet> for RootCandidate {
    fn from(set: &SourceSet) -> Self {
        Self::Group(set.clone())
    }
}

impl<T: Into<RootCandidate>> From<Vec<T>> for RootCandidate {
    fn from(items: Vec<T>) -> Self {
        Self::Many(items.into_iter().map(Into::into).collect())
    }
}

/// A mutable, order-preserving collection of root directories with an
/// admission filter applied at insertion time.
///
/// Duplicates are kept as given; the set never re-validates elements after
/// admission. One `RootSet` is owned by one build task for one invocation.
pub struct RootSet {
    roots: Vec<PathBuf>,
    filter: Box<dyn Fn(&Path) -> bool>,
}

impl RootSet {
    /// Create an empty set with the given admission filter.
    pub fn new(filter: impl Fn(&Path) -> bool + 'static) -> Self {
        Self {
            roots: Vec::new(),
            filter: Box::new(filter),
        }
    }

    /// Create an empty set that admits every candidate.
    pub fn accepting_all() -> Self {
        Self::new(|_| true)
    }

    /// Create a set pre-populated from `roots`, each passed through `filter`.
    pub fn with_roots(roots: Vec<PathBuf>, filter: impl Fn(&Path) -> bool + 'static) -> Self {
        let mut set = Self::new(filter);
        set.add(RootCandidate::Many(
            roots.into_iter().map(RootCandidate::Dir).collect(),
        ));
        set
    }

    /// The current contents, in insertion order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Remove all current roots.
    pub fn clear(&mut self) {
        self.roots.clear();
    }

    /// Replace the contents with `source`; equivalent to [`clear`] followed
    /// by [`add`]. Returns the directories admitted by this call.
    ///
    /// [`clear`]: RootSet::clear
    /// [`add`]: RootSet::add
    pub fn set(&mut self, source: impl Into<RootCandidate>) -> Vec<PathBuf> {
        self.clear();
        self.add(source)
    }

    /// Resolve `source` into directories, filter each, and append the
    /// admitted ones to the set. Returns exactly the directories admitted by
    /// this call, in depth-first discovery order.
    pub fn add(&mut self, source: impl Into<RootCandidate>) -> Vec<PathBuf> {
        let mut admitted = Vec::new();
        self.resolve(source.into(), &mut admitted);
        self.roots.extend(admitted.iter().cloned());
        admitted
    }

    fn resolve(&self, candidate: RootCandidate, admitted: &mut Vec<PathBuf>) {
        match candidate {
            RootCandidate::Dir(dir) => {
                if (self.filter)(&dir) {
                    admitted.push(dir);
                }
            }
            RootCandidate::Group(set) => {
                for dir in set.source_dirs {
                    if (self.filter)(&dir) {
                        admitted.push(dir);
                    }
                }
            }
            RootCandidate::Many(items) => {
                for item in items {
                    self.resolve(item, admitted);
                }
            }
        }
    }
}

impl std::fmt::Debug for RootSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootSet").field("roots", &self.roots).finish()
    }
}
