use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Resolve `path` to its canonical form (symlinks followed, `.`/`..`
/// removed). Falls back to the path as given when canonicalization fails,
/// e.g. because the entry no longer exists.
pub fn canonical_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Returns `true` if `dir` equals `ancestor` or is nested at any depth
/// beneath it, comparing canonical forms.
///
/// The walk is component-wise, never a string prefix test, so `/proj/src`
/// is not an ancestor of `/proj/src-gen`.
pub fn is_ancestor_of(ancestor: &Path, dir: &Path) -> bool {
    let ancestor = canonical_path(ancestor);
    let dir = canonical_path(dir);
    dir.ancestors().any(|candidate| candidate == ancestor)
}
