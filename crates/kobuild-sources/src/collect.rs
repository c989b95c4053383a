//! Recursive collection of source files from declared directories.
//!
//! The classification engine itself works over flat path collections; this
//! module is the bridge that produces them from a source set's directories
//! on disk.

use std::path::{Path, PathBuf};

use kobuild_core::language::Language;

/// Recursively collect all recognized source files (Kotlin and Java) from
/// the given directories, sorted.
pub fn collect_source_files(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in dirs {
        if dir.is_dir() {
            collect_files_recursive(dir, &mut files);
        }
    }
    files.sort();
    files
}

fn collect_files_recursive(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();
        if file_type.is_symlink() {
            // Never descend through a symlink, so link cycles terminate.
            // A symlink to a regular source file still counts.
            if path.is_file() && Language::of(&path) != Language::Other {
                out.push(path);
            }
        } else if file_type.is_dir() {
            collect_files_recursive(&path, out);
        } else if Language::of(&path) != Language::Other {
            out.push(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_kotlin_and_java_skips_others() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("src/main/kotlin/com/example");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("Main.kt"), "fun main() {}").unwrap();
        std::fs::write(dir.join("Interop.java"), "class Interop {}").unwrap();
        std::fs::write(dir.join("readme.txt"), "not a source").unwrap();

        let files = collect_source_files(&[tmp.path().join("src")]);
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| Language::of(f) != Language::Other));
    }

    #[test]
    fn missing_directory_yields_nothing() {
        let files = collect_source_files(&[PathBuf::from("/nonexistent/nowhere")]);
        assert!(files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_cycle_terminates() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("src");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("A.kt"), "").unwrap();
        std::os::unix::fs::symlink(&dir, dir.join("loop")).unwrap();

        let files = collect_source_files(&[dir.clone()]);
        assert_eq!(files, vec![dir.join("A.kt")]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_source_file_is_collected() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("src");
        std::fs::create_dir_all(&dir).unwrap();
        let real = tmp.path().join("Real.kt");
        std::fs::write(&real, "").unwrap();
        std::os::unix::fs::symlink(&real, dir.join("Linked.kt")).unwrap();

        let files = collect_source_files(&[dir.clone()]);
        assert_eq!(files, vec![dir.join("Linked.kt")]);
    }

    #[test]
    fn result_is_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("k");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("B.kt"), "").unwrap();
        std::fs::write(dir.join("A.kt"), "").unwrap();

        let files = collect_source_files(&[dir.clone()]);
        assert_eq!(files, vec![dir.join("A.kt"), dir.join("B.kt")]);
    }
}
