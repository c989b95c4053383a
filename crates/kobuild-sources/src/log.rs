//! Diagnostic export of a snapshot: human-readable path listings, one block
//! per non-empty category, emitted at debug level.

use std::path::PathBuf;

use kobuild_util::fs::canonical_path;

use crate::snapshot::SourceRoots;

/// Render a path collection as a bracketed listing: canonical forms, sorted
/// lexicographically, one per line.
pub fn dump_paths<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> String {
    let mut rendered: Vec<String> = paths
        .into_iter()
        .map(|p| canonical_path(p).display().to_string())
        .collect();
    rendered.sort();
    format!("[\n\t{}]", rendered.join(",\n\t"))
}

impl SourceRoots {
    /// Format the snapshot as one block per non-empty category, each headed
    /// by the task name and category.
    pub fn render(&self, task_name: &str) -> Vec<String> {
        let mut blocks = Vec::new();
        if !self.kotlin_source_files().is_empty() {
            blocks.push(format!(
                "{task_name} source roots: {}",
                dump_paths(self.kotlin_source_files())
            ));
        }
        if !self.kotlin_common_source_files().is_empty() {
            blocks.push(format!(
                "{task_name} common source roots: {}",
                dump_paths(self.kotlin_common_source_files())
            ));
        }
        if let Some(java_roots) = self.java_source_roots() {
            if !java_roots.is_empty() {
                blocks.push(format!(
                    "{task_name} java source roots: {}",
                    dump_paths(java_roots)
                ));
            }
        }
        blocks
    }

    /// Emit the rendered blocks through the debug log.
    pub fn log(&self, task_name: &str) {
        for block in self.render(task_name) {
            tracing::debug!("{block}");
        }
    }
}
