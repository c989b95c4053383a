use std::path::Path;

/// Source language of an input file, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Kotlin sources: `.kt` and `.kts`.
    Kotlin,
    /// Java sources: `.java`.
    Java,
    /// Anything else. Files with this tag play no role in classification.
    Other,
}

impl Language {
    /// Classify a path by its extension.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("kt") | Some("kts") => Self::Kotlin,
            Some("java") => Self::Java,
            _ => Self::Other,
        }
    }
}

/// Returns `true` if the path has a recognized Kotlin source extension.
pub fn is_kotlin_file(path: &Path) -> bool {
    Language::of(path) == Language::Kotlin
}

/// Returns `true` if the path has the Java source extension.
pub fn is_java_file(path: &Path) -> bool {
    Language::of(path) == Language::Java
}
