//! In-memory set of generated files.

use std::path::{Path, PathBuf};

/// One rendered file, with a path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Ordered collection of generated files.
///
/// Insertion order is preserved; adding a file at an existing path replaces
/// the earlier contents in place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct OutputSet {
    files: Vec<GeneratedFile>,
}

impl OutputSet {
    pub fn new() -> Self {
        OutputSet::default()
    }

    /// Add a file, replacing any existing entry at the same path.
    pub fn add(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        let contents = contents.into();

        if let Some(existing) = self.files.iter_mut().find(|f| f.path == path) {
            existing.contents = contents;
        } else {
            self.files.push(GeneratedFile { path, contents });
        }
    }

    /// Look up a file by path.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        let path = path.as_ref();
        self.files.iter().find(|f| f.path == path)
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    /// All files, in insertion order.
    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
