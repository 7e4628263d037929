//! The list of files a scaffold run guarantees

use std::path::{Path, PathBuf};

/// Files every Bootkit project starts with
pub const DEFAULT_FILES: &[&str] = &[
    "src/__init__.py",
    "src/helper.py",
    "src/prompt.py",
    ".env",
    "requirements.txt",
    "setup.py",
    "app.py",
    "research/trials.ipynb",
];

/// Ordered list of relative file paths.
///
/// Duplicates are allowed; a repeated entry is simply reported as already
/// present the second time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<PathBuf>,
}

impl Manifest {
    pub fn new<I, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The standard project manifest
    pub fn builtin() -> Self {
        Self::new(DEFAULT_FILES.iter().copied())
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directory part of a manifest entry, or `None` when the file sits at the
/// scaffold root (e.g. `.env`)
pub fn parent_dir(entry: &Path) -> Option<&Path> {
    entry.parent().filter(|p| !p.as_os_str().is_empty())
}
