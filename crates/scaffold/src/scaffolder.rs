//! Bring a directory in line with a manifest
//!
//! Entries are processed strictly in order. The first filesystem error ends
//! the run: later entries are not attempted and no event is recorded for the
//! entry that failed.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::event::{EventSink, ScaffoldEvent};
use crate::manifest::{parent_dir, Manifest};

/// Filesystem failures that abort a run
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Counts of what a run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub directories_created: usize,
    pub files_created: usize,
    pub already_present: usize,
}

impl Summary {
    fn count(&mut self, event: &ScaffoldEvent) {
        match event {
            ScaffoldEvent::CreatedDirectory(_) => self.directories_created += 1,
            ScaffoldEvent::CreatedFile(_) => self.files_created += 1,
            ScaffoldEvent::AlreadyExists(_) => self.already_present += 1,
        }
    }

    /// True when the run changed nothing on disk
    pub fn is_noop(&self) -> bool {
        self.directories_created == 0 && self.files_created == 0
    }
}

/// Materializes manifest entries under a root directory
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    /// Scaffold relative to `root`. Events report paths relative to it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Ensure every manifest entry exists, reporting each step to `sink`
    pub fn run(
        &self,
        manifest: &Manifest,
        sink: &mut dyn EventSink,
    ) -> Result<Summary, ScaffoldError> {
        let mut summary = Summary::default();
        let mut emit = |event: ScaffoldEvent| {
            summary.count(&event);
            sink.record(&event);
        };

        for entry in manifest.entries() {
            if let Some(dir) = parent_dir(entry) {
                let abs_dir = self.root.join(dir);
                if !abs_dir.exists() {
                    fs::create_dir_all(&abs_dir).map_err(|source| {
                        ScaffoldError::CreateDirectory {
                            path: dir.to_path_buf(),
                            source,
                        }
                    })?;
                    emit(ScaffoldEvent::CreatedDirectory(dir.to_path_buf()));
                }
            }

            let abs_file = self.root.join(entry);
            if abs_file.exists() {
                emit(ScaffoldEvent::AlreadyExists(entry.clone()));
                continue;
            }

            match create_empty(&abs_file) {
                Ok(()) => emit(ScaffoldEvent::CreatedFile(entry.clone())),
                // Lost a race, or a dangling symlink: either way, not ours to touch
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    emit(ScaffoldEvent::AlreadyExists(entry.clone()))
                }
                Err(source) => {
                    return Err(ScaffoldError::CreateFile {
                        path: entry.clone(),
                        source,
                    })
                }
            }
        }

        Ok(summary)
    }
}

/// Create an empty file, refusing to open one that exists
fn create_empty(path: &Path) -> io::Result<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(drop)
}
