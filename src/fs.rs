//! Filesystem access behind a trait so the app can run against a fake.

use std::any::Any;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::utils::atomic_file;

/// Text file access used by [`crate::App`].
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Any + Send + Sync {
    /// Read the whole file. Fails with `NotFound` when the file is missing.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the whole file with `contents`.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The operating system's filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        atomic_file::write_text_atomic(path, contents).map_err(io::Error::other)
    }
}

/// An in-memory filesystem keyed by path.
///
/// Paths are compared as given; no normalization or directory structure is
/// modeled, so writes always succeed.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the filesystem with `(path, contents)` pairs.
    pub fn with_files<I, P, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let files = files
            .into_iter()
            .map(|(path, contents)| (path.into(), contents.into()))
            .collect();
        Self {
            files: Mutex::new(files),
        }
    }

    /// Current contents of `path`, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        // A panic while holding the lock cannot leave the map half-updated.
        self.files.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.lock().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("Could not find file '{}'", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.lock().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
