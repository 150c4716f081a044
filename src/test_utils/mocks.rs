//! Filesystem doubles that fail on demand.

use crate::fs::{FileSystem, MemoryFileSystem};
use std::io;
use std::path::Path;

/// Wraps a [`MemoryFileSystem`] and fails the operations it is told to.
#[derive(Debug, Default)]
pub struct FailingFileSystem {
    inner: MemoryFileSystem,
    fail_reads: Option<io::ErrorKind>,
    fail_writes: Option<io::ErrorKind>,
}

impl FailingFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inner(mut self, inner: MemoryFileSystem) -> Self {
        self.inner = inner;
        self
    }

    pub fn failing_reads(mut self, kind: io::ErrorKind) -> Self {
        self.fail_reads = Some(kind);
        self
    }

    pub fn failing_writes(mut self, kind: io::ErrorKind) -> Self {
        self.fail_writes = Some(kind);
        self
    }

    pub fn inner(&self) -> &MemoryFileSystem {
        &self.inner
    }
}

impl FileSystem for FailingFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.fail_reads {
            Some(kind) => Err(io::Error::new(
                kind,
                format!("injected read failure for {}", path.display()),
            )),
            None => self.inner.read_to_string(path),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        match self.fail_writes {
            Some(kind) => Err(io::Error::new(
                kind,
                format!("injected write failure for {}", path.display()),
            )),
            None => self.inner.write(path, contents),
        }
    }
}
