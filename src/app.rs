use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{CommandError, Result};
use crate::fs::{FileSystem, OsFileSystem};
use crate::logging::log_file_operation;
use crate::manifest::{AddonsManifest, MANIFEST_FILE};
use crate::shell::Shell;
use crate::utils::json_validator;

/// Process-wide context handed to every command.
///
/// Holds the directory the command runs in and the filesystem it reads and
/// writes through. Both are fixed at construction.
#[derive(Clone)]
pub struct App {
    working_dir: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl App {
    /// An app rooted at the current directory on the real filesystem.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    pub fn with_file_system(working_dir: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            working_dir: working_dir.into(),
            fs,
        }
    }

    pub fn builder() -> AppBuilder {
        AppBuilder::default()
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    pub fn create_shell(&self, path: impl Into<PathBuf>) -> Shell {
        Shell::new(path)
    }

    /// Read `path` and decode it as JSON into `T`.
    ///
    /// Any read, validation or decoding failure becomes a [`CommandError`]
    /// with the message ``Couldn't load file `<path>` `` and the original
    /// error as its source.
    pub fn load_file<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        let result = self
            .fs
            .read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|contents| json_validator::deserialize_json_safe::<T>(&contents));

        log_file_operation("load", path, result.is_ok());
        result.map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "Couldn't load file");
            CommandError::with_source(format!("Couldn't load file `{}`", path.display()), err)
        })
    }

    /// Replace the contents of `path` with `contents`.
    pub fn save_file(&self, path: impl AsRef<Path>, contents: &str) -> Result<()> {
        let path = path.as_ref();
        let result = self.fs.write(path, contents);

        log_file_operation("save", path, result.is_ok());
        result.map_err(|err| {
            tracing::warn!(path = %path.display(), error = %err, "Couldn't save file");
            CommandError::with_source(format!("Couldn't save file `{}`", path.display()), err)
        })
    }

    /// Join a relative path onto the working directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }

    /// Load `addons.json` from the working directory.
    pub fn load_manifest(&self) -> Result<AddonsManifest> {
        self.load_file(self.resolve(MANIFEST_FILE))
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("working_dir", &self.working_dir)
            .finish_non_exhaustive()
    }
}

/// Builds an [`App`], defaulting whatever is not set.
#[derive(Default)]
pub struct AppBuilder {
    working_dir: Option<PathBuf>,
    fs: Option<Arc<dyn FileSystem>>,
}

impl AppBuilder {
    pub fn working_dir(mut self, working_dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }

    pub fn file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = Some(fs);
        self
    }

    pub fn build(self) -> Result<App> {
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|err| {
                CommandError::with_source("Couldn't determine the current directory", err)
            })?,
        };
        let fs = self.fs.unwrap_or_else(|| Arc::new(OsFileSystem::new()));
        Ok(App::with_file_system(working_dir, fs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MemoryFileSystem, MockFileSystem};
    use serde::Deserialize;
    use std::any::Any;
    use std::error::Error;
    use std::io;

    const FILENAME: &str = "c:\\test.txt";
    const DATA: &str = "data";

    #[derive(Debug, Deserialize)]
    struct TestObject {
        #[serde(rename = "test")]
        test_field: String,
    }

    fn app_with(fs: Arc<dyn FileSystem>) -> App {
        App::with_file_system(".", fs)
    }

    #[test]
    fn test_app_defaults() {
        let app = App::new().unwrap();
        assert_eq!(app.working_dir(), std::env::current_dir().unwrap());
        let fs: &dyn Any = &**app.fs();
        assert!(fs.downcast_ref::<OsFileSystem>().is_some());
    }

    #[test]
    fn test_builder_overrides() {
        let memory = Arc::new(MemoryFileSystem::new());
        let app = App::builder()
            .working_dir("project")
            .file_system(memory)
            .build()
            .unwrap();
        assert_eq!(app.working_dir(), Path::new("project"));
        let fs: &dyn Any = &**app.fs();
        assert!(fs.downcast_ref::<MemoryFileSystem>().is_some());
    }

    #[test]
    fn test_creates_shell() {
        let app = app_with(Arc::new(MockFileSystem::new()));
        let shell = app.create_shell(".");
        assert_eq!(shell.working_dir(), Path::new("."));
    }

    #[test]
    fn test_loads_file() {
        let fs = MemoryFileSystem::with_files([(FILENAME, format!("{{ \"test\": \"{DATA}\" }}"))]);
        let app = app_with(Arc::new(fs));

        let file: TestObject = app.load_file(FILENAME).unwrap();
        assert_eq!(file.test_field, DATA);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let app = app_with(Arc::new(MemoryFileSystem::new()));

        let err = app.load_file::<TestObject>(FILENAME).unwrap_err();
        assert_eq!(err.message(), format!("Couldn't load file `{FILENAME}`"));
        let cause = err.cause().unwrap();
        assert_eq!(
            cause.downcast_ref::<io::Error>().unwrap().kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_load_empty_file_fails() {
        let app = app_with(Arc::new(MemoryFileSystem::with_files([(FILENAME, "")])));

        let err = app.load_file::<TestObject>(FILENAME).unwrap_err();
        assert_eq!(err.to_string(), format!("Couldn't load file `{FILENAME}`"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_load_wrong_shape_fails() {
        let app = app_with(Arc::new(MemoryFileSystem::with_files([(
            FILENAME,
            r#"{ "other": 1 }"#,
        )])));

        let err = app.load_file::<TestObject>(FILENAME).unwrap_err();
        assert_eq!(err.message(), format!("Couldn't load file `{FILENAME}`"));
    }

    #[test]
    fn test_saves_file() {
        let fs = Arc::new(MemoryFileSystem::new());
        let app = app_with(fs.clone());

        app.save_file(FILENAME, DATA).unwrap();
        assert_eq!(fs.read_to_string(Path::new(FILENAME)).unwrap(), DATA);
    }

    #[test]
    fn test_save_failure_is_command_error() {
        let mut fs = MockFileSystem::new();
        fs.expect_write()
            .withf(|path, contents| path == Path::new(FILENAME) && contents == DATA)
            .times(1)
            .returning(|_, _| Err(io::Error::other("write failed")));
        let app = app_with(Arc::new(fs));

        let err = app.save_file(FILENAME, DATA).unwrap_err();
        assert_eq!(err.message(), format!("Couldn't save file `{FILENAME}`"));
        assert_eq!(err.source().unwrap().to_string(), "write failed");
    }

    #[test]
    fn test_resolve() {
        let app = App::with_file_system("/project", Arc::new(MemoryFileSystem::new()));
        assert_eq!(app.resolve("addons.json"), Path::new("/project/addons.json"));
        if cfg!(unix) {
            assert_eq!(app.resolve("/etc/x"), Path::new("/etc/x"));
        }
    }

    #[test]
    fn test_load_manifest_from_working_dir() {
        let fs = MemoryFileSystem::with_files([(
            PathBuf::from("project").join("addons.json"),
            r#"{ "path": "vendor" }"#,
        )]);
        let app = App::with_file_system("project", Arc::new(fs));

        let manifest = app.load_manifest().unwrap();
        assert_eq!(manifest.addons_path, "vendor");
        assert!(manifest.addons.is_empty());
    }
}
