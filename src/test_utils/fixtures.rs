//! Sample data for tests.

use crate::app::App;
use crate::fs::MemoryFileSystem;
use crate::manifest::{AddonEntry, AddonsManifest};
use std::path::PathBuf;
use std::sync::Arc;

/// A manifest with two addons, one using every default.
pub fn sample_manifest_json() -> &'static str {
    r#"{
  "path": "addons",
  "cache": ".addons",
  "addons": {
    "go_dot_test": {
      "url": "https://github.com/chickensoft-games/go_dot_test.git",
      "checkout": "v1.2.0",
      "subfolder": "/addons/go_dot_test",
      "symlink": true
    },
    "logger": {
      "url": "https://github.com/example/logger.git"
    }
  }
}"#
}

/// The value [`sample_manifest_json`] decodes to.
pub fn sample_manifest() -> AddonsManifest {
    let mut manifest = AddonsManifest::default();
    manifest.addons.insert(
        "go_dot_test".to_string(),
        AddonEntry {
            url: "https://github.com/chickensoft-games/go_dot_test.git".to_string(),
            checkout: "v1.2.0".to_string(),
            subfolder: "/addons/go_dot_test".to_string(),
            symlink: true,
        },
    );
    manifest.addons.insert(
        "logger".to_string(),
        AddonEntry::new("https://github.com/example/logger.git"),
    );
    manifest
}

/// An app over an in-memory filesystem, returning both so the test can
/// inspect what was written.
pub fn memory_app<I, P, S>(
    working_dir: impl Into<PathBuf>,
    files: I,
) -> (App, Arc<MemoryFileSystem>)
where
    I: IntoIterator<Item = (P, S)>,
    P: Into<PathBuf>,
    S: Into<String>,
{
    let fs = Arc::new(MemoryFileSystem::with_files(files));
    (App::with_file_system(working_dir, fs.clone()), fs)
}
