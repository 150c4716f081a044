//! Application shell for the addon installer: working directory, file
//! access, JSON loading and process launching, with every failure surfaced
//! as a [`CommandError`].

pub mod app;
pub mod error;
pub mod fs;
pub mod logging;
pub mod manifest;
pub mod shell;
pub mod test_utils;
pub mod utils;

pub use app::{App, AppBuilder};
pub use error::CommandError;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use manifest::{AddonEntry, AddonsManifest};
pub use shell::{Platform, Shell, ShellOutput};
