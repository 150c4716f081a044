#![allow(dead_code)]

use addon_installer::{App, OsFileSystem};
use serde::Deserialize;
use std::sync::Arc;
use tempfile::TempDir;

pub const DATA: &str = "data";

#[derive(Debug, Deserialize)]
pub struct TestObject {
    #[serde(rename = "test")]
    pub test: String,
}

pub fn test_json() -> String {
    format!("{{ \"test\": \"{DATA}\" }}")
}

/// An app on the real filesystem rooted in a fresh temporary directory
pub fn temp_app() -> (TempDir, App) {
    let temp_dir = TempDir::new().unwrap();
    let app = App::with_file_system(temp_dir.path(), Arc::new(OsFileSystem::new()));
    (temp_dir, app)
}

/// Common assertion helper for error messages
pub fn assert_error_contains(error_string: &str, expected_messages: &[&str]) {
    for msg in expected_messages {
        assert!(
            error_string.contains(msg),
            "Expected error to contain '{msg}', but got: {error_string}"
        );
    }
}
