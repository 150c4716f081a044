//! Assertion helpers for command errors and written files.

use crate::error::CommandError;
use std::path::Path;

/// Asserts that `result` failed with exactly `expected_message` and that the
/// original cause was kept.
pub fn assert_command_error<T: std::fmt::Debug>(
    result: Result<T, CommandError>,
    expected_message: &str,
) -> CommandError {
    let err = match result {
        Ok(value) => panic!("Expected a command error, got Ok({value:?})"),
        Err(err) => err,
    };
    assert_eq!(err.message(), expected_message);
    assert!(
        err.cause().is_some(),
        "Expected command error `{expected_message}` to carry a cause"
    );
    err
}

/// Asserts that a file on disk holds exactly `expected`.
pub fn assert_file_contents<P: AsRef<Path>>(path: P, expected: &str) {
    let path = path.as_ref();
    let actual = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert_eq!(
        actual,
        expected,
        "Unexpected contents in {}",
        path.display()
    );
}
