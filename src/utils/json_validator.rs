//! Guards applied to JSON text before it is decoded into a typed value.

use anyhow::{Context, Result};
use serde_json::Value;

/// Maximum allowed JSON depth.
pub const MAX_JSON_DEPTH: usize = 100;

/// Maximum accepted document size (10MB).
pub const MAX_JSON_SIZE: usize = 10 * 1024 * 1024;

/// Check size, syntax and nesting depth of a JSON document.
///
/// Empty input is rejected as a syntax error.
pub fn validate_json_input(json_str: &str) -> Result<()> {
    if json_str.len() > MAX_JSON_SIZE {
        anyhow::bail!(
            "JSON input too large: {} bytes exceeds maximum of {} bytes",
            json_str.len(),
            MAX_JSON_SIZE
        );
    }

    let value: Value = serde_json::from_str(json_str).context("Invalid JSON syntax")?;

    let depth = json_depth(&value);
    if depth > MAX_JSON_DEPTH {
        anyhow::bail!(
            "JSON nesting too deep: {} levels exceeds maximum of {}",
            depth,
            MAX_JSON_DEPTH
        );
    }

    Ok(())
}

/// Validate, then deserialize into `T`.
///
/// A document that decodes to `null` is accepted only when `T` itself
/// accepts `null` (e.g. `Option<_>`).
///
/// # Example
/// ```rust,no_run
/// use addon_installer::utils::json_validator;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Entry {
///     url: String,
/// }
///
/// let entry: Entry = json_validator::deserialize_json_safe(r#"{"url": "x"}"#)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn deserialize_json_safe<T>(json_str: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    validate_json_input(json_str)?;
    serde_json::from_str(json_str).with_context(|| {
        format!(
            "Failed to deserialize JSON into {}",
            std::any::type_name::<T>()
        )
    })
}

fn json_depth(value: &Value) -> usize {
    match value {
        Value::Object(map) => 1 + map.values().map(json_depth).max().unwrap_or(0),
        Value::Array(arr) => 1 + arr.iter().map(json_depth).max().unwrap_or(0),
        _ => 1,
    }
}
