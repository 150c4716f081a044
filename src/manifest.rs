//! The addons manifest (`addons.json`) read by the installer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MANIFEST_FILE: &str = "addons.json";
pub const DEFAULT_ADDONS_PATH: &str = "addons";
pub const DEFAULT_CACHE_PATH: &str = ".addons";
pub const DEFAULT_CHECKOUT: &str = "main";
pub const DEFAULT_SUBFOLDER: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonsManifest {
    /// Directory the addons are installed into, relative to the project.
    #[serde(rename = "path", default = "default_addons_path")]
    pub addons_path: String,
    /// Directory holding cached clones.
    #[serde(rename = "cache", default = "default_cache_path")]
    pub cache_path: String,
    #[serde(rename = "addons", default)]
    pub addons: BTreeMap<String, AddonEntry>,
}

impl Default for AddonsManifest {
    fn default() -> Self {
        Self {
            addons_path: default_addons_path(),
            cache_path: default_cache_path(),
            addons: BTreeMap::new(),
        }
    }
}

impl AddonsManifest {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonEntry {
    #[serde(rename = "url")]
    pub url: String,
    /// Branch, tag or commit to check out.
    #[serde(rename = "checkout", default = "default_checkout")]
    pub checkout: String,
    /// Folder inside the repository that holds the addon.
    #[serde(rename = "subfolder", default = "default_subfolder")]
    pub subfolder: String,
    #[serde(rename = "symlink", default)]
    pub symlink: bool,
}

impl AddonEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            checkout: default_checkout(),
            subfolder: default_subfolder(),
            symlink: false,
        }
    }
}

fn default_addons_path() -> String {
    DEFAULT_ADDONS_PATH.to_string()
}

fn default_cache_path() -> String {
    DEFAULT_CACHE_PATH.to_string()
}

fn default_checkout() -> String {
    DEFAULT_CHECKOUT.to_string()
}

fn default_subfolder() -> String {
    DEFAULT_SUBFOLDER.to_string()
}
