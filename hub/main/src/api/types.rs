//! Data types for hub API operations

use crate::api::error::{HubError, HubResult};
use std::path::PathBuf;

/// An installed (or freshly downloaded) model package
#[derive(Debug, Clone)]
pub struct PackageBundle {
    /// Package name
    pub name: String,
    /// Path to the package directory
    pub package_dir: PathBuf,
}

impl PackageBundle {
    /// Get path to meta.json
    pub fn meta_path(&self) -> PathBuf {
        self.package_dir.join("meta.json")
    }

    /// Get path to config.json
    pub fn config_path(&self) -> PathBuf {
        self.package_dir.join("config.json")
    }

    /// Get path to vocab.json
    pub fn vocab_path(&self) -> PathBuf {
        self.package_dir.join("vocab.json")
    }

    /// Load package metadata
    pub fn load_meta(&self) -> HubResult<serde_json::Value> {
        let content = std::fs::read_to_string(self.meta_path())?;
        serde_json::from_str(&content).map_err(|e| HubError::ParseError(e.to_string()))
    }
}
