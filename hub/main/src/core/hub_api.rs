//! Registry client with a synchronous download path.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;

use crate::api::error::{HubError, HubResult};
use crate::api::types::PackageBundle;

/// Files fetched for every package. The first two must exist for a package
/// to count as installed; the rest are component lookups a package may or
/// may not ship.
const REQUIRED_FILES: &[&str] = &["meta.json", "config.json"];
const OPTIONAL_FILES: &[&str] = &["vocab.json", "tagger.json", "lemmatizer.json", "ner.json"];

/// Extended timeout: package downloads may be large and slow.
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(100_000);

const DEFAULT_REGISTRY: &str =
    "https://raw.githubusercontent.com/sweengineeringlabs/rustnlp-models/main";

/// Registry API client
#[derive(Debug, Clone)]
pub struct HubApi {
    /// Base URL for the package registry
    base_url: String,
    /// Cache directory for installed packages
    cache_dir: PathBuf,
}

impl Default for HubApi {
    fn default() -> Self {
        Self::new()
    }
}

impl HubApi {
    /// Create a new registry client.
    ///
    /// The cache directory comes from `RUSTNLP_CACHE_DIR` when set, else the
    /// platform cache dir; the registry base from `RUSTNLP_REGISTRY`.
    pub fn new() -> Self {
        let cache_dir = match std::env::var_os("RUSTNLP_CACHE_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rustnlp")
                .join("packages"),
        };
        let base_url =
            std::env::var("RUSTNLP_REGISTRY").unwrap_or_else(|_| DEFAULT_REGISTRY.to_string());
        Self {
            base_url,
            cache_dir,
        }
    }

    /// Create with custom cache directory
    pub fn with_cache_dir(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            ..Self::new()
        }
    }

    /// Get the cache directory
    pub fn cache_dir(&self) -> &PathBuf {
        &self.cache_dir
    }

    /// Get the registry base URL
    pub fn registry(&self) -> &str {
        &self.base_url
    }

    fn entry_dir(&self, name: &str) -> PathBuf {
        self.cache_dir.join(name.replace('/', "--"))
    }

    /// Check if a package is installed locally
    pub fn is_installed(&self, name: &str) -> bool {
        let dir = self.entry_dir(name);
        REQUIRED_FILES.iter().all(|file| dir.join(file).exists())
    }

    /// Get an installed package bundle without downloading
    pub fn get_installed(&self, name: &str) -> Option<PackageBundle> {
        if self.is_installed(name) {
            Some(PackageBundle {
                name: name.to_string(),
                package_dir: self.entry_dir(name),
            })
        } else {
            None
        }
    }

    /// List installed packages, cache directory names reconstructed to
    /// package names.
    pub fn installed_packages(&self) -> HubResult<Vec<PackageBundle>> {
        let mut bundles = Vec::new();
        if !self.cache_dir.exists() {
            return Ok(bundles);
        }
        for entry in std::fs::read_dir(&self.cache_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let dir_name = entry.file_name();
            let name = dir_name.to_string_lossy().replacen("--", "/", 1);
            if let Some(bundle) = self.get_installed(&name) {
                bundles.push(bundle);
            }
        }
        bundles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(bundles)
    }

    /// Download a package from the registry (synchronous)
    ///
    /// Already-installed packages are left untouched. A failed required
    /// download removes the partial cache entry so the package never
    /// appears installed.
    pub fn download_package(&self, name: &str) -> HubResult<PackageBundle> {
        if let Some(bundle) = self.get_installed(name) {
            debug!("package {name} already installed");
            return Ok(bundle);
        }

        let package_dir = self.entry_dir(name);
        std::fs::create_dir_all(&package_dir)?;

        let client = reqwest::blocking::Client::builder()
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| HubError::NetworkError(format!("Failed to create client: {e}")))?;

        for file in REQUIRED_FILES {
            if let Err(e) = self.download_file(&client, name, file, &package_dir) {
                let _ = std::fs::remove_dir_all(&package_dir);
                return Err(e);
            }
        }
        for file in OPTIONAL_FILES {
            if let Err(e) = self.download_file(&client, name, file, &package_dir) {
                debug!("skipping optional {file}: {e}");
            }
        }

        Ok(PackageBundle {
            name: name.to_string(),
            package_dir,
        })
    }

    fn download_file(
        &self,
        client: &reqwest::blocking::Client,
        name: &str,
        filename: &str,
        dest_dir: &Path,
    ) -> HubResult<()> {
        let url = format!("{}/{}/{}", self.base_url, name, filename);
        debug!("fetching {url}");

        let response = client
            .get(&url)
            .send()
            .map_err(|e| HubError::NetworkError(format!("Failed to download {filename}: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(HubError::PackageNotFound(format!("{name}/{filename}")));
        }
        if !response.status().is_success() {
            return Err(HubError::NetworkError(format!(
                "Failed to download {}: HTTP {}",
                filename,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| HubError::NetworkError(format!("Failed to read response: {e}")))?;
        std::fs::write(dest_dir.join(filename), &bytes)?;

        Ok(())
    }
}
