use crate::api::AddressApi;
use crate::config::AddrConfig;
use crate::error::{AddrError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "ADDRCTL_HOME";

pub struct AddrContext {
    pub api: AddressApi<FileStore>,
    pub config: AddrConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory: an explicit home wins over the platform default.
pub fn resolve_data_dir(home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(home) = home.filter(|h| !h.as_os_str().is_empty()) {
        return Ok(home);
    }
    ProjectDirs::from("com", "addrctl", "addrctl")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddrError::Config("could not determine a data directory".to_string()))
}

/// Loads config and opens the backing store once, before any command runs.
pub fn initialize(data_dir: &Path, store_override: Option<&Path>) -> Result<AddrContext> {
    let config = AddrConfig::load(data_dir)?;
    let store_path = match store_override {
        Some(path) => path.to_path_buf(),
        None => config.store_path(data_dir),
    };
    debug!(data_dir = %data_dir.display(), store = %store_path.display(), "initializing");

    let store = FileStore::open(store_path)?;
    Ok(AddrContext {
        api: AddressApi::new(store),
        config,
        data_dir: data_dir.to_path_buf(),
    })
}
