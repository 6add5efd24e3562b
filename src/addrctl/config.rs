use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILE: &str = "store.json";

/// Configuration for addrctl, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddrConfig {
    /// Store document, relative to the data directory unless absolute
    #[serde(default = "default_store_file")]
    pub store_file: String,
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

impl Default for AddrConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
        }
    }
}

impl AddrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: AddrConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.store_file)
    }
}
