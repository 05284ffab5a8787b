use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use super::defaults::{default_assistant_name, default_log_dir};
use super::SoundConfiguration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Catalog to answer from, the embedded catalog is used if not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    #[serde(default = "default_log_dir")]
    log_dir: PathBuf,

    #[serde(default)]
    pub sound: SoundConfiguration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            catalog_path: None,
            log_dir: default_log_dir(),
            sound: SoundConfiguration::default(),
        }
    }
}

impl Config {
    /// Loads the configuration file at `path`
    ///
    /// A missing file is not an error, the defaults are used instead.
    pub async fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Ok(Config::default());
        }

        let file = tokio::fs::read(path)
            .await
            .with_context(|| format!("Could not read `{}`", path.display()))?;

        toml::from_str(std::str::from_utf8(&file)?).context("Failed to parse configuration")
    }

    pub fn log_dir(&self) -> &Path {
        self.log_dir.as_path()
    }
}
