use credset_common::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::model::AppConfig;

pub const HOME_ENV: &str = "CREDSET_HOME";
const CONFIG_FILE: &str = "config.yml";

/// Resolves the credset home directory and loads `config.yml` from it.
///
/// Home resolution order: explicit override, `CREDSET_HOME`, `~/.credset`.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    home_override: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home_override: Some(home.into()),
        }
    }

    pub fn resolve_home(&self) -> Result<PathBuf> {
        if let Some(home) = &self.home_override {
            return Ok(home.clone());
        }

        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir()
            .map(|dir| dir.join(".credset"))
            .ok_or_else(|| Error::Config("could not determine home directory".into()))
    }

    /// Load configuration. A missing file yields defaults.
    pub fn load(&self) -> Result<AppConfig> {
        let home = self.resolve_home()?;
        let path = home.join(CONFIG_FILE);

        let mut config = if path.is_file() {
            Self::read_file(&path)?
        } else {
            debug!("no config file at {}, using defaults", path.display());
            AppConfig::default()
        };
        config.home = home;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        // An empty file parses as YAML null.
        if content.trim().is_empty() {
            return Ok(AppConfig::default());
        }

        let config: AppConfig = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid {}: {e}", path.display())))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
