use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `<home>/config.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output format used when a command is run without `--output`.
    #[serde(default = "default_output")]
    pub default_output: String,

    /// Tracing filter directive, e.g. `credset=debug`.
    #[serde(default)]
    pub log_level: Option<String>,

    /// Resolved home directory. Not read from the file.
    #[serde(skip)]
    pub home: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_output: default_output(),
            log_level: None,
            home: PathBuf::new(),
        }
    }
}

fn default_output() -> String {
    "table".to_string()
}

impl AppConfig {
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory holding one file per credential set.
    pub fn credentials_dir(&self) -> PathBuf {
        self.home.join("credentials")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_fields_missing() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.default_output, "table");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn credentials_dir_is_under_home() {
        let config = AppConfig {
            home: PathBuf::from("/tmp/credset-home"),
            ..AppConfig::default()
        };
        assert_eq!(
            config.credentials_dir(),
            PathBuf::from("/tmp/credset-home/credentials")
        );
    }
}
