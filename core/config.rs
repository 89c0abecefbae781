use crate::error::{ReaderError, Result};
use crate::remote::DEFAULT_BASE_URL;
use crate::tokens::Tokenizer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILENAME: &str = ".readerconfig.toml";
pub const DEFAULT_FETCH_TIMEOUT: &str = "10s";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub tokens: TokensConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct IgnoreConfig {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub detect_languages: bool,
    #[serde(default)]
    pub patterns: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct TokensConfig {
    #[serde(default)]
    pub count: bool,
    #[serde(default)]
    pub tokenizer: Tokenizer,
}

fn default_true() -> bool {
    true
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout() -> String {
    DEFAULT_FETCH_TIMEOUT.to_string()
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl RemoteConfig {
    pub fn timeout_duration(&self) -> Result<Duration> {
        let duration = parse_duration::parse(&self.timeout)?;
        if duration.is_zero() {
            return Err(ReaderError::Config(
                "remote.timeout must be greater than zero".to_string(),
            ));
        }
        Ok(duration)
    }
}

impl Config {
    /// Picks the config file to load: an explicit path must exist, the
    /// default one is used only if present.
    pub fn resolve_config_path(
        target_dir: &Path,
        explicit: Option<&PathBuf>,
        disabled: bool,
    ) -> Result<Option<PathBuf>> {
        if disabled {
            log::debug!("Config file loading disabled.");
            return Ok(None);
        }
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ReaderError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.clone()));
        }
        let default_path = target_dir.join(DEFAULT_CONFIG_FILENAME);
        if default_path.is_file() {
            log::debug!("Found config file: {}", default_path.display());
            Ok(Some(default_path))
        } else {
            log::trace!("No config file at {}", default_path.display());
            Ok(None)
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ReaderError::file_read(path, e))?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn load(target_dir: &Path, explicit: Option<&PathBuf>, disabled: bool) -> Result<Self> {
        match Self::resolve_config_path(target_dir, explicit, disabled)? {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }
}
