use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the config file looked up in the site root.
pub const FILE_NAME: &str = "press.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout: where sources live and where the generated site goes.
/// Relative paths are resolved against the site root.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_template_path() -> PathBuf {
    PathBuf::from("template.html")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            static_dir: default_static_dir(),
            output_dir: default_output_dir(),
            template_path: default_template_path(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured paths
        config.content_dir = Self::expand_path(&config.content_dir).unwrap_or(config.content_dir);
        config.static_dir = Self::expand_path(&config.static_dir).unwrap_or(config.static_dir);
        config.output_dir = Self::expand_path(&config.output_dir).unwrap_or(config.output_dir);
        config.template_path =
            Self::expand_path(&config.template_path).unwrap_or(config.template_path);

        Ok(Some(config))
    }

    /// Load `press.toml` from the site root, `None` when there isn't one.
    pub fn load_from_root<P: AsRef<Path>>(site_root: P) -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(site_root.as_ref().join(FILE_NAME))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
