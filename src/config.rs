use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::{CleanerError, Result};

/// Top-level configuration, loaded from an optional TOML file.
/// Every section and field falls back to a built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub base_dir: PathBuf,
    pub raw_dir: PathBuf,
    pub clean_dir: PathBuf,
    pub corpus_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            raw_dir: PathBuf::from(constants::DEFAULT_RAW_DIR),
            clean_dir: PathBuf::from(constants::DEFAULT_CLEAN_DIR),
            corpus_file: PathBuf::from(constants::DEFAULT_CORPUS_FILE),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Create missing parent directories before writing the cleaned corpus
    pub create_parent_dirs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            create_parent_dirs: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for the rolling JSON log file; `None` disables the file sink
    pub directory: Option<PathBuf>,
    pub file_name: String,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: Some(PathBuf::from(constants::DEFAULT_LOG_DIR)),
            file_name: constants::DEFAULT_LOG_FILE.to_string(),
            filter: constants::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from `corpus_cleaner.toml` in the
    /// working directory when it exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(constants::DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CleanerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.paths.corpus_file.as_os_str().is_empty() {
            return Err(CleanerError::Config(
                "paths.corpus_file must not be empty".to_string(),
            ));
        }
        Ok(config)
    }
}

impl PathsConfig {
    pub fn input_path(&self) -> PathBuf {
        self.base_dir.join(&self.raw_dir).join(&self.corpus_file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.clean_dir).join(&self.corpus_file)
    }
}
