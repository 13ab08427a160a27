use crate::codec::{LineCodec, DEFAULT_DATE_FORMAT};
use crate::error::{Result, TodoError};
use crate::store::fs::DEFAULT_FILE_NAME;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Directory the store file lives in, overriding everything but `--file`.
pub const HOME_ENV: &str = "TODOLINE_HOME";
/// Directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "TODOLINE_CONFIG_DIR";

/// Configuration for todoline, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// Name of the store file inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// chrono format used when writing due dates (e.g. "%m/%d/%Y", "%Y-%m-%d")
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Where the store file lives; the user's documents folder when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            date_format: default_date_format(),
            data_dir: None,
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::FileAccess)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::FileAccess)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::FileAccess)?;
        Ok(())
    }

    pub fn codec(&self) -> Result<LineCodec> {
        LineCodec::new(&self.date_format)
    }

    /// Resolves the store file. Priority: explicit path, `TODOLINE_HOME`,
    /// `data_dir`, documents folder, home folder.
    pub fn store_path(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        let home_override = std::env::var_os(HOME_ENV).map(PathBuf::from);
        let dir = match home_override.or_else(|| self.data_dir.clone()) {
            Some(dir) => dir,
            None => documents_dir()?,
        };
        Ok(dir.join(&self.file_name))
    }
}

/// Platform config directory, or `TODOLINE_CONFIG_DIR` when set.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "todoline", "todoline")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("Could not determine config dir".to_string()))
}

fn documents_dir() -> Result<PathBuf> {
    let user_dirs = UserDirs::new()
        .ok_or_else(|| TodoError::Config("Could not determine home directory".to_string()))?;
    Ok(user_dirs
        .document_dir()
        .unwrap_or_else(|| user_dirs.home_dir())
        .to_path_buf())
}
