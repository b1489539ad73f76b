//! Configuration types and structures.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

/// Where and how the todo database is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database file used when none is given on the command line.
    #[serde(default)]
    pub db_path: Option<PathBuf>,

    /// Create the database file's parent directory on startup.
    #[serde(default = "default_true")]
    pub create_parent_dirs: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            create_parent_dirs: default_true(),
        }
    }
}

/// Interactive shell presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Print the block-letter banner at startup.
    #[serde(default = "default_true")]
    pub banner: bool,

    /// Text printed before each command is read.
    #[serde(default)]
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: default_true(),
            prompt: String::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a single YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Ensure the directory holding `db_path` exists.
    pub fn ensure_db_dir(&self, db_path: &Path) -> Result<()> {
        if !self.storage.create_parent_dirs {
            return Ok(());
        }
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
