//! Configuration loader with tier-based merging.

use super::merge::deep_merge_all;
use super::types::Config;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the config file looked up in each tier directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Configuration tier priority (lowest to highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    /// `$CWD/taskloom/`
    Project = 1,
    /// `~/.taskloom/`
    User = 2,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
        }
    }
}

/// Directories searched for tiered config files.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub project_dir: Option<PathBuf>,
    pub user_dir: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// Discover tier directories from the environment and defaults.
    pub fn discover() -> Self {
        let user_dir = std::env::var("TASKLOOM_USER_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".taskloom")));

        let project_dir = std::env::var("TASKLOOM_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from("taskloom")));

        Self {
            project_dir,
            user_dir,
        }
    }

    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
        }
    }
}

/// Loaded configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: Config,
    /// Highest-priority file that contributed, if any.
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Load configuration from all tiers and the process environment.
    ///
    /// An explicit file (argument, else `TASKLOOM_CONFIG_PATH`) replaces the
    /// file tiers entirely.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("TASKLOOM_CONFIG_PATH").ok().map(PathBuf::from));
        Self::load_with(ConfigPaths::discover(), explicit.as_deref(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Load configuration with explicit paths and environment lookup.
    pub fn load_with<F>(paths: ConfigPaths, explicit: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = explicit {
            let mut config = Config::load(path)
                .with_context(|| format!("failed to load config file {}", path.display()))?;
            Self::apply_env_overrides(&mut config, &env);
            return Ok(Self {
                config,
                config_path: Some(path.to_path_buf()),
            });
        }

        let mut configs: Vec<Value> = vec![serde_json::to_value(Config::default())?];
        let mut config_path = None;

        let tiers = [
            (ConfigTier::Project, paths.project_dir.as_deref()),
            (ConfigTier::User, paths.user_dir.as_deref()),
        ];
        for (tier, dir) in tiers {
            let Some(dir) = dir else { continue };
            let file = dir.join(CONFIG_FILE);
            if let Some(value) = read_yaml(&file) {
                debug!(%tier, path = %file.display(), "Loaded config tier");
                configs.push(value);
                config_path = Some(file);
            }
        }

        let merged = deep_merge_all(configs);
        let mut config: Config = serde_json::from_value(merged)?;
        Self::apply_env_overrides(&mut config, &env);

        Ok(Self {
            config,
            config_path,
        })
    }

    fn apply_env_overrides<F>(config: &mut Config, env: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(db_path) = env("TASKLOOM_DB_PATH") {
            config.storage.db_path = Some(PathBuf::from(db_path));
        }

        if let Some(prompt) = env("TASKLOOM_PROMPT") {
            config.shell.prompt = prompt;
        }

        if let Some(flag) = env("TASKLOOM_NO_BANNER") {
            if matches!(flag.as_str(), "1" | "true") {
                config.shell.banner = false;
            }
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

/// Parse a YAML file, skipping (with a warning) files that fail to parse.
fn read_yaml(file: &Path) -> Option<Value> {
    if !file.exists() {
        return None;
    }
    let content = match std::fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %file.display(), error = %e, "Failed to read config file");
            return None;
        }
    };
    match serde_yaml::from_str::<Value>(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %file.display(), error = %e, "Failed to parse config file");
            None
        }
    }
}
