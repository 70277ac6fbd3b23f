//! User configuration for shellinject
//!
//! A single optional TOML file controls the integration policy and where the
//! bundled scripts are installed:
//!
//! ```toml
//! # Turn shell integration off entirely
//! enabled = false
//!
//! # Base path the bundled scripts are resolved against
//! install-root = "/opt/shellinject"
//! ```
//!
//! Config file location (first match wins):
//! 1. `--config` CLI flag
//! 2. `SHELLINJECT_CONFIG_PATH` environment variable
//! 3. `$XDG_CONFIG_HOME/shellinject/config.toml` or `~/.config/shellinject/config.toml`
//!    (`%APPDATA%\shellinject\config.toml` on Windows)
//!
//! `SHELLINJECT_ENABLED` and `SHELLINJECT_INSTALL_ROOT` override file values.
//! A missing file is not an error: defaults apply.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

use crate::inject::IntegrationPolicy;

pub const CONFIG_PATH_ENV_VAR: &str = "SHELLINJECT_CONFIG_PATH";
pub const ENABLED_ENV_VAR: &str = "SHELLINJECT_ENABLED";
pub const INSTALL_ROOT_ENV_VAR: &str = "SHELLINJECT_INSTALL_ROOT";

/// Override for user config path, set via --config CLI flag
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the user config path override (called from CLI --config flag)
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

pub fn get_config_path() -> Option<PathBuf> {
    // Priority 1: CLI --config flag
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    // Priority 2: Environment variable (also used by tests)
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("shellinject").join("config.toml"))
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        message: String,
    },
    InvalidEnv {
        var: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config file {}: {source}", path.display())
            }
            ConfigError::Parse { path, message } => {
                write!(f, "Invalid config file {}: {message}", path.display())
            }
            ConfigError::InvalidEnv { var, value } => {
                write!(f, "{var} must be true or false, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct UserConfig {
    /// Master switch for shell integration
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Base path for the bundled scripts; defaults to the executable's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_root: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            install_root: None,
        }
    }
}

impl UserConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. Config file
    /// 3. Environment variables (SHELLINJECT_*)
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match get_config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path)?,
            _ => Self::default(),
        };
        config.apply_env_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(value) = lookup(ENABLED_ENV_VAR) {
            self.enabled = parse_bool(ENABLED_ENV_VAR, &value)?;
        }
        if let Some(value) = lookup(INSTALL_ROOT_ENV_VAR).filter(|v| !v.is_empty()) {
            self.install_root = Some(PathBuf::from(value));
        }
        Ok(())
    }

    pub fn policy(&self) -> IntegrationPolicy {
        IntegrationPolicy {
            enabled: self.enabled,
        }
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}
