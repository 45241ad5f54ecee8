//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.jot/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::store;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct JotConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding `items.json`.
    pub data_dir: Option<String>,
    /// Require a second `d` press before deleting an item.
    pub confirm_delete: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CONFIRM_DELETE: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub confirm_delete: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.jot/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".jot").join("config.toml"))
}

/// Load config from `~/.jot/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `JotConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<JotConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(JotConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(JotConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: JotConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Jot Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# data_dir = "/home/me/.jot"      # Or set JOT_DATA_DIR env var / --data-dir flag
# confirm_delete = true           # Press d twice to delete an item
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_data_dir` is from the `--data-dir` flag (None = not specified).
/// Fails only when no data directory can be determined at all (no flag, no
/// env var, no config entry, and no home directory).
pub fn resolve(config: &JotConfig, cli_data_dir: Option<&Path>) -> io::Result<ResolvedConfig> {
    // Data dir: CLI → env → config → ~/.jot
    let data_dir = match cli_data_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("JOT_DATA_DIR").map(PathBuf::from))
        .or_else(|| config.general.data_dir.as_deref().map(PathBuf::from))
    {
        Some(dir) => dir,
        None => store::default_data_dir()?,
    };

    Ok(ResolvedConfig {
        data_dir,
        confirm_delete: config
            .general
            .confirm_delete
            .unwrap_or(DEFAULT_CONFIRM_DELETE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = JotConfig::default();
        assert!(config.general.data_dir.is_none());
        assert!(config.general.confirm_delete.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = JotConfig::default();
        let resolved = resolve(&config, None).unwrap();
        assert!(resolved.confirm_delete);
        assert!(resolved.data_dir.ends_with(".jot"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = JotConfig {
            general: GeneralConfig {
                data_dir: Some("/tmp/jot-test".to_string()),
                confirm_delete: Some(false),
            },
        };
        let resolved = resolve(&config, None).unwrap();
        assert_eq!(resolved.data_dir, PathBuf::from("/tmp/jot-test"));
        assert!(!resolved.confirm_delete);
    }

    #[test]
    fn test_resolve_cli_data_dir_wins() {
        let config = JotConfig {
            general: GeneralConfig {
                data_dir: Some("/tmp/from-config".to_string()),
                confirm_delete: None,
            },
        };
        let resolved = resolve(&config, Some(Path::new("/tmp/from-cli"))).unwrap();
        assert_eq!(resolved.data_dir, PathBuf::from("/tmp/from-cli"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
confirm_delete = false
"#;
        let config: JotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.confirm_delete, Some(false));
        assert!(config.general.data_dir.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
data_dir = "/data/lists"
confirm_delete = true
"#;
        let config: JotConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.data_dir.as_deref(), Some("/data/lists"));
        assert_eq!(config.general.confirm_delete, Some(true));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result: Result<JotConfig, _> = toml::from_str("[general\ndata_dir = 3");
        assert!(result.is_err());
    }
}
