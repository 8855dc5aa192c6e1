//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nvc-cards/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::session;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CardsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory holding the session snapshot.
    pub state_dir: Option<String>,
    /// Log file path (relative paths resolve against the working dir).
    pub log_file: Option<String>,
    /// One of: off, error, warn, info, debug, trace.
    pub log_level: Option<String>,
}

pub const DEFAULT_LOG_FILE: &str = "nvc-cards.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub state_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl ResolvedConfig {
    /// Path of the session snapshot inside the resolved state directory.
    pub fn session_path(&self) -> PathBuf {
        session::session_path(&self.state_dir)
    }
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

/// Returns the path to `~/.nvc-cards/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nvc-cards").join("config.toml"))
}

/// Load config from `~/.nvc-cards/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CardsConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CardsConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CardsConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CardsConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: CardsConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# NVC Cards Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# state_dir = "~/.nvc-cards"        # Or set NVC_CARDS_STATE_DIR
# log_file = "nvc-cards.log"        # Or set NVC_CARDS_LOG_FILE
# log_level = "info"                # off, error, warn, info, debug, trace
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

/// Resolve the final config by collapsing: defaults → config file → env
/// vars → CLI. `cli_*` arguments are from CLI flags (None = not specified).
pub fn resolve(
    config: &CardsConfig,
    cli_state_dir: Option<&str>,
    cli_log_level: Option<&str>,
) -> ResolvedConfig {
    // State dir: CLI → env → config → ~/.nvc-cards
    let state_dir = cli_state_dir
        .map(PathBuf::from)
        .or_else(|| std::env::var("NVC_CARDS_STATE_DIR").ok().map(PathBuf::from))
        .or_else(|| config.general.state_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(session::default_state_dir);

    // Log file: env → config → default
    let log_file = std::env::var("NVC_CARDS_LOG_FILE")
        .ok()
        .map(PathBuf::from)
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("NVC_CARDS_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    ResolvedConfig {
        state_dir,
        log_file,
        log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = CardsConfig::default();
        assert!(config.general.state_dir.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = CardsConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(resolved.state_dir.ends_with(".nvc-cards"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = CardsConfig {
            general: GeneralConfig {
                state_dir: Some("/tmp/cards-state".to_string()),
                log_file: Some("/tmp/cards.log".to_string()),
                log_level: Some("debug".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.state_dir, PathBuf::from("/tmp/cards-state"));
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/cards.log"));
        assert_eq!(resolved.log_level, "debug");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = CardsConfig {
            general: GeneralConfig {
                state_dir: Some("/from-config".to_string()),
                log_file: None,
                log_level: Some("warn".to_string()),
            },
        };
        let resolved = resolve(&config, Some("/from-cli"), Some("trace"));
        assert_eq!(resolved.state_dir, PathBuf::from("/from-cli"));
        assert_eq!(resolved.log_level, "trace");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[general]
log_level = "debug"
"#;
        let config: CardsConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level.as_deref(), Some("debug"));
        assert!(config.general.state_dir.is_none());
    }

    #[test]
    fn test_session_path_lives_under_state_dir() {
        let resolved = ResolvedConfig {
            state_dir: PathBuf::from("/tmp/s"),
            log_file: PathBuf::from("x.log"),
            log_level: "info".to_string(),
        };
        assert_eq!(resolved.session_path(), PathBuf::from("/tmp/s/session.json"));
    }
}
