//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.marquee/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The TMDB API key is always supplied externally (file or `TMDB_API_KEY`
//! env var), never compiled into the binary.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::tmdb::client::{DEFAULT_BASE_URL, DEFAULT_LANGUAGE};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TmdbConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub image_base_url: Option<String>,
    pub language: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// None means no key was found anywhere; startup reports this.
    pub api_key: Option<String>,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
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

/// Returns the path to `~/.marquee/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".marquee").join("config.toml"))
}

/// Load config from `~/.marquee/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MarqueeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MarqueeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MarqueeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MarqueeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MarqueeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Marquee Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [tmdb]
# api_key = "..."                                  # Or set TMDB_API_KEY env var
# base_url = "https://api.themoviedb.org/3"
# image_base_url = "https://image.tmdb.org/t/p/w500"
# language = "en-US"
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
/// vars → CLI.
///
/// `cli_language` is from the `--language` flag (None = not specified).
pub fn resolve(config: &MarqueeConfig, cli_language: Option<&str>) -> ResolvedConfig {
    // API key: env → config (never a built-in default)
    let api_key = std::env::var("TMDB_API_KEY")
        .ok()
        .or_else(|| config.tmdb.api_key.clone());

    // Base URL: env → config → default
    let base_url = std::env::var("TMDB_BASE_URL")
        .ok()
        .or_else(|| config.tmdb.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Image base URL: env → config → default
    let image_base_url = std::env::var("TMDB_IMAGE_BASE_URL")
        .ok()
        .or_else(|| config.tmdb.image_base_url.clone())
        .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());

    // Language: CLI → env → config → default
    let language = cli_language
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MARQUEE_LANGUAGE").ok())
        .or_else(|| config.tmdb.language.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

    ResolvedConfig {
        api_key,
        base_url,
        image_base_url,
        language,
    }
}
