// Configuration module for tabsift
// This module handles loading and parsing configuration from ~/.config/tabsift/config.toml

mod types;

pub use types::{Config, HighlightConfig, OutputConfig, OutputFormat};

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/tabsift/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from_path(&get_config_path())
}

/// Loads configuration from an explicit path, with the same fallbacks as [`load_config`]
pub fn load_config_from_path(config_path: &Path) -> ConfigResult {
    debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            debug!("Config parsed successfully: {:?}", config.output.format);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/tabsift/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("tabsift")
        .join("config.toml")
}
