use crate::domain::{PreReleaseRule, Template};
use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "versionschema.toml";

/// Represents the complete configuration for version-schema.
///
/// Contains resolution settings and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default metadata file path.
fn default_metadata_file() -> PathBuf {
    PathBuf::from("version.json")
}

/// Configuration for version resolution.
///
/// Defines where repository metadata is read from and how a clean tag is rendered.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolveConfig {
    #[serde(default = "default_metadata_file")]
    pub metadata_file: PathBuf,

    #[serde(default)]
    pub format: Template,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            metadata_file: default_metadata_file(),
            format: Template::default(),
        }
    }
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Report every `0.x` version as a pre-release
    #[serde(default)]
    pub zero_major_is_pre_release: bool,
}

impl BehaviorConfig {
    /// Pre-release rule selected by this configuration
    pub fn pre_release_rule(&self) -> PreReleaseRule {
        if self.zero_major_is_pre_release {
            PreReleaseRule::ZeroMajor
        } else {
            PreReleaseRule::Explicit
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionschema.toml` in current directory
/// 3. `.versionschema.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE).exists() {
        PathBuf::from(CONFIG_FILE)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(format!(".{}", CONFIG_FILE));
        if !path.exists() {
            return Ok(Config::default());
        }
        path
    } else {
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");

    let config_str = fs::read_to_string(&path)
        .map_err(|e| VersionError::config(format!("{}: {}", path.display(), e)))?;

    toml::from_str(&config_str)
        .map_err(|e| VersionError::config(format!("{}: {}", path.display(), e)))
}
