use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Current config format version.
pub const CONFIG_VERSION: u32 = 1;

#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    pub vault_path: String,
    pub output_path: String,
    /// Folders to leave out of the index (relative to vault_path).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_folders: Vec<String>,
}

/// Single-vault config file in the older JSON layout.
#[derive(Debug, Deserialize)]
pub struct LegacyConfig {
    pub vault_path: String,
    pub output_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ConfigFile {
    /// A config holding one profile, which is also the active one.
    pub fn single(name: &str, profile: Profile) -> Self {
        Self {
            version: CONFIG_VERSION,
            profile: Some(name.to_string()),
            profiles: HashMap::from([(name.to_string(), profile)]),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_path: PathBuf,
    pub output_path: PathBuf,
    /// Folders to leave out of the index (relative to the vault).
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
}
