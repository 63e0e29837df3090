use crate::config::types::{ConfigFile, LegacyConfig, LoggingConfig, Profile, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

/// Profile name given to a legacy JSON config.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("failed to parse JSON in {0}: {1}")]
    JsonError(String, #[source] serde_json::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,

    #[error("failed to write config file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] toml::ser::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf = if is_json(&path) {
            let legacy: LegacyConfig = serde_json::from_str(&s)
                .map_err(|e| ConfigError::JsonError(path.display().to_string(), e))?;
            debug!(path = %path.display(), "loaded legacy JSON config");
            ConfigFile::single(
                DEFAULT_PROFILE,
                Profile {
                    vault_path: legacy.vault_path,
                    output_path: legacy.output_path,
                    excluded_folders: Vec::new(),
                },
            )
        } else {
            toml::from_str(&s)
                .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?
        };

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }
        if cf.profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let active = profile_override
            .map(ToOwned::to_owned)
            .or(cf.profile.clone())
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

        let prof = cf
            .profiles
            .get(&active)
            .ok_or_else(|| ConfigError::ProfileNotFound(active.clone()))?;

        Self::resolve_profile(&active, prof, &cf.logging)
    }

    fn resolve_profile(
        active: &str,
        prof: &Profile,
        log_cfg: &LoggingConfig,
    ) -> Result<ResolvedConfig, ConfigError> {
        let vault_path = expand_path(&prof.vault_path)?;
        let sub = |s: &str| s.replace("{{vault_path}}", &vault_path.to_string_lossy());

        let output_path = expand_path(&sub(&prof.output_path))?;
        let excluded_folders = prof.excluded_folders.iter().map(PathBuf::from).collect();

        // Resolve log file path if present
        let logging = if let Some(ref file) = log_cfg.file {
            let expanded_file = expand_path(&sub(&file.to_string_lossy()))?;
            LoggingConfig {
                level: log_cfg.level.clone(),
                file_level: log_cfg.file_level.clone(),
                file: Some(expanded_file),
            }
        } else {
            log_cfg.clone()
        };

        Ok(ResolvedConfig {
            active_profile: active.to_string(),
            vault_path,
            output_path,
            excluded_folders,
            logging,
        })
    }
}

/// Write `config` as TOML, creating parent directories.
pub fn save_config(path: &Path, config: &ConfigFile) -> Result<(), ConfigError> {
    let s = toml::to_string_pretty(config).map_err(ConfigError::SerializeError)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ConfigError::WriteError(path.display().to_string(), e))?;
    }
    fs::write(path, s).map_err(|e| ConfigError::WriteError(path.display().to_string(), e))
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("vault-indexer").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("vault-indexer").join("config.toml")
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_plain_path() {
        assert_eq!(expand_path("/tmp/vault").unwrap(), PathBuf::from("/tmp/vault"));
    }

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("config.json")));
        assert!(is_json(Path::new("config.JSON")));
        assert!(!is_json(Path::new("config.toml")));
        assert!(!is_json(Path::new("json")));
    }
}
