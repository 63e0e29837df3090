//! Interactive first-run setup.
//!
//! When the indexer is started on a terminal with no paths and no config
//! file, it asks for the vault and output locations and can save them as
//! the default profile.

use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::io;
use std::path::{Path, PathBuf};
use vault_indexer_core::config::loader::{DEFAULT_PROFILE, expand_path, save_config};
use vault_indexer_core::config::types::{ConfigFile, Profile};

/// Default output location offered for a given vault.
const DEFAULT_OUTPUT: &str = "{{vault_path}}/../vault_index.md";

/// Paths collected from the user.
#[derive(Debug, Clone)]
pub struct SetupAnswers {
    pub vault_path: PathBuf,
    pub output_path: PathBuf,
}

/// Error type for interactive setup.
#[derive(Debug)]
pub enum PromptError {
    /// IO error during prompting.
    Io(io::Error),
    /// User cancelled input.
    Cancelled,
    /// An answer could not be turned into a path.
    BadPath(String),
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptError::Io(e) => write!(f, "IO error: {e}"),
            PromptError::Cancelled => write!(f, "input cancelled by user"),
            PromptError::BadPath(msg) => write!(f, "invalid path: {msg}"),
        }
    }
}

impl std::error::Error for PromptError {}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}

/// Ask for the vault and output paths, then offer to save them to
/// `config_path`.
pub fn run_setup(config_path: &Path) -> Result<SetupAnswers, PromptError> {
    let theme = ColorfulTheme::default();

    eprintln!("No configuration found. Let's set up the vault indexer.");

    let vault_raw: String = Input::with_theme(&theme)
        .with_prompt("Path to your Obsidian vault")
        .validate_with(|input: &String| -> Result<(), String> {
            match expand_path(input.trim()) {
                Ok(p) if p.is_dir() => Ok(()),
                Ok(p) => Err(format!("not a directory: {}", p.display())),
                Err(e) => Err(e.to_string()),
            }
        })
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;
    let vault_raw = vault_raw.trim().to_string();

    let output_raw: String = Input::with_theme(&theme)
        .with_prompt("Where should the index be written")
        .default(DEFAULT_OUTPUT.to_string())
        .interact_text()
        .map_err(dialoguer_error_to_prompt_error)?;
    let output_raw = output_raw.trim().to_string();

    let vault_path = expand_path(&vault_raw).map_err(|e| PromptError::BadPath(e.to_string()))?;
    let output_path = expand_path(
        &output_raw.replace("{{vault_path}}", &vault_path.to_string_lossy()),
    )
    .map_err(|e| PromptError::BadPath(e.to_string()))?;

    let save = Confirm::with_theme(&theme)
        .with_prompt(format!("Save these settings to {}?", config_path.display()))
        .default(true)
        .interact()
        .map_err(dialoguer_error_to_prompt_error)?;

    if save {
        let profile = Profile {
            vault_path: vault_raw,
            output_path: output_raw,
            excluded_folders: Vec::new(),
        };
        match save_config(config_path, &ConfigFile::single(DEFAULT_PROFILE, profile)) {
            Ok(()) => eprintln!("Saved configuration to {}", config_path.display()),
            // Indexing can still go ahead with the answers in hand.
            Err(e) => eprintln!("Warning: {e}"),
        }
    }

    Ok(SetupAnswers { vault_path, output_path })
}

/// Convert dialoguer error to our PromptError.
fn dialoguer_error_to_prompt_error(e: dialoguer::Error) -> PromptError {
    match e {
        dialoguer::Error::IO(io_err) => {
            if io_err.kind() == io::ErrorKind::UnexpectedEof
                || io_err.kind() == io::ErrorKind::Interrupted
            {
                PromptError::Cancelled
            } else {
                PromptError::Io(io_err)
            }
        }
    }
}
