//! The index command: resolve paths, walk the vault, write the report.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use tabled::{Table, Tabled, settings::Style};
use tracing::info;
use vault_indexer_core::config::loader::{
    ConfigError, ConfigLoader, default_config_path, expand_path,
};
use vault_indexer_core::config::types::{LoggingConfig, ResolvedConfig};
use vault_indexer_core::report::{IndexReport, render, render_json, write_report};
use vault_indexer_core::vault::VaultWalker;

use crate::Cli;
use crate::logging;
use crate::prompt::{self, PromptError};

/// Everything needed to run one indexing pass.
#[derive(Debug)]
struct Target {
    vault: PathBuf,
    output: PathBuf,
    excluded_folders: Vec<PathBuf>,
    logging: LoggingConfig,
}

impl Target {
    fn from_config(rc: ResolvedConfig, cli: &Cli) -> Self {
        Self {
            vault: cli.vault.as_deref().map_or(rc.vault_path, expand_or_exit),
            output: cli.output.as_deref().map_or(rc.output_path, expand_or_exit),
            excluded_folders: rc.excluded_folders,
            logging: rc.logging,
        }
    }

    fn from_paths(vault: PathBuf, output: PathBuf) -> Self {
        Self { vault, output, excluded_folders: Vec::new(), logging: LoggingConfig::default() }
    }
}

#[derive(Tabled)]
struct PatternRow {
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(rename = "Count")]
    count: u64,
}

pub fn run(cli: &Cli) {
    let target = resolve_target(cli);
    logging::init(&target.logging, cli.verbose);

    let walker = match VaultWalker::with_exclusions(&target.vault, target.excluded_folders) {
        Ok(w) => w,
        Err(e) => fail(&e),
    };

    println!("Indexing vault: {}", walker.root().display());
    info!(vault = %walker.root().display(), output = %target.output.display(), "indexing vault");

    let report = IndexReport::generate(&walker);

    let contents = if cli.json {
        match render_json(&report) {
            Ok(s) => s,
            Err(e) => fail(&e),
        }
    } else {
        render(&report)
    };

    if let Err(e) = write_report(&target.output, &contents) {
        fail(&e);
    }

    print_summary(&report);
    println!("Index saved to: {}", target.output.display());
    logging::flush();
}

/// Pick the vault and output paths from flags, config or the user.
fn resolve_target(cli: &Cli) -> Target {
    if let Some(path) = cli.config.as_deref() {
        return Target::from_config(load_or_exit(Some(path), cli.profile.as_deref()), cli);
    }

    match (cli.vault.as_deref(), cli.output.as_deref()) {
        (Some(vault), Some(output)) => {
            return Target::from_paths(expand_or_exit(vault), expand_or_exit(output));
        }
        (Some(_), None) | (None, Some(_)) => {
            usage_error("--vault and --output must be given together (or use --config)");
        }
        (None, None) => {}
    }

    let default_path = default_config_path();
    if default_path.exists() {
        return Target::from_config(load_or_exit(None, cli.profile.as_deref()), cli);
    }

    if io::stdin().is_terminal() {
        return match prompt::run_setup(&default_path) {
            Ok(answers) => Target::from_paths(answers.vault_path, answers.output_path),
            Err(PromptError::Cancelled) => {
                eprintln!("Setup cancelled.");
                std::process::exit(1);
            }
            Err(e) => fail(&e),
        };
    }

    usage_error(&format!(
        "no vault given: pass --vault and --output, or --config (looked for {})",
        default_path.display()
    ))
}

fn load_or_exit(path: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(path, profile) {
        Ok(rc) => rc,
        Err(e @ ConfigError::NotFound(_)) => usage_error(&e.to_string()),
        Err(e) => fail(&e),
    }
}

fn expand_or_exit(path: &Path) -> PathBuf {
    match expand_path(&path.to_string_lossy()) {
        Ok(p) => p,
        Err(e) => fail(&e),
    }
}

fn print_summary(report: &IndexReport) {
    println!(
        "Found {} folders, {} files (max depth {})",
        report.totals.folders, report.totals.files, report.totals.max_depth
    );

    let rows: Vec<PatternRow> = report
        .patterns
        .ranked()
        .into_iter()
        .map(|(kind, count)| PatternRow { pattern: kind.to_string(), count })
        .collect();
    if !rows.is_empty() {
        let table = Table::new(&rows).with(Style::rounded()).to_string();
        println!("{table}");
    }

    let warnings = report.warnings();
    if !warnings.is_empty() {
        println!("{} folder(s) could not be read; see the Warnings section.", warnings.len());
    }
}

fn usage_error(msg: &str) -> ! {
    eprintln!("Error: {msg}");
    eprintln!("usage: vault-indexer [--config <path>] [--vault <dir> --output <file>]");
    std::process::exit(2);
}

fn fail(err: &dyn std::error::Error) -> ! {
    eprintln!("Error: {err}");
    logging::flush();
    std::process::exit(1);
}
