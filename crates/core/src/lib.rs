#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Privacy-safe structural indexing of Obsidian vaults.
//!
//! A vault is walked once, every file is classified by its naming pattern
//! and redacted, and the folder tree plus aggregate counts are rendered as
//! a Markdown (or JSON) report. Note contents are never opened.

pub mod config;
pub mod patterns;
pub mod redact;
pub mod report;
pub mod vault;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
