//! Report model, rendering and output.

pub mod render;
pub mod types;
pub mod writer;

use thiserror::Error;

pub use render::{render, render_json, render_tree};
pub use types::IndexReport;
pub use writer::write_report;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {path}: {source}")]
    OutputWriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[source] serde_json::Error),
}
