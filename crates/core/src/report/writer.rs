//! Writing rendered reports to disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::ReportError;

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    let fail = |source| ReportError::OutputWriteFailure { path: path.display().to_string(), source };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(fail)?;
    }
    fs::write(path, contents).map_err(fail)?;

    debug!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}
