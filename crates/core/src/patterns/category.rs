//! Coarse file-type categories keyed on extension.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::classifier::split_extension;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Notes,
    Images,
    Documents,
    Audio,
    Video,
    Data,
    Code,
    Canvas,
    Other,
}

impl FileCategory {
    /// Categorize a filename by its (case-insensitive) extension.
    pub fn from_filename(filename: &str) -> Self {
        let (_, ext) = split_extension(filename);
        Self::from_extension(ext.trim_start_matches('.'))
    }

    /// Categorize a bare extension such as `"md"` or `"PNG"`.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" | "txt" => Self::Notes,
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "bmp" => Self::Images,
            "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" => Self::Documents,
            "mp3" | "wav" | "m4a" | "ogg" | "flac" => Self::Audio,
            "mp4" | "mov" | "avi" | "mkv" | "webm" => Self::Video,
            "json" | "csv" | "yaml" | "yml" | "xml" => Self::Data,
            "py" | "js" | "ts" | "html" | "css" | "sh" => Self::Code,
            "canvas" => Self::Canvas,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Images => "images",
            Self::Documents => "documents",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Data => "data",
            Self::Code => "code",
            Self::Canvas => "canvas",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
