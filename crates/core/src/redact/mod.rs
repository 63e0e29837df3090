//! Filename redaction.
//!
//! Folder names are never passed through here; only file names are.

pub mod fingerprint;
pub mod redactor;

pub use fingerprint::{FINGERPRINT_LEN, fingerprint, stem_digest};
pub use redactor::{REDACTED_TITLE, redact, redact_filename};
