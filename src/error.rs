//! Error types for the doc2fields library.
//!
//! One fatal enum covers the whole crate. The three workflow variants
//! ([`NoFileSelected`], [`UnsupportedType`], [`TransportFailure`]) carry the
//! rejection messages a presentation layer shows to the user verbatim; their
//! `Display` strings are a stable contract and never vary with the underlying
//! cause. Diagnostic detail the message deliberately hides (status lines,
//! connection errors, decode failures) rides on the variant fields and is
//! emitted through `tracing` at the point of failure.
//!
//! [`NoFileSelected`]: ExtractError::NoFileSelected
//! [`UnsupportedType`]: ExtractError::UnsupportedType
//! [`TransportFailure`]: ExtractError::TransportFailure

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the doc2fields library.
///
/// The workflow variants double as presentation text, so they stay short and
/// free of technical detail. Everything else follows the usual rule: say what
/// failed and what to do about it.
#[derive(Debug, Clone, Error)]
pub enum ExtractError {
    // ── Selection errors ──────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("File not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    // ── Workflow errors ───────────────────────────────────────────────────
    /// Submit was invoked before any file was selected.
    #[error("Please select a file to upload")]
    NoFileSelected,

    /// The declared media type is outside the accepted set.
    ///
    /// The offending type is kept on the variant for logs; the message never
    /// echoes it.
    #[error("Please upload a valid image file (JPEG, PNG, GIF)")]
    UnsupportedType { media_type: String },

    /// Network failure, non-2xx response, or an undecodable success body.
    ///
    /// All of these collapse into this single kind: the user sees one fixed
    /// message, and `detail` records what actually went wrong for logs and
    /// `Debug` output.
    #[error("Failed to extract data from the document")]
    TransportFailure { detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
