//! One-shot extraction entry points.
//!
//! ## Why these exist next to the workflow?
//!
//! [`UploadWorkflow`] is the right shape for an interactive caller that keeps
//! state between commands. Batch callers (the CLI, scripts, services) want a
//! function: select, submit, done. These helpers drive a throwaway workflow
//! through exactly one attempt and convert its terminal state into a
//! `Result`, so both API families share a single code path.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::ExtractionResult;
use crate::pipeline::input::SelectedFile;
use crate::workflow::{UploadWorkflow, WorkflowState};
use std::path::Path;

/// Extract identity fields from a document image on disk.
///
/// This is the primary one-shot entry point for the library.
///
/// # Arguments
/// * `path` — Local path to the document image
/// * `config` — Workflow configuration
///
/// # Errors
/// - [`ExtractError::FileNotFound`] / [`ExtractError::PermissionDenied`] if
///   the path cannot be read
/// - [`ExtractError::UnsupportedType`] if the extension maps outside the
///   allow-list (no request is made)
/// - [`ExtractError::TransportFailure`] if the service cannot be reached,
///   rejects the request, or answers with an unusable body
///
/// # Example
/// ```rust,no_run
/// use doc2fields::{extract, ExtractionConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractionConfig::default();
/// let fields = extract("passport.png", &config).await?;
/// println!("{} expires {}", fields.name, fields.expiration_date);
/// # Ok(())
/// # }
/// ```
pub async fn extract(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionResult, ExtractError> {
    let file = SelectedFile::from_path(path)?;
    extract_file(file, config).await
}

/// Extract identity fields from in-memory content.
///
/// For callers whose bytes come from a network stream, a database, or an
/// upload buffer rather than a file on disk. The declared media type is
/// taken at the caller's word, exactly like a browser file input's.
pub async fn extract_bytes(
    bytes: Vec<u8>,
    media_type: impl Into<String>,
    name: impl Into<String>,
    config: &ExtractionConfig,
) -> Result<ExtractionResult, ExtractError> {
    extract_file(SelectedFile::new(name, media_type, bytes), config).await
}

/// Extract identity fields from an already-constructed selection.
pub async fn extract_file(
    file: SelectedFile,
    config: &ExtractionConfig,
) -> Result<ExtractionResult, ExtractError> {
    let mut workflow = UploadWorkflow::new(config)?;
    workflow.select_file(file);
    match workflow.submit().await {
        WorkflowState::Succeeded(fields) => Ok(fields.clone()),
        WorkflowState::Failed(e) => Err(e.clone()),
        // submit() only ever settles in a terminal state
        _ => Err(ExtractError::Internal(
            "submit settled in a non-terminal state".into(),
        )),
    }
}

/// Synchronous wrapper around [`extract`].
///
/// Creates a temporary tokio runtime internally.
pub fn extract_sync(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<ExtractionResult, ExtractError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| ExtractError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(extract(path, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_wrapper_surfaces_selection_errors() {
        let config = ExtractionConfig::default();
        let err = extract_sync("/no/such/image.png", &config).unwrap_err();
        assert!(matches!(err, ExtractError::FileNotFound { .. }));
    }
}
