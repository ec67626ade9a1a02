//! Submission: one multipart POST to the extraction service.
//!
//! The only stage with network I/O. The request carries exactly one part,
//! named [`DOCUMENT_PART_NAME`], holding the raw bytes, the file name, and
//! the declared media type. One submit means one request: no retries, no
//! cancellation.
//!
//! ## The collapse rule
//!
//! Connection failures, timeouts, non-2xx statuses, and 2xx bodies that do
//! not decode into the expected envelope all become
//! [`ExtractError::TransportFailure`]. The user-facing message is fixed; the
//! underlying cause goes on the `detail` field and into a `warn!` log here,
//! at the point of collapse.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::{ExtractResponse, ExtractionResult};
use crate::pipeline::input::SelectedFile;
use crate::pipeline::validate::normalize_media_type;
use reqwest::multipart::{Form, Part};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Multipart field name the extraction service expects.
pub const DOCUMENT_PART_NAME: &str = "document";

/// Issues the one-shot extraction request.
///
/// Owns a [`reqwest::Client`] and the endpoint it was configured with; both
/// are fixed for the lifetime of the workflow holding it.
#[derive(Debug, Clone)]
pub struct Submitter {
    client: reqwest::Client,
    endpoint: String,
}

impl Submitter {
    /// Build a submitter (and its HTTP client) from the configuration.
    pub fn new(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ExtractError::Internal(format!("Failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Endpoint this submitter posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the file and decode the envelope.
    ///
    /// Callers are expected to have validated the selection already; this
    /// stage trusts the declared media type as-is.
    pub async fn submit(&self, file: &SelectedFile) -> Result<ExtractionResult, ExtractError> {
        let form = multipart_form(file)?;
        info!(
            "Submitting '{}' ({}, {} bytes) to {}",
            file.name(),
            file.media_type(),
            file.len(),
            self.endpoint
        );
        let started = Instant::now();

        let response = match self.client.post(&self.endpoint).multipart(form).send().await {
            Ok(r) => r,
            Err(e) => return Err(transport_failure(format!("request failed: {e}"))),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(transport_failure(format!(
                "HTTP {status}: {}",
                truncate(&body, 200)
            )));
        }

        let envelope: ExtractResponse = match response.json().await {
            Ok(e) => e,
            Err(e) => return Err(transport_failure(format!("undecodable success body: {e}"))),
        };

        debug!(
            "Extraction succeeded in {} ms",
            started.elapsed().as_millis()
        );
        Ok(envelope.data)
    }
}

/// Build the single-part form.
///
/// Part name, file name, and MIME type mirror what a browser form with
/// `<input type="file" name="document">` would send. The part carries the
/// normalized declared type, the same view the validator checks: a selection
/// that passed validation always forms a valid part.
fn multipart_form(file: &SelectedFile) -> Result<Form, ExtractError> {
    let media_type = normalize_media_type(file.media_type());
    let part = Part::bytes(file.bytes().to_vec())
        .file_name(file.name().to_string())
        .mime_str(&media_type)
        .map_err(|e| {
            ExtractError::Internal(format!(
                "Declared media type '{media_type}' is not a valid MIME string: {e}"
            ))
        })?;
    Ok(Form::new().part(DOCUMENT_PART_NAME, part))
}

/// Collapse a failure into the single user-facing transport kind, logging the
/// detail the fixed message hides.
fn transport_failure(detail: String) -> ExtractError {
    warn!("Extraction request failed: {detail}");
    ExtractError::TransportFailure { detail }
}

/// Cap response bodies quoted in logs, respecting char boundaries.
fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
