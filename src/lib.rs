//! # doc2fields
//!
//! Upload a document image and extract structured identity fields (name,
//! document number, expiration date) from it via a remote extraction service.
//!
//! ## Why this crate?
//!
//! The extraction itself (OCR, ML) lives behind an HTTP service; getting the
//! client side right is workflow discipline: validate before you upload, make
//! exactly one request per attempt, and never show a stale result next to a
//! fresh error. This crate packages that workflow as a typed state machine so
//! any front-end (CLI, desktop, service) renders from the same four states
//! instead of juggling booleans.
//!
//! ## Pipeline Overview
//!
//! ```text
//! image
//!  │
//!  ├─ 1. Select    wrap bytes + declared media type + name
//!  ├─ 2. Validate  declared type against {jpeg, png, gif}; no network
//!  ├─ 3. Submit    one multipart POST, part name "document"
//!  └─ 4. Reduce    outcome → Idle | Submitting | Succeeded | Failed
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doc2fields::{extract, ExtractionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExtractionConfig::builder()
//!         .endpoint("http://localhost:5000/extract")
//!         .build()?;
//!     let fields = extract("passport.png", &config).await?;
//!     println!(
//!         "{} / {} / {}",
//!         fields.name, fields.document_number, fields.expiration_date
//!     );
//!     Ok(())
//! }
//! ```
//!
//! Interactive callers keep an [`UploadWorkflow`] instead and render from its
//! signals:
//!
//! ```rust,no_run
//! use doc2fields::{ExtractionConfig, SelectedFile, UploadWorkflow};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut workflow = UploadWorkflow::new(&ExtractionConfig::default())?;
//! workflow.select_file(SelectedFile::from_path("passport.png")?);
//! workflow.submit().await;
//! match (workflow.result(), workflow.error()) {
//!     (Some(fields), _) => println!("extracted: {}", fields.name),
//!     (_, Some(e)) => eprintln!("{e}"),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doc2fields` binary (clap + anyhow + tracing-subscriber + indicatif) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! doc2fields = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod workflow;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder, DEFAULT_ENDPOINT};
pub use error::ExtractError;
pub use extract::{extract, extract_bytes, extract_file, extract_sync};
pub use output::{ExtractResponse, ExtractionResult};
pub use pipeline::input::{media_type_for_extension, SelectedFile, UNKNOWN_MEDIA_TYPE};
pub use pipeline::submit::DOCUMENT_PART_NAME;
pub use pipeline::validate::{is_allowed_media_type, ALLOWED_MEDIA_TYPES};
pub use workflow::{UploadWorkflow, WorkflowState};
