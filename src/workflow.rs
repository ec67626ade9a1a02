//! The upload-and-extract workflow: state machine, commands, and signals.
//!
//! One [`UploadWorkflow`] instance owns the entire lifecycle of extraction
//! attempts: the current selection, the current [`WorkflowState`], and the
//! submitter that performs the network call. A presentation layer holds the
//! workflow, feeds it the two commands ([`UploadWorkflow::select_file`],
//! [`UploadWorkflow::submit`]), and renders from the read-only signals
//! ([`UploadWorkflow::is_submitting`], [`UploadWorkflow::error`],
//! [`UploadWorkflow::result`]).
//!
//! ## State machine
//!
//! ```text
//!          select_file (exits Failed only)
//!              │
//!              ▼
//! Idle ── submit(valid) ──▶ Submitting ──▶ Succeeded(fields)
//!  │                            │
//!  └── submit(invalid) ─────────┴────────▶ Failed(error)
//! ```
//!
//! A new submit always starts a fresh cycle: the previous terminal state is
//! cleared before validation runs, so no stale result or error is visible
//! while a request is in flight. `Succeeded` and `Failed` are exited only by
//! a new command, never by a timer or external event.
//!
//! ## Why `&mut self` on submit?
//!
//! The exclusive borrow *is* the double-submit guard: a second `submit()`
//! cannot even be expressed while one is outstanding, so no advisory flag is
//! checked. [`UploadWorkflow::is_submitting`] still exists for presentation
//! layers that observe the workflow behind a lock.

use crate::config::ExtractionConfig;
use crate::error::ExtractError;
use crate::output::ExtractionResult;
use crate::pipeline::input::SelectedFile;
use crate::pipeline::submit::Submitter;
use crate::pipeline::validate;
use tracing::debug;

/// Where the current extraction attempt stands.
///
/// Exactly one variant holds at any time, which is what makes "never a
/// result and an error together" structural rather than something to check.
#[derive(Debug, Clone, Default)]
pub enum WorkflowState {
    /// No attempt in flight and nothing to show.
    #[default]
    Idle,
    /// A request is outstanding; no result or error is visible.
    Submitting,
    /// The last attempt produced extracted fields.
    Succeeded(ExtractionResult),
    /// The last attempt was rejected locally or failed remotely.
    Failed(ExtractError),
}

impl WorkflowState {
    /// True while a request is outstanding.
    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting)
    }

    /// The extracted fields, if the last attempt succeeded.
    pub fn result(&self) -> Option<&ExtractionResult> {
        match self {
            WorkflowState::Succeeded(r) => Some(r),
            _ => None,
        }
    }

    /// The rejection or failure, if the last attempt failed.
    pub fn error(&self) -> Option<&ExtractError> {
        match self {
            WorkflowState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Drives upload attempts against one configured endpoint and owns their
/// state.
///
/// # Example
/// ```rust,no_run
/// use doc2fields::{ExtractionConfig, SelectedFile, UploadWorkflow};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractionConfig::default();
/// let mut workflow = UploadWorkflow::new(&config)?;
///
/// workflow.select_file(SelectedFile::from_path("passport.png")?);
/// workflow.submit().await;
///
/// if let Some(fields) = workflow.result() {
///     println!("{} expires {}", fields.name, fields.expiration_date);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct UploadWorkflow {
    submitter: Submitter,
    selected: Option<SelectedFile>,
    state: WorkflowState,
}

impl UploadWorkflow {
    /// Create a workflow bound to the configured endpoint.
    pub fn new(config: &ExtractionConfig) -> Result<Self, ExtractError> {
        Ok(Self {
            submitter: Submitter::new(config)?,
            selected: None,
            state: WorkflowState::Idle,
        })
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Replace the current selection.
    ///
    /// Accepts anything; validation happens at submit time. Exits a `Failed`
    /// state so the fresh attempt starts unencumbered, but leaves a
    /// `Succeeded` payload visible: the last completed extraction stays on
    /// screen until the next submit, not until the next pick.
    pub fn select_file(&mut self, file: SelectedFile) {
        debug!("File selected: {} ({})", file.name(), file.media_type());
        self.selected = Some(file);
        if matches!(self.state, WorkflowState::Failed(_)) {
            self.state = WorkflowState::Idle;
        }
    }

    /// Run one extraction attempt and return the state it ended in.
    ///
    /// Clears the previous terminal state, validates the selection (a
    /// rejection becomes `Failed` without any network call), then performs
    /// the one-shot request and reduces its outcome. The selection is kept,
    /// so the same file can be resubmitted.
    pub async fn submit(&mut self) -> &WorkflowState {
        // Fresh cycle: no stale result or error may survive into it.
        self.state = WorkflowState::Idle;

        let file = match validate::validate(self.selected.as_ref()) {
            Ok(f) => f,
            Err(e) => {
                self.state = WorkflowState::Failed(e);
                return &self.state;
            }
        };

        self.state = WorkflowState::Submitting;
        let outcome = self.submitter.submit(file).await;
        self.state = match outcome {
            Ok(fields) => WorkflowState::Succeeded(fields),
            Err(e) => WorkflowState::Failed(e),
        };
        &self.state
    }

    /// Discard the selection and any terminal state.
    pub fn reset(&mut self) {
        self.selected = None;
        self.state = WorkflowState::Idle;
    }

    // ── Signals ───────────────────────────────────────────────────────────

    /// Current state of the last or ongoing attempt.
    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// True while a request is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// The rejection or failure of the last attempt, if any.
    pub fn error(&self) -> Option<&ExtractError> {
        self.state.error()
    }

    /// The extracted fields of the last attempt, if it succeeded.
    pub fn result(&self) -> Option<&ExtractionResult> {
        self.state.result()
    }

    /// The current selection, if any.
    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow() -> UploadWorkflow {
        UploadWorkflow::new(&ExtractionConfig::default()).unwrap()
    }

    fn png(name: &str) -> SelectedFile {
        SelectedFile::new(name, "image/png", vec![1, 2, 3])
    }

    fn sample() -> ExtractionResult {
        ExtractionResult {
            name: "A".into(),
            document_number: "1".into(),
            expiration_date: "2030-01-01".into(),
        }
    }

    #[test]
    fn starts_idle_with_no_signals() {
        let w = workflow();
        assert!(matches!(w.state(), WorkflowState::Idle));
        assert!(!w.is_submitting());
        assert!(w.error().is_none());
        assert!(w.result().is_none());
        assert!(w.selected_file().is_none());
    }

    #[test]
    fn reselection_replaces_the_file_and_stays_idle() {
        let mut w = workflow();
        w.select_file(png("first.png"));
        w.select_file(png("second.png"));
        assert!(matches!(w.state(), WorkflowState::Idle));
        assert!(w.error().is_none());
        assert_eq!(w.selected_file().unwrap().name(), "second.png");
    }

    #[test]
    fn selection_exits_a_failed_state() {
        let mut w = workflow();
        w.state = WorkflowState::Failed(ExtractError::NoFileSelected);
        w.select_file(png("id.png"));
        assert!(matches!(w.state(), WorkflowState::Idle));
        assert!(w.error().is_none());
    }

    #[test]
    fn selection_keeps_a_previous_result_visible() {
        let mut w = workflow();
        w.state = WorkflowState::Succeeded(sample());
        w.select_file(png("next.png"));
        assert!(w.result().is_some());
        assert!(matches!(w.state(), WorkflowState::Succeeded(_)));
    }

    #[test]
    fn reset_discards_selection_and_state() {
        let mut w = workflow();
        w.select_file(png("id.png"));
        w.state = WorkflowState::Succeeded(sample());
        w.reset();
        assert!(w.selected_file().is_none());
        assert!(matches!(w.state(), WorkflowState::Idle));
    }

    #[test]
    fn state_signals_are_mutually_exclusive() {
        let succeeded = WorkflowState::Succeeded(sample());
        assert!(succeeded.result().is_some());
        assert!(succeeded.error().is_none());
        assert!(!succeeded.is_submitting());

        let failed = WorkflowState::Failed(ExtractError::NoFileSelected);
        assert!(failed.error().is_some());
        assert!(failed.result().is_none());
        assert!(!failed.is_submitting());

        let submitting = WorkflowState::Submitting;
        assert!(submitting.is_submitting());
        assert!(submitting.result().is_none());
        assert!(submitting.error().is_none());
    }
}
