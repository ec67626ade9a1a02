//! Pipeline stages for the upload-and-extract workflow.
//!
//! Each submodule implements exactly one step. Keeping stages separate makes
//! each independently testable and lets a presentation layer reuse a single
//! stage (e.g. pre-flight validation) without driving the whole workflow.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ validate ──▶ submit
//! (select)  (allow-list)  (multipart POST + decode)
//! ```
//!
//! 1. [`input`]    — wrap user-chosen content as a [`input::SelectedFile`]
//!    carrying a name and a declared media type
//! 2. [`validate`] — check the declared type against the fixed allow-list;
//!    purely local, never reads the content or the network
//! 3. [`submit`]   — the only stage with network I/O: one multipart POST,
//!    one decoded envelope, no retries

pub mod input;
pub mod submit;
pub mod validate;
