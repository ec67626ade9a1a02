//! File selection: wrap user-chosen content with a name and declared type.
//!
//! ## Why "declared", not detected?
//!
//! The workflow reproduces what a browser file input provides: a filename
//! and the media type the environment *claims* for the content.
//! [`SelectedFile::from_path`] derives that claim from the file extension
//! alone; nothing ever sniffs the bytes. Downstream validation therefore accepts mislabelled
//! content if the extension lies, and rejects a correctly-typed file with an
//! unrecognised extension. That trade-off is the contract, not an oversight.

use crate::error::ExtractError;
use std::path::Path;
use tracing::debug;

/// Declared media type assigned when the extension is unrecognised.
///
/// Deliberately outside the allow-list: an unknown extension fails the
/// pre-flight check instead of being guessed at.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// A user-selected file: the input selector's product.
///
/// Holds the content in memory together with the declared media type and the
/// original name. Replaced wholesale on reselection, never mutated in place.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wrap in-memory content whose declared type the caller already knows.
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, deriving the declared type from its extension.
    ///
    /// Unknown extensions get [`UNKNOWN_MEDIA_TYPE`], which the validator
    /// rejects.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExtractError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(ExtractError::PermissionDenied {
                    path: path.to_path_buf(),
                });
            }
            Err(_) => {
                return Err(ExtractError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
        };

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();
        let media_type = media_type_for_extension(path)
            .unwrap_or(UNKNOWN_MEDIA_TYPE)
            .to_string();

        debug!(
            "Selected local file: {} ({}, {} bytes)",
            name,
            media_type,
            bytes.len()
        );
        Ok(Self {
            name,
            media_type,
            bytes,
        })
    }

    /// Replace the declared media type, e.g. from a CLI override.
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    /// Original file name, sent as the multipart part's filename.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type; trusted, never verified against content.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Raw content, uploaded untouched.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Map a file extension to the media type a browser would declare for it.
///
/// Only the extensions of the accepted image formats are mapped; everything
/// else returns `None` so the caller falls back to [`UNKNOWN_MEDIA_TYPE`].
pub fn media_type_for_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
