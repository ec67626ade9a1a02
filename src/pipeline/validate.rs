//! Pre-flight validation of the declared media type.
//!
//! Runs before any network I/O. Two distinct rejections exist: no file at all
//! ([`ExtractError::NoFileSelected`]) and a declared type outside
//! [`ALLOWED_MEDIA_TYPES`] ([`ExtractError::UnsupportedType`]). Only the
//! declared string is consulted; content is never inspected.

use crate::error::ExtractError;
use crate::pipeline::input::SelectedFile;
use tracing::debug;

/// Declared media types accepted for submission.
///
/// A fixed contract with the extraction service, not a configuration knob.
pub const ALLOWED_MEDIA_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Normalise a declared media type for comparison: parameters stripped
/// (`image/png; charset=binary` → `image/png`), trimmed, ASCII-lowercased.
pub fn normalize_media_type(raw: &str) -> String {
    raw.split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Whether a declared media type is acceptable for submission.
pub fn is_allowed_media_type(raw: &str) -> bool {
    let normalized = normalize_media_type(raw);
    ALLOWED_MEDIA_TYPES.contains(&normalized.as_str())
}

/// Validate the current selection ahead of a submit.
///
/// `None` means the user never picked a file. Both failure modes carry the
/// exact message a presentation layer shows verbatim.
pub fn validate(selected: Option<&SelectedFile>) -> Result<&SelectedFile, ExtractError> {
    let file = selected.ok_or(ExtractError::NoFileSelected)?;
    if !is_allowed_media_type(file.media_type()) {
        debug!(
            "Rejected selection '{}': declared type '{}' is not in the allow-list",
            file.name(),
            file.media_type()
        );
        return Err(ExtractError::UnsupportedType {
            media_type: file.media_type().to_string(),
        });
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(media_type: &str) -> SelectedFile {
        SelectedFile::new("id.png", media_type, vec![0u8; 4])
    }

    #[test]
    fn accepts_each_allowed_type() {
        for mt in ALLOWED_MEDIA_TYPES {
            let f = file(mt);
            assert!(validate(Some(&f)).is_ok(), "rejected {mt}");
        }
    }

    #[test]
    fn comparison_ignores_case_and_parameters() {
        assert!(is_allowed_media_type("Image/JPEG"));
        assert!(is_allowed_media_type(" image/png "));
        assert!(is_allowed_media_type("image/gif; q=0.8"));
    }

    #[test]
    fn rejects_types_outside_the_allow_list() {
        for mt in [
            "application/pdf",
            "image/webp",
            "image/svg+xml",
            "text/plain",
            "application/octet-stream",
            "",
        ] {
            let f = file(mt);
            let err = validate(Some(&f)).unwrap_err();
            assert!(
                matches!(err, ExtractError::UnsupportedType { .. }),
                "accepted {mt:?}"
            );
        }
    }

    #[test]
    fn missing_selection_is_its_own_rejection() {
        let err = validate(None).unwrap_err();
        assert!(matches!(err, ExtractError::NoFileSelected));
    }

    #[test]
    fn test_normalize_media_type() {
        assert_eq!(
            normalize_media_type("IMAGE/PNG; charset=binary"),
            "image/png"
        );
        assert_eq!(normalize_media_type("  image/jpeg  "), "image/jpeg");
        assert_eq!(normalize_media_type(""), "");
    }
}
