//! Selected-file model and image type validation.

use std::fmt;

/// Allowed file extensions for image uploads.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp", "gif"];

/// `accept` attribute value for the native file picker, matching
/// [`ALLOWED_EXTENSIONS`].
pub const PICKER_ACCEPT: &str = ".png,.jpg,.jpeg,.bmp,.webp,.gif";

/// Check whether a filename has an allowed image extension.
#[must_use]
pub fn has_allowed_extension(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|a| a.eq_ignore_ascii_case(ext))
    })
}

/// MIME type for an allowed image extension.
fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "gif" => "image/gif",
        _ => return None,
    };
    Some(mime)
}

/// The user's currently chosen file: raw bytes plus original filename.
///
/// Replaced wholesale on the next selection; the widget owns exactly
/// one at a time.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedImage {
    /// Filename as reported by the picker or the drop payload.
    pub name: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    /// Create a selection, rejecting filenames without an allowed image
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedFile`] when the filename has no extension or
    /// an extension outside the image allow-list.
    pub fn new(name: String, bytes: Vec<u8>) -> Result<Self, UnsupportedFile> {
        if !has_allowed_extension(&name) {
            return Err(UnsupportedFile { name });
        }
        Ok(Self { name, bytes })
    }

    /// MIME type derived from the filename extension.
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.name
            .rsplit_once('.')
            .and_then(|(_, ext)| mime_for_extension(ext))
            .unwrap_or("application/octet-stream")
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Error for a selection with a disallowed or missing extension.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported file type: {name}")]
pub struct UnsupportedFile {
    /// Filename of the rejected selection.
    pub name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn allowed_extensions_match_case_insensitively() {
        assert!(has_allowed_extension("photo.png"));
        assert!(has_allowed_extension("photo.JPG"));
        assert!(has_allowed_extension("archive.tar.webp"));
        assert!(!has_allowed_extension("notes.txt"));
        assert!(!has_allowed_extension("no-extension"));
        assert!(!has_allowed_extension("trailing-dot."));
    }

    #[test]
    fn rejected_selection_reports_filename() {
        let err = SelectedImage::new("notes.txt".into(), vec![1, 2, 3]).unwrap_err();
        assert_eq!(err.name, "notes.txt");
        assert_eq!(err.to_string(), "Unsupported file type: notes.txt");
    }

    #[test]
    fn mime_type_follows_extension() {
        let image = SelectedImage::new("photo.JPEG".into(), vec![0xFF]).unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");

        let image = SelectedImage::new("scan.webp".into(), vec![0x52]).unwrap();
        assert_eq!(image.mime_type(), "image/webp");
    }

    #[test]
    fn picker_accept_covers_every_allowed_extension() {
        for ext in ALLOWED_EXTENSIONS {
            assert!(
                PICKER_ACCEPT.contains(&format!(".{ext}")),
                "picker accept list is missing .{ext}"
            );
        }
    }
}
