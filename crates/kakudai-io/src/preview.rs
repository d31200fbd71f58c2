//! Preview Blob URLs for selected images.
//!
//! Converts the raw bytes of a selection into a browser-displayable
//! object URL by wrapping them in a `Blob` via the Web API. The preview
//! never leaves the page; only the original bytes are uploaded.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use kakudai_upload::SelectedImage;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while creating a preview URL.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PreviewError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create an object URL displaying `image`, for use as an `<img src>`.
///
/// The returned URL must be revoked via [`revoke_preview_url`] once the
/// selection is superseded or the widget unmounts, to avoid leaking the
/// backing Blob.
///
/// # Errors
///
/// Returns [`PreviewError::JsError`] if Blob or URL creation fails.
pub fn create_preview_url(image: &SelectedImage) -> Result<String, PreviewError> {
    let uint8_array = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(image.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Revoke a preview URL previously created by [`create_preview_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked.
pub fn revoke_preview_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
