//! The single upload call to the upscaling service.
//!
//! Builds a multipart `FormData` body carrying the selected file and
//! issues one POST via `fetch`. There is no retry, timeout, or
//! cancellation: once issued, the request runs to completion or
//! browser-level failure.

use kakudai_upload::response::{CAPTCHA_FIELD, FILE_FIELD};
use kakudai_upload::{SelectedImage, UploadError, parse_upscale_response};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::BlobPropertyBag;

/// Map a thrown `JsValue` to the transport error variant.
fn network_error(value: &JsValue) -> UploadError {
    UploadError::Network(format!("{value:?}"))
}

/// Build the multipart body: the file under the fixed `file` field,
/// plus the captcha token when the gate supplied one.
fn build_form_data(
    image: &SelectedImage,
    captcha_token: Option<&str>,
) -> Result<web_sys::FormData, UploadError> {
    let uint8_array = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(image.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
        .map_err(|e| network_error(&e))?;

    let form = web_sys::FormData::new().map_err(|e| network_error(&e))?;
    form.append_with_blob_and_filename(FILE_FIELD, &blob, &image.name)
        .map_err(|e| network_error(&e))?;
    if let Some(token) = captcha_token {
        form.append_with_str(CAPTCHA_FIELD, token)
            .map_err(|e| network_error(&e))?;
    }
    Ok(form)
}

/// POST `image` to `endpoint` and return the upscaled output location.
///
/// # Errors
///
/// Returns [`UploadError::Network`] if the request never completes,
/// [`UploadError::Status`] for a non-OK response, and
/// [`UploadError::MalformedResponse`] if a success body does not carry
/// a usable `upscaled` field.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn upload_image(
    endpoint: &str,
    image: &SelectedImage,
    captcha_token: Option<&str>,
) -> Result<String, UploadError> {
    let window =
        web_sys::window().ok_or_else(|| UploadError::Network("no global window".into()))?;

    let form = build_form_data(image, captcha_token)?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&form);

    let request =
        web_sys::Request::new_with_str_and_init(endpoint, &opts).map_err(|e| network_error(&e))?;

    let fetched = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| network_error(&e))?;
    let response: web_sys::Response = fetched.dyn_into().map_err(|e| network_error(&e))?;

    if !response.ok() {
        return Err(UploadError::Status(response.status()));
    }

    let text_promise = response.text().map_err(|e| network_error(&e))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|e| network_error(&e))?
        .as_string()
        .ok_or_else(|| UploadError::MalformedResponse("body is not text".into()))?;

    parse_upscale_response(&body)
}
