//! Wire contract of the upscaling service.
//!
//! One POST with a multipart body carrying the image, one JSON response
//! naming the produced output. Anything else is a failure.

use serde::Deserialize;

/// Multipart field name carrying the image binary.
pub const FILE_FIELD: &str = "file";

/// Multipart field name carrying the captcha token when the gate is
/// enabled. The token is forwarded opaquely; verification happens on
/// the receiving backend.
pub const CAPTCHA_FIELD: &str = "captcha_token";

/// Success body of the upscaling service.
#[derive(Debug, Deserialize)]
struct UpscaleResponse {
    /// Location of the produced output (URL or server path).
    upscaled: String,
}

/// Errors from one upload attempt.
///
/// The user sees every variant the same way; the distinction exists for
/// the log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The service answered with a non-success HTTP status.
    #[error("upload failed with status {0}")]
    Status(u16),

    /// The request never completed: a network failure or a browser API
    /// error before or during the call.
    #[error("network error: {0}")]
    Network(String),

    /// A success status whose body does not satisfy the response
    /// contract.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Parse a success body and extract the upscaled output location.
///
/// A success status with a missing or empty `upscaled` field is treated
/// as a malformed response rather than defaulted.
///
/// # Errors
///
/// Returns [`UploadError::MalformedResponse`] when the body is not a
/// JSON object carrying a non-empty `upscaled` string.
pub fn parse_upscale_response(body: &str) -> Result<String, UploadError> {
    let parsed: UpscaleResponse =
        serde_json::from_str(body).map_err(|e| UploadError::MalformedResponse(e.to_string()))?;
    if parsed.upscaled.is_empty() {
        return Err(UploadError::MalformedResponse(
            "empty `upscaled` field".into(),
        ));
    }
    Ok(parsed.upscaled)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn success_body_yields_output_location() {
        let url = parse_upscale_response(r#"{"upscaled": "http://x/out.png"}"#).unwrap();
        assert_eq!(url, "http://x/out.png");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let url =
            parse_upscale_response(r#"{"upscaled": "out/7.png", "elapsed_ms": 412}"#).unwrap();
        assert_eq!(url, "out/7.png");
    }

    #[test]
    fn missing_field_is_malformed() {
        let result = parse_upscale_response(r#"{"status": "ok"}"#);
        assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    }

    #[test]
    fn empty_field_is_malformed() {
        let result = parse_upscale_response(r#"{"upscaled": ""}"#);
        assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let result = parse_upscale_response("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    }

    #[test]
    fn non_object_body_is_malformed() {
        let result = parse_upscale_response(r#"["http://x/out.png"]"#);
        assert!(matches!(result, Err(UploadError::MalformedResponse(_))));
    }
}
