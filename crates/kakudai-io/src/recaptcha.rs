//! Interop with the third-party challenge widget.
//!
//! The reCAPTCHA script is loaded by the page (`api.js?render=explicit`)
//! and exposes a `grecaptcha` global. This module renders a widget into
//! a container element and forwards verification tokens through
//! caller-supplied callbacks. Token verification itself happens on the
//! receiving backend, never here.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Errors that can occur while rendering the challenge widget.
#[derive(Debug, thiserror::Error)]
pub enum CaptchaError {
    /// The `grecaptcha` global is missing: the script has not loaded or
    /// was blocked.
    #[error("captcha script is not available")]
    ScriptUnavailable,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for CaptchaError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// A rendered challenge widget.
///
/// Owns the JS callbacks; keep it alive for as long as the widget is
/// mounted. Dropping it releases the callbacks together with the
/// component's DOM.
pub struct CaptchaWidget {
    _verified: Closure<dyn FnMut(JsValue)>,
    _expired: Closure<dyn FnMut()>,
}

/// Render the challenge into the element with id `container_id`.
///
/// `on_verified` receives the opaque token after a completed challenge;
/// `on_expired` fires when a previously issued token lapses so the
/// caller can revoke its authorization.
///
/// # Errors
///
/// Returns [`CaptchaError::ScriptUnavailable`] when the `grecaptcha`
/// global (or its `render` function) is absent, and
/// [`CaptchaError::JsError`] when rendering fails.
pub fn render<F, G>(
    container_id: &str,
    site_key: &str,
    mut on_verified: F,
    on_expired: G,
) -> Result<CaptchaWidget, CaptchaError>
where
    F: FnMut(String) + 'static,
    G: FnMut() + 'static,
{
    let window = web_sys::window().ok_or(CaptchaError::ScriptUnavailable)?;
    let grecaptcha = js_sys::Reflect::get(&window, &JsValue::from_str("grecaptcha"))
        .map_err(|_| CaptchaError::ScriptUnavailable)?;
    if grecaptcha.is_undefined() || grecaptcha.is_null() {
        return Err(CaptchaError::ScriptUnavailable);
    }

    let render_fn = js_sys::Reflect::get(&grecaptcha, &JsValue::from_str("render"))
        .map_err(|_| CaptchaError::ScriptUnavailable)?;
    if !render_fn.is_function() {
        return Err(CaptchaError::ScriptUnavailable);
    }
    let render_fn: js_sys::Function = render_fn.unchecked_into();

    let verified = Closure::<dyn FnMut(JsValue)>::new(move |token: JsValue| {
        if let Some(token) = token.as_string() {
            on_verified(token);
        }
    });
    let expired = Closure::<dyn FnMut()>::new(on_expired);

    // grecaptcha.render(container, { sitekey, callback, "expired-callback" })
    let params = js_sys::Object::new();
    js_sys::Reflect::set(
        &params,
        &JsValue::from_str("sitekey"),
        &JsValue::from_str(site_key),
    )?;
    js_sys::Reflect::set(&params, &JsValue::from_str("callback"), verified.as_ref())?;
    js_sys::Reflect::set(
        &params,
        &JsValue::from_str("expired-callback"),
        expired.as_ref(),
    )?;

    render_fn.call2(&grecaptcha, &JsValue::from_str(container_id), &params)?;

    Ok(CaptchaWidget {
        _verified: verified,
        _expired: expired,
    })
}
