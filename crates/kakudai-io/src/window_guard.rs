//! Window-level drag/drop suppression.
//!
//! A file dropped outside the upload region would otherwise make the
//! browser navigate away to the dropped file. [`DropNavigationGuard`]
//! registers window listeners that prevent the default `dragover` and
//! `drop` handling for as long as the guard is alive, and removes them
//! again on drop.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Errors that can occur while installing the guard.
#[derive(Debug, thiserror::Error)]
pub enum WindowGuardError {
    /// A browser API call returned an error or a required object was
    /// missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for WindowGuardError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Scoped registration of window-level `dragover`/`drop` default
/// prevention.
///
/// Install once when the app mounts and keep the guard alive for the
/// app's lifetime; dropping it removes both listeners.
pub struct DropNavigationGuard {
    window: web_sys::Window,
    on_dragover: Closure<dyn FnMut(web_sys::Event)>,
    on_drop: Closure<dyn FnMut(web_sys::Event)>,
}

impl DropNavigationGuard {
    /// Register the suppression listeners on the global window.
    ///
    /// # Errors
    ///
    /// Returns [`WindowGuardError::JsError`] when no global window
    /// exists or listener registration fails. A partial registration is
    /// rolled back before the error is reported.
    pub fn install() -> Result<Self, WindowGuardError> {
        let window = web_sys::window()
            .ok_or_else(|| WindowGuardError::JsError("no global window".into()))?;

        let on_dragover = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
        });
        let on_drop = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
            event.prevent_default();
        });

        window
            .add_event_listener_with_callback("dragover", on_dragover.as_ref().unchecked_ref())?;
        if let Err(e) =
            window.add_event_listener_with_callback("drop", on_drop.as_ref().unchecked_ref())
        {
            let _ = window.remove_event_listener_with_callback(
                "dragover",
                on_dragover.as_ref().unchecked_ref(),
            );
            return Err(e.into());
        }

        Ok(Self {
            window,
            on_dragover,
            on_drop,
        })
    }
}

impl Drop for DropNavigationGuard {
    fn drop(&mut self) {
        // Best-effort removal; the window may already be tearing down.
        let _ = self.window.remove_event_listener_with_callback(
            "dragover",
            self.on_dragover.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("drop", self.on_drop.as_ref().unchecked_ref());
    }
}
