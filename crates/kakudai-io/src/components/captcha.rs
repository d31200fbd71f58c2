//! Captcha gate component.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::recaptcha::{self, CaptchaWidget};

/// DOM id of the challenge container element.
const CONTAINER_ID: &str = "captcha-container";

/// Props for the [`Captcha`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CaptchaProps {
    /// Site key issued for this deployment.
    site_key: String,
    /// Called with `Some(token)` on verification and `None` when a
    /// previously issued token expires.
    on_verify: EventHandler<Option<String>>,
}

/// Hosts the third-party challenge widget.
///
/// The widget script performs the actual challenge; this component only
/// provides the container element and forwards tokens upward. When the
/// script is absent (blocked or offline) the container stays empty, a
/// warning is logged, and the gate simply never verifies.
#[component]
pub fn Captcha(props: CaptchaProps) -> Element {
    // The rendered widget handle, kept alive until unmount so the JS
    // callbacks stay valid.
    let widget = use_hook(|| Rc::new(RefCell::new(Option::<CaptchaWidget>::None)));

    {
        let widget = Rc::clone(&widget);
        use_drop(move || {
            widget.borrow_mut().take();
        });
    }

    let site_key = props.site_key.clone();
    let on_verify = props.on_verify;
    let mounted = {
        let widget = Rc::clone(&widget);
        move |_: Event<MountedData>| {
            let outcome = recaptcha::render(
                CONTAINER_ID,
                &site_key,
                move |token| on_verify.call(Some(token)),
                move || on_verify.call(None),
            );
            match outcome {
                Ok(handle) => {
                    *widget.borrow_mut() = Some(handle);
                }
                Err(e) => {
                    tracing::warn!("captcha widget unavailable: {e}");
                }
            }
        }
    };

    rsx! {
        div {
            id: CONTAINER_ID,
            class: "captcha",
            onmounted: mounted,
        }
    }
}
