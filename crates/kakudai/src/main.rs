use std::rc::Rc;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use kakudai_io::{DropNavigationGuard, ImageUploader};
use kakudai_upload::ApiConfig;

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Installs the window-level drag/drop suppression for the app's
/// lifetime, reads the build-time configuration, and mounts the
/// uploader widget.
fn app() -> Element {
    // Prevent the browser from navigating to files dropped outside the
    // upload region. The guard lives in hook storage and is released
    // together with the root scope.
    use_hook(|| {
        DropNavigationGuard::install()
            .map(Rc::new)
            .map_err(|e| {
                tracing::error!("window drag/drop suppression unavailable: {e}");
            })
            .ok()
    });

    let config = use_hook(ApiConfig::from_build_env);

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        // Challenge script, loaded only for gated deployments. The
        // explicit render mode leaves widget placement to the Captcha
        // component.
        if config.captcha_site_key.is_some() {
            script { src: "https://www.google.com/recaptcha/api.js?render=explicit" }
        }

        div { class: "page",
            h1 { "AI Image Upscaler" }

            ImageUploader {
                endpoint: config.endpoint(),
                captcha_site_key: config.captcha_site_key.clone(),
            }
        }
    }
}
