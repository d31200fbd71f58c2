//! Image uploader widget: drop zone, file picker, preview, upload
//! trigger, and result link.

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use kakudai_upload::file::PICKER_ACCEPT;
use kakudai_upload::{DragDepth, SelectedImage, UploaderState};

use super::Captcha;
use crate::{net, preview};

/// Props for the [`ImageUploader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageUploaderProps {
    /// Upload endpoint of the upscaling service.
    endpoint: String,
    /// Captcha site key. When set, the upload trigger stays disabled
    /// until the challenge widget has produced a token.
    captcha_site_key: Option<String>,
}

/// The upload widget.
///
/// Accepts a single image via drag-and-drop or the hidden file picker,
/// shows a local preview, and posts the file to the upscaling service.
/// On success the returned output location is rendered as a link; any
/// failure is surfaced as one blocking alert while the typed error goes
/// to the log.
#[component]
pub fn ImageUploader(props: ImageUploaderProps) -> Element {
    let mut state = use_signal(UploaderState::new);
    let mut drag = use_signal(DragDepth::new);
    let mut select_error = use_signal(|| Option::<String>::None);
    let mut captcha_token = use_signal(|| Option::<String>::None);

    // Revoke the outstanding preview URL when the widget unmounts.
    use_drop(move || {
        let st = state.peek();
        if let Some(url) = st.preview_url() {
            preview::revoke_preview_url(url);
        }
    });

    // Validate and store the first file from a picker or drop payload.
    // Additional files in the payload are ignored.
    let process_files = move |files: Vec<FileData>| async move {
        let Some(file) = files.first() else {
            return;
        };
        let name = file.name();
        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                select_error.set(Some(format!("Failed to read file: {e}")));
                return;
            }
        };
        let image = match SelectedImage::new(name, bytes) {
            Ok(image) => image,
            Err(e) => {
                select_error.set(Some(e.to_string()));
                return;
            }
        };
        let preview_url = match preview::create_preview_url(&image) {
            Ok(url) => url,
            Err(e) => {
                select_error.set(Some(format!("Failed to preview file: {e}")));
                return;
            }
        };
        select_error.set(None);
        if let Some(superseded) = state.write().select(image, preview_url) {
            preview::revoke_preview_url(&superseded);
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        drag.write().reset();
        process_files(evt.files()).await;
    };

    let gated = props.captcha_site_key.is_some();
    let endpoint = props.endpoint.clone();
    let handle_upload = move |_| {
        if gated && captcha_token.peek().is_none() {
            return;
        }
        // No-op when nothing is selected or an upload is in flight.
        let Some(image) = state.write().try_begin_upload() else {
            return;
        };
        let endpoint = endpoint.clone();
        let token = captcha_token.peek().clone();
        spawn(async move {
            match net::upload_image(&endpoint, &image, token.as_deref()).await {
                Ok(url) => {
                    tracing::debug!("upscaled output at {url}");
                    state.write().finish_success(url);
                }
                Err(e) => {
                    tracing::error!("upload failed: {e}");
                    state.write().finish_failure();
                    alert_upload_failed();
                }
            }
        });
    };

    let preview_url = state.read().preview_url().map(str::to_owned);
    let result_url = state.read().result_url().map(str::to_owned);
    let loading = state.read().is_loading();
    let can_upload =
        state.read().can_upload() && (!gated || captcha_token.read().is_some());

    let zone_class = if drag.read().is_active() {
        "dropzone dropzone-active"
    } else {
        "dropzone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| evt.prevent_default(),
            ondragenter: move |evt| {
                evt.prevent_default();
                drag.write().enter();
            },
            ondragleave: move |_| drag.write().leave(),
            ondrop: handle_drop,

            h2 { "Upload an Image" }

            if let Some(ref err) = select_error() {
                p { class: "error", "{err}" }
            }

            label { class: "browse-button",
                input {
                    r#type: "file",
                    accept: PICKER_ACCEPT,
                    class: "hidden",
                    onchange: handle_files,
                }
                Icon { icon: LdUpload, width: 16, height: 16 }
                "Browse File"
            }

            if let Some(ref url) = preview_url {
                div { class: "preview",
                    h4 { "Selected Image" }
                    img { src: "{url}", alt: "Preview" }
                }
            }

            if let Some(ref key) = props.captcha_site_key {
                Captcha {
                    site_key: key.clone(),
                    on_verify: move |token| captcha_token.set(token),
                }
            }

            button {
                class: "upload-button",
                disabled: !can_upload,
                onclick: handle_upload,
                if loading { "Upscaling..." } else { "Upscale!" }
            }

            if let Some(ref url) = result_url {
                div { class: "result",
                    h4 { "Upscaled Image" }
                    a { href: "{url}", "Link to image" }
                }
            }
        }
    }
}

/// One blocking failure notification, regardless of cause.
fn alert_upload_failed() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Upload failed");
    }
}
