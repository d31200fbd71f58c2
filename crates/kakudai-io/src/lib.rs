//! kakudai-io: Browser I/O and Dioxus component library.
//!
//! Handles preview Blob URLs, the multipart upload call, window-level
//! drag/drop suppression, captcha widget interop, and the uploader UI
//! components for the kakudai web application.

pub mod components;
pub mod net;
pub mod preview;
pub mod recaptcha;
pub mod window_guard;

pub use components::{Captcha, ImageUploader};
pub use window_guard::DropNavigationGuard;
