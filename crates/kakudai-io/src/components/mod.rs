//! Dioxus UI components for kakudai.
//!
//! Provides the uploader widget (drop zone, hidden picker, preview,
//! upload trigger, result link) and the captcha gate.

mod captcha;
mod uploader;

pub use captcha::Captcha;
pub use uploader::ImageUploader;
