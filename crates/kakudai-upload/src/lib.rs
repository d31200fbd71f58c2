//! kakudai-upload: Pure upload-flow model (sans-IO).
//!
//! Everything about the upscale upload flow that does not touch the
//! browser: endpoint configuration, the selected-file model, drag-hover
//! tracking, the service response contract, and the uploader state
//! machine. All browser and network interaction lives in `kakudai-io`.

pub mod config;
pub mod drag;
pub mod file;
pub mod response;
pub mod state;

pub use config::ApiConfig;
pub use drag::DragDepth;
pub use file::{SelectedImage, UnsupportedFile};
pub use response::{UploadError, parse_upscale_response};
pub use state::UploaderState;
