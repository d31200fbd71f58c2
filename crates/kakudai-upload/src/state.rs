//! Uploader widget state machine.
//!
//! [`UploaderState`] owns the fields the widget renders from: the
//! current selection, its preview URL, the last upload result, and the
//! in-flight flag. Mutation goes through explicit setters that uphold
//! the widget invariants: at most one upload in flight, and no result
//! ever outlives a newer selection.

use crate::file::SelectedImage;

/// State owned by one uploader widget instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploaderState {
    selected: Option<SelectedImage>,
    preview_url: Option<String>,
    result_url: Option<String>,
    loading: bool,
}

impl UploaderState {
    /// Empty state: nothing selected, nothing in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    /// Preview URL for the current selection.
    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.preview_url.as_deref()
    }

    /// Output location returned by the last successful upload of the
    /// current selection.
    #[must_use]
    pub fn result_url(&self) -> Option<&str> {
        self.result_url.as_deref()
    }

    /// Whether an upload is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the upload trigger should be enabled.
    #[must_use]
    pub const fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.loading
    }

    /// Install a new selection and its preview URL.
    ///
    /// Clears any prior upload result before the new file is considered
    /// selected, and returns the superseded preview URL so the caller
    /// can revoke it.
    pub fn select(&mut self, image: SelectedImage, preview_url: String) -> Option<String> {
        self.result_url = None;
        self.selected = Some(image);
        self.preview_url.replace(preview_url)
    }

    /// Mark an upload as started and hand back the selection to send.
    ///
    /// Returns `None` without any state change when no file is selected
    /// or another upload is already in flight. The returned image is a
    /// clone so the request task owns its payload outright.
    pub fn try_begin_upload(&mut self) -> Option<SelectedImage> {
        if self.loading {
            return None;
        }
        let image = self.selected.clone()?;
        self.loading = true;
        Some(image)
    }

    /// Record a successful upload of the current selection.
    pub fn finish_success(&mut self, result_url: String) {
        self.loading = false;
        self.result_url = Some(result_url);
    }

    /// Record a failed upload. The result stays unset.
    pub const fn finish_failure(&mut self) {
        self.loading = false;
    }

    /// Take the preview URL out of the state for revocation on
    /// teardown.
    pub fn take_preview_url(&mut self) -> Option<String> {
        self.preview_url.take()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage::new(name.into(), vec![0x89, 0x50, 0x4E, 0x47]).unwrap()
    }

    #[test]
    fn selection_installs_preview_and_clears_result() {
        let mut state = UploaderState::new();
        state.select(image("a.png"), "blob:a".into());
        let sent = state.try_begin_upload().unwrap();
        assert_eq!(sent.name, "a.png");
        state.finish_success("http://x/out.png".into());
        assert_eq!(state.result_url(), Some("http://x/out.png"));

        // A newer selection must never show the old result.
        state.select(image("b.png"), "blob:b".into());
        assert_eq!(state.result_url(), None);
        assert_eq!(state.preview_url(), Some("blob:b"));
    }

    #[test]
    fn selection_returns_superseded_preview_url() {
        let mut state = UploaderState::new();
        assert_eq!(state.select(image("a.png"), "blob:a".into()), None);
        let old = state.select(image("b.png"), "blob:b".into());
        assert_eq!(old.as_deref(), Some("blob:a"));
    }

    #[test]
    fn upload_without_selection_is_a_no_op() {
        let mut state = UploaderState::new();
        assert!(state.try_begin_upload().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn second_upload_is_blocked_while_in_flight() {
        let mut state = UploaderState::new();
        state.select(image("a.png"), "blob:a".into());
        assert!(state.try_begin_upload().is_some());
        assert!(state.is_loading());
        assert!(!state.can_upload());
        assert!(state.try_begin_upload().is_none());
    }

    #[test]
    fn loading_clears_on_both_exit_paths() {
        let mut state = UploaderState::new();
        state.select(image("a.png"), "blob:a".into());

        state.try_begin_upload().unwrap();
        state.finish_success("http://x/out.png".into());
        assert!(!state.is_loading());

        state.try_begin_upload().unwrap();
        state.finish_failure();
        assert!(!state.is_loading());
        // The success result from the earlier attempt is still shown;
        // only a new selection clears it.
        assert_eq!(state.result_url(), Some("http://x/out.png"));
    }

    #[test]
    fn failure_leaves_result_unset() {
        let mut state = UploaderState::new();
        state.select(image("a.png"), "blob:a".into());
        state.try_begin_upload().unwrap();
        state.finish_failure();
        assert_eq!(state.result_url(), None);
        assert!(state.can_upload(), "the user may simply try again");
    }

    #[test]
    fn take_preview_url_empties_the_slot() {
        let mut state = UploaderState::new();
        state.select(image("a.png"), "blob:a".into());
        assert_eq!(state.take_preview_url().as_deref(), Some("blob:a"));
        assert_eq!(state.preview_url(), None);
    }
}
