//! Drag-hover tracking for the drop region.
//!
//! Browsers fire a `dragleave` on the region every time the pointer
//! crosses into one of its descendants, so a naive enter/leave toggle
//! flickers while the user drags across inner elements. Tracking the
//! enter/leave *depth* instead keeps the region marked active until the
//! pointer has left the region and every descendant.

/// Enter/leave depth counter for one drop region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragDepth(u32);

impl DragDepth {
    /// New tracker with nothing hovered.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Record a `dragenter` on the region or one of its descendants.
    pub const fn enter(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Record a `dragleave`.
    ///
    /// Saturates at zero: an unmatched leave (e.g. a drag that started
    /// mid-region) must not underflow into "active".
    pub const fn leave(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Clear all hover state after a drop or a cancelled drag.
    pub const fn reset(&mut self) {
        self.0 = 0;
    }

    /// Whether a drag is currently over the region.
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.0 > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_activates_and_leave_deactivates() {
        let mut depth = DragDepth::new();
        assert!(!depth.is_active());
        depth.enter();
        assert!(depth.is_active());
        depth.leave();
        assert!(!depth.is_active());
    }

    #[test]
    fn crossing_into_a_child_does_not_flicker() {
        let mut depth = DragDepth::new();
        depth.enter(); // region
        depth.enter(); // child element
        depth.leave(); // leave fired for the region on child entry
        assert!(depth.is_active(), "still over a descendant");
        depth.leave(); // actually leaving the region
        assert!(!depth.is_active());
    }

    #[test]
    fn unmatched_leave_saturates_at_zero() {
        let mut depth = DragDepth::new();
        depth.leave();
        assert!(!depth.is_active());
        depth.enter();
        assert!(depth.is_active());
    }

    #[test]
    fn reset_clears_any_depth() {
        let mut depth = DragDepth::new();
        depth.enter();
        depth.enter();
        depth.reset();
        assert!(!depth.is_active());
    }
}
