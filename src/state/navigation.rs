//! Section navigation state.

use crate::content::Section;

/// Tracks a pending "scroll to section" request from the header.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    scroll_target: Option<Section>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a scroll to `section` on the next frame.
    pub fn request_scroll(&mut self, section: Section) {
        self.scroll_target = Some(section);
    }

    /// Consumes the request if it targets `section`.
    pub fn take_scroll_for(&mut self, section: Section) -> bool {
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            true
        } else {
            false
        }
    }
}
