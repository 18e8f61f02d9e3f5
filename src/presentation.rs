//! The presentation root the resolved scheme is applied to.

use std::cell::RefCell;
use std::rc::Rc;

use crate::palette::Palette;
use crate::preference::ResolvedTheme;

/// Receives the single active scheme marker.
pub trait PresentationRoot {
    /// Makes `scheme` the only active scheme.
    fn apply_scheme(&mut self, scheme: ResolvedTheme);

    /// Asks the host to run a frame soon.
    fn request_frame(&mut self) {}
}

#[derive(Debug, Default)]
struct Recording {
    applied: Vec<ResolvedTheme>,
    frame_requests: usize,
}

/// Records everything applied to it. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRoot {
    log: Rc<RefCell<Recording>>,
}

impl RecordingRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every scheme applied so far, oldest first.
    pub fn applied(&self) -> Vec<ResolvedTheme> {
        self.log.borrow().applied.clone()
    }

    /// The scheme marker currently in place.
    pub fn active(&self) -> Option<ResolvedTheme> {
        self.log.borrow().applied.last().copied()
    }

    pub fn apply_count(&self) -> usize {
        self.log.borrow().applied.len()
    }

    pub fn frame_requests(&self) -> usize {
        self.log.borrow().frame_requests
    }
}

impl PresentationRoot for RecordingRoot {
    fn apply_scheme(&mut self, scheme: ResolvedTheme) {
        self.log.borrow_mut().applied.push(scheme);
    }

    fn request_frame(&mut self) {
        self.log.borrow_mut().frame_requests += 1;
    }
}

/// Applies schemes to an egui context.
///
/// egui's own theme is pinned to the resolved scheme so that it does not
/// follow the OS behind the controller's back.
#[derive(Clone)]
pub struct EguiRoot {
    ctx: egui::Context,
}

impl EguiRoot {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl PresentationRoot for EguiRoot {
    fn apply_scheme(&mut self, scheme: ResolvedTheme) {
        let theme = egui_theme(scheme);
        let mut visuals = theme.default_visuals();
        Palette::for_scheme(scheme).apply_to(&mut visuals);

        self.ctx.set_theme(theme);
        self.ctx.set_visuals_of(theme, visuals);
    }

    fn request_frame(&mut self) {
        self.ctx.request_repaint();
    }
}

/// Maps a resolved scheme onto egui's theme enum.
pub fn egui_theme(scheme: ResolvedTheme) -> egui::Theme {
    match scheme {
        ResolvedTheme::Light => egui::Theme::Light,
        ResolvedTheme::Dark => egui::Theme::Dark,
    }
}

/// Maps egui's theme enum onto a resolved scheme.
pub fn scheme_from_egui(theme: egui::Theme) -> ResolvedTheme {
    match theme {
        egui::Theme::Light => ResolvedTheme::Light,
        egui::Theme::Dark => ResolvedTheme::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_root_tracks_active_marker() {
        let root = RecordingRoot::new();
        let mut handle = root.clone();
        assert_eq!(root.active(), None);

        handle.apply_scheme(ResolvedTheme::Dark);
        handle.apply_scheme(ResolvedTheme::Light);
        handle.request_frame();

        assert_eq!(root.active(), Some(ResolvedTheme::Light));
        assert_eq!(root.apply_count(), 2);
        assert_eq!(root.frame_requests(), 1);
    }

    #[test]
    fn test_egui_root_pins_theme() {
        let ctx = egui::Context::default();
        let mut root = EguiRoot::new(ctx.clone());

        root.apply_scheme(ResolvedTheme::Dark);
        assert_eq!(ctx.theme(), egui::Theme::Dark);
        assert_eq!(
            ctx.style().visuals.panel_fill,
            Palette::for_scheme(ResolvedTheme::Dark).background
        );

        root.apply_scheme(ResolvedTheme::Light);
        assert_eq!(ctx.theme(), egui::Theme::Light);
    }

    #[test]
    fn test_egui_theme_mapping() {
        for scheme in [ResolvedTheme::Light, ResolvedTheme::Dark] {
            assert_eq!(scheme_from_egui(egui_theme(scheme)), scheme);
        }
    }
}
