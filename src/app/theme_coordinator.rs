//! Theme setup and per-frame coordination.
//!
//! Builds the theme controller when the window is created, keeps the platform
//! signal hub in sync with the OS, and drives the controller's frame boundary.

use std::time::Instant;

use eframe::egui;
use folio::{
    detect_os_prefers_dark, scheme_from_egui, AppConfig, EguiRoot, JsonFileStore, MemoryStore,
    PreferenceStore, SignalHub, ThemeController,
};
use tracing::{debug, warn};

use crate::state::{ThemeState, OS_POLL_INTERVAL};

/// Coordinates theme management between the controller and egui.
pub struct ThemeCoordinator;

impl ThemeCoordinator {
    /// Creates the theme state during application startup.
    pub fn create_theme_state(ctx: &egui::Context, config: &AppConfig) -> ThemeState {
        let signal = SignalHub::with_value(Self::read_platform_scheme(ctx));
        let controller = ThemeController::initialize(
            &config.theme,
            Self::open_store(&config.app_name),
            &signal,
            Box::new(EguiRoot::new(ctx.clone())),
        );

        let mut theme = ThemeState::new(controller, signal);
        theme.mark_os_polled(Instant::now());
        theme
    }

    /// Opens the settings file store, or an in-memory store when the
    /// platform has no config directory.
    pub fn open_store(app_name: &str) -> Box<dyn PreferenceStore> {
        match JsonFileStore::in_config_dir(app_name) {
            Ok(store) => {
                debug!(path = %store.path().display(), "theme preference file");
                Box::new(store)
            }
            Err(err) => {
                warn!(error = %err, "theme preference will not survive restarts");
                Box::new(MemoryStore::new())
            }
        }
    }

    /// Called at the top of every frame, before any panel is drawn.
    ///
    /// Feeds the latest platform reading to the hub, then applies whatever
    /// the controller has pending for this frame.
    pub fn begin_frame(ctx: &egui::Context, theme: &mut ThemeState) {
        if let Some(system) = ctx.system_theme() {
            theme.signal().publish(scheme_from_egui(system).is_dark());
        } else if theme.needs_os_polling() {
            let now = Instant::now();
            if theme.os_poll_due(now) {
                theme.mark_os_polled(now);
                theme.signal().publish(detect_os_prefers_dark());
            }
            // Nothing else wakes an idle window while polling.
            ctx.request_repaint_after(OS_POLL_INTERVAL);
        }

        if let Some(applied) = theme.controller_mut().on_frame() {
            debug!(scheme = %applied, "theme applied");
        }
    }

    /// The windowing layer's reading, or the OS's when the window has none yet.
    fn read_platform_scheme(ctx: &egui::Context) -> bool {
        ctx.system_theme()
            .map(|theme| scheme_from_egui(theme).is_dark())
            .unwrap_or_else(detect_os_prefers_dark)
    }
}
