//! Theme state for the host window.
//!
//! This module owns the theme controller together with the platform signal
//! hub that feeds it, and the bookkeeping for polling the OS scheme.

use std::time::{Duration, Instant};

use folio::{ResolvedTheme, SignalHub, ThemeController, ThemePreference};

/// Minimum time between two OS color-scheme detections.
pub const OS_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// State related to visual theming.
///
/// Responsibilities:
/// - Owning the theme controller for the lifetime of the window
/// - Holding the signal hub the controller is subscribed to
/// - Rate-limiting OS color-scheme detection
pub struct ThemeState {
    controller: ThemeController,
    signal: SignalHub,
    last_os_poll: Option<Instant>,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl ThemeState {
    /// Wraps an initialized controller and the hub it listens to.
    pub fn new(controller: ThemeController, signal: SignalHub) -> Self {
        Self {
            controller,
            signal,
            last_os_poll: None,
        }
    }

    // ===== Theme Queries =====

    pub fn preference(&self) -> ThemePreference {
        self.controller.preference()
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.controller.resolved_theme()
    }

    pub fn signal(&self) -> &SignalHub {
        &self.signal
    }

    /// Only a `system` preference listens to the OS.
    pub fn needs_os_polling(&self) -> bool {
        self.controller.is_following_system()
    }

    /// Whether the OS should be asked again at `now`.
    pub fn os_poll_due(&self, now: Instant) -> bool {
        self.needs_os_polling()
            && self
                .last_os_poll
                .map_or(true, |last| now.duration_since(last) >= OS_POLL_INTERVAL)
    }

    // ===== Theme Mutations =====

    pub fn controller_mut(&mut self) -> &mut ThemeController {
        &mut self.controller
    }

    pub fn mark_os_polled(&mut self, now: Instant) {
        self.last_os_poll = Some(now);
    }

    /// Two-state toggle from the header.
    pub fn toggle(&mut self) {
        self.controller.toggle();
    }

    /// Explicit choice from the picker.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.controller.set_preference(preference);
    }
}
