//! The theme controller: single source of truth for theme state.
//!
//! The controller reconciles the persisted user preference with the live
//! platform signal and applies the resulting scheme to the presentation root,
//! at most once per frame.
//!
//! # Examples
//!
//! ```
//! use folio::{
//!     MemoryStore, RecordingRoot, ResolvedTheme, SignalHub, ThemeConfig, ThemeController,
//!     ThemePreference,
//! };
//!
//! let hub = SignalHub::with_value(true);
//! let root = RecordingRoot::new();
//! let mut controller = ThemeController::initialize(
//!     &ThemeConfig::default(),
//!     Box::new(MemoryStore::new()),
//!     &hub,
//!     Box::new(root.clone()),
//! );
//!
//! assert_eq!(controller.preference(), ThemePreference::System);
//! assert_eq!(controller.resolved_theme(), ResolvedTheme::Dark);
//!
//! controller.toggle();
//! controller.on_frame();
//! assert_eq!(root.active(), Some(ResolvedTheme::Light));
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::preference::{resolve, ResolvedTheme, ThemePreference};
use crate::presentation::PresentationRoot;
use crate::schedule::FrameCoalescer;
use crate::signal::{PlatformSignal, Subscription};
use crate::storage::PreferenceStore;

/// Preference and resolved theme at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
}

struct ControllerState {
    preference: ThemePreference,
    resolved: ResolvedTheme,
    /// Last platform reading; `false` when the signal is unavailable
    system_prefers_dark: bool,
    /// `None` once storage has failed: in-memory only from then on
    store: Option<Box<dyn PreferenceStore>>,
    storage_key: String,
    root: Box<dyn PresentationRoot>,
    frame: FrameCoalescer<ResolvedTheme>,
}

impl ControllerState {
    fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            preference: self.preference,
            resolved: self.resolved,
        }
    }

    fn reresolve(&mut self) {
        self.resolved = resolve(self.preference, self.system_prefers_dark);
        if self.frame.request(self.resolved) {
            self.root.request_frame();
        }
    }

    fn persist(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(err) = store.set(&self.storage_key, self.preference.as_str()) {
            warn!(error = %err, "theme preference not persisted; keeping it in memory only");
            self.store = None;
        }
    }

    fn on_platform_change(&mut self, prefers_dark: bool) {
        self.system_prefers_dark = prefers_dark;
        if self.preference == ThemePreference::System {
            debug!(prefers_dark, "following platform color scheme");
            self.reresolve();
        }
    }
}

/// Owns theme state for the lifetime of the hosting application.
///
/// Construct one with [`initialize`](ThemeController::initialize), hand it to
/// whatever renders the header toggle, and call
/// [`on_frame`](ThemeController::on_frame) at every frame boundary.
pub struct ThemeController {
    state: Rc<RefCell<ControllerState>>,
    subscription: Option<Subscription>,
}

impl ThemeController {
    /// Reads the stored preference, resolves it and schedules the first apply.
    ///
    /// Never fails: an unreadable store means "nothing stored" and an
    /// unavailable signal means `system` resolves to light without following.
    pub fn initialize(
        config: &ThemeConfig,
        store: Box<dyn PreferenceStore>,
        signal: &dyn PlatformSignal,
        root: Box<dyn PresentationRoot>,
    ) -> Self {
        let (stored, store) = read_stored_preference(store, &config.storage_key);
        let preference = stored.unwrap_or(config.default_preference);

        let (system_prefers_dark, signal_available) = match signal.prefers_dark() {
            Ok(prefers_dark) => (prefers_dark, true),
            Err(err) => {
                debug!(error = %err, "no platform color scheme; system resolves to light");
                (false, false)
            }
        };

        let mut state = ControllerState {
            preference,
            resolved: resolve(preference, system_prefers_dark),
            system_prefers_dark,
            store,
            storage_key: config.storage_key.clone(),
            root,
            frame: FrameCoalescer::new(),
        };
        state.reresolve();

        info!(
            preference = %state.preference,
            resolved = %state.resolved,
            from_storage = stored.is_some(),
            "theme initialized"
        );

        let state = Rc::new(RefCell::new(state));
        let subscription = if signal_available {
            subscribe(signal, Rc::downgrade(&state))
        } else {
            None
        };

        Self {
            state,
            subscription,
        }
    }

    /// Current preference and resolved theme. No side effects.
    pub fn state(&self) -> ThemeSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn preference(&self) -> ThemePreference {
        self.state.borrow().preference
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.state.borrow().resolved
    }

    pub fn is_following_system(&self) -> bool {
        self.preference() == ThemePreference::System
    }

    /// Whether the store is still in use.
    pub fn persistence_available(&self) -> bool {
        self.state.borrow().store.is_some()
    }

    /// Whether platform changes are still being received.
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Records an explicit choice, persists it and schedules the apply.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        let mut state = self.state.borrow_mut();
        debug!(from = %state.preference, to = %preference, "theme preference set");
        state.preference = preference;
        state.persist();
        state.reresolve();
    }

    /// Parses and sets a preference given as its storage literal.
    pub fn set_preference_str(&mut self, raw: &str) -> Result<(), ThemeError> {
        let preference = raw.parse::<ThemePreference>()?;
        self.set_preference(preference);
        Ok(())
    }

    /// Flips the scheme currently shown.
    ///
    /// From `system` this pins the opposite of what was showing; a toggle
    /// never goes back to `system`.
    pub fn toggle(&mut self) {
        let target = self.resolved_theme().opposite();
        self.set_preference(target.into());
    }

    /// Frame boundary: applies the pending scheme, if any, exactly once.
    pub fn on_frame(&mut self) -> Option<ResolvedTheme> {
        let mut state = self.state.borrow_mut();
        let scheme = state.frame.take()?;
        state.root.apply_scheme(scheme);
        Some(scheme)
    }

    pub fn has_pending_frame(&self) -> bool {
        self.state.borrow().frame.is_pending()
    }

    /// Stops following the platform signal and drops any pending apply.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            debug!("theme controller unsubscribed from platform signal");
        }
        self.state.borrow_mut().frame.cancel();
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("state", &self.state())
            .field("subscribed", &self.is_subscribed())
            .finish_non_exhaustive()
    }
}

/// Reads and validates the stored preference.
///
/// A failing store is dropped; an unrecognized value counts as absent.
fn read_stored_preference(
    store: Box<dyn PreferenceStore>,
    key: &str,
) -> (Option<ThemePreference>, Option<Box<dyn PreferenceStore>>) {
    match store.get(key) {
        Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
            Ok(preference) => (Some(preference), Some(store)),
            Err(err) => {
                warn!(key, error = %err, "ignoring stored theme preference");
                (None, Some(store))
            }
        },
        Ok(None) => (None, Some(store)),
        Err(err) => {
            warn!(error = %err, "theme storage unreadable; preference kept in memory only");
            (None, None)
        }
    }
}

fn subscribe(
    signal: &dyn PlatformSignal,
    state: Weak<RefCell<ControllerState>>,
) -> Option<Subscription> {
    let listener = Box::new(move |prefers_dark: bool| {
        if let Some(state) = state.upgrade() {
            state.borrow_mut().on_platform_change(prefers_dark);
        }
    });

    match signal.subscribe(listener) {
        Ok(subscription) => Some(subscription),
        Err(err) => {
            debug!(error = %err, "platform color scheme changes will not be followed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::RecordingRoot;
    use crate::signal::{SignalHub, UnavailableSignal};
    use crate::storage::MemoryStore;

    const KEY: &str = "test-theme";

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Err(ThemeError::StorageUnavailable("disabled".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::StorageUnavailable("disabled".into()))
        }
    }

    /// Reads fine, refuses writes.
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), ThemeError> {
            Err(ThemeError::StorageUnavailable("quota exceeded".into()))
        }
    }

    fn config(default: ThemePreference) -> ThemeConfig {
        ThemeConfig::default()
            .with_default_preference(default)
            .with_storage_key(KEY)
    }

    fn controller(
        default: ThemePreference,
        store: MemoryStore,
        hub: &SignalHub,
    ) -> (ThemeController, RecordingRoot) {
        let root = RecordingRoot::new();
        let controller = ThemeController::initialize(
            &config(default),
            Box::new(store),
            hub,
            Box::new(root.clone()),
        );
        (controller, root)
    }

    #[test]
    fn test_initial_apply_waits_for_frame() {
        let hub = SignalHub::with_value(false);
        let (mut controller, root) = controller(ThemePreference::Dark, MemoryStore::new(), &hub);

        assert_eq!(root.apply_count(), 0);
        assert_eq!(root.frame_requests(), 1);
        assert!(controller.has_pending_frame());

        assert_eq!(controller.on_frame(), Some(ResolvedTheme::Dark));
        assert_eq!(controller.on_frame(), None);
        assert_eq!(root.applied(), vec![ResolvedTheme::Dark]);
    }

    #[test]
    fn test_stored_preference_wins_over_default() {
        let hub = SignalHub::with_value(false);
        let store = MemoryStore::with_entry(KEY, "light");
        let (controller, _) = controller(ThemePreference::Dark, store, &hub);
        assert_eq!(controller.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_unrecognized_stored_value_uses_default() {
        let hub = SignalHub::with_value(true);
        let store = MemoryStore::with_entry(KEY, "blue");
        let (controller, _) = controller(ThemePreference::System, store, &hub);
        assert_eq!(controller.preference(), ThemePreference::System);
        assert_eq!(controller.resolved_theme(), ResolvedTheme::Dark);
        assert!(controller.persistence_available());
    }

    #[test]
    fn test_rapid_changes_coalesce_into_one_apply() {
        let hub = SignalHub::with_value(false);
        let (mut controller, root) = controller(ThemePreference::Light, MemoryStore::new(), &hub);
        controller.on_frame();

        controller.set_preference(ThemePreference::Dark);
        controller.set_preference(ThemePreference::Light);
        controller.set_preference(ThemePreference::Dark);

        assert_eq!(controller.on_frame(), Some(ResolvedTheme::Dark));
        assert_eq!(root.applied(), vec![ResolvedTheme::Light, ResolvedTheme::Dark]);
        assert_eq!(root.frame_requests(), 2);
    }

    #[test]
    fn test_set_preference_str_rejects_invalid() {
        let hub = SignalHub::with_value(false);
        let store = MemoryStore::new();
        let (mut controller, _) = controller(ThemePreference::System, store.clone(), &hub);

        let err = controller.set_preference_str("sepia").unwrap_err();
        assert_eq!(err, ThemeError::InvalidPreference("sepia".into()));
        assert_eq!(controller.preference(), ThemePreference::System);
        assert_eq!(store.write_count(), 0);

        controller.set_preference_str("dark").unwrap();
        assert_eq!(controller.resolved_theme(), ResolvedTheme::Dark);
        assert_eq!(store.peek(KEY), Some("dark".to_string()));
    }

    #[test]
    fn test_unreadable_store_degrades_to_memory() {
        let hub = SignalHub::with_value(false);
        let root = RecordingRoot::new();
        let mut controller = ThemeController::initialize(
            &config(ThemePreference::System),
            Box::new(BrokenStore),
            &hub,
            Box::new(root),
        );

        assert_eq!(controller.preference(), ThemePreference::System);
        assert!(!controller.persistence_available());

        controller.set_preference(ThemePreference::Dark);
        assert_eq!(controller.resolved_theme(), ResolvedTheme::Dark);
    }

    #[test]
    fn test_write_failure_is_swallowed_and_not_retried() {
        let hub = SignalHub::with_value(false);
        let mut controller = ThemeController::initialize(
            &config(ThemePreference::System),
            Box::new(ReadOnlyStore),
            &hub,
            Box::new(RecordingRoot::new()),
        );
        assert!(controller.persistence_available());

        controller.set_preference(ThemePreference::Dark);
        assert_eq!(controller.preference(), ThemePreference::Dark);
        assert!(!controller.persistence_available());
    }

    #[test]
    fn test_unavailable_signal_pins_system_to_light() {
        let root = RecordingRoot::new();
        let mut controller = ThemeController::initialize(
            &config(ThemePreference::System),
            Box::new(MemoryStore::new()),
            &UnavailableSignal,
            Box::new(root.clone()),
        );

        assert_eq!(controller.resolved_theme(), ResolvedTheme::Light);
        assert!(!controller.is_subscribed());
        assert_eq!(controller.on_frame(), Some(ResolvedTheme::Light));
    }

    #[test]
    fn test_unset_hub_is_not_followed() {
        let hub = SignalHub::new();
        let (controller, _) = controller(ThemePreference::System, MemoryStore::new(), &hub);
        assert!(!controller.is_subscribed());

        hub.publish(true);
        assert_eq!(controller.resolved_theme(), ResolvedTheme::Light);
    }

    #[test]
    fn test_platform_reading_kept_while_pinned() {
        let hub = SignalHub::with_value(false);
        let (mut controller, _) = controller(ThemePreference::Light, MemoryStore::new(), &hub);

        hub.publish(true);
        assert_eq!(controller.resolved_theme(), ResolvedTheme::Light);

        controller.set_preference(ThemePreference::System);
        assert_eq!(controller.resolved_theme(), ResolvedTheme::Dark);
    }

    #[test]
    fn test_teardown_is_idempotent_and_cancels_pending() {
        let hub = SignalHub::with_value(false);
        let (mut controller, root) = controller(ThemePreference::System, MemoryStore::new(), &hub);

        controller.teardown();
        controller.teardown();

        assert!(!controller.is_subscribed());
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(controller.on_frame(), None);
        assert_eq!(root.apply_count(), 0);
    }

    #[test]
    fn test_drop_releases_listener() {
        let hub = SignalHub::with_value(false);
        {
            let (_controller, _) = controller(ThemePreference::System, MemoryStore::new(), &hub);
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
        hub.publish(true);
    }
}
