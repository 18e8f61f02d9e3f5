//! Platform color-scheme signal and its subscription handle.
//!
//! A [`PlatformSignal`] reports whether the platform prefers a dark scheme and
//! notifies listeners when that changes. Registration returns a
//! [`Subscription`]; releasing it is the single teardown step.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::error::ThemeError;

/// Receives the new "prefers dark" value.
pub type SignalListener = Box<dyn FnMut(bool)>;

/// A live "prefers dark color scheme" signal.
pub trait PlatformSignal {
    /// Current reading.
    fn prefers_dark(&self) -> Result<bool, ThemeError>;

    /// Registers a change listener.
    fn subscribe(&self, listener: SignalListener) -> Result<Subscription, ThemeError>;
}

/// Handle for one registered listener.
///
/// Dropping the handle unsubscribes as well.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps a release action, run exactly once.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

struct ListenerSlot {
    id: u64,
    active: Cell<bool>,
    callback: RefCell<SignalListener>,
}

#[derive(Default)]
struct HubState {
    current: Option<bool>,
    next_id: u64,
    listeners: Vec<Rc<ListenerSlot>>,
}

/// Push-based signal fed by the host.
///
/// Unset until the first [`publish`](SignalHub::publish). Clones share state.
#[derive(Clone, Default)]
pub struct SignalHub {
    state: Rc<RefCell<HubState>>,
}

impl SignalHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hub already holding a reading.
    pub fn with_value(prefers_dark: bool) -> Self {
        let hub = Self::new();
        hub.state.borrow_mut().current = Some(prefers_dark);
        hub
    }

    /// Records a reading and notifies listeners if it changed.
    ///
    /// Returns whether listeners were notified.
    pub fn publish(&self, prefers_dark: bool) -> bool {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            if state.current == Some(prefers_dark) {
                return false;
            }
            state.current = Some(prefers_dark);
            state.listeners.clone()
        };

        debug!(prefers_dark, listeners = snapshot.len(), "platform color scheme changed");

        // Borrow released: listeners may subscribe or unsubscribe from inside.
        for slot in snapshot {
            if !slot.active.get() {
                continue;
            }
            // A listener already running further up the stack is skipped.
            if let Ok(mut callback) = slot.callback.try_borrow_mut() {
                callback(prefers_dark);
            }
        }
        true
    }

    pub fn listener_count(&self) -> usize {
        self.state.borrow().listeners.len()
    }
}

impl PlatformSignal for SignalHub {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        self.state
            .borrow()
            .current
            .ok_or(ThemeError::PlatformSignalUnavailable)
    }

    fn subscribe(&self, listener: SignalListener) -> Result<Subscription, ThemeError> {
        let slot = {
            let mut state = self.state.borrow_mut();
            let id = state.next_id;
            state.next_id += 1;
            let slot = Rc::new(ListenerSlot {
                id,
                active: Cell::new(true),
                callback: RefCell::new(listener),
            });
            state.listeners.push(Rc::clone(&slot));
            slot
        };

        let hub: Weak<RefCell<HubState>> = Rc::downgrade(&self.state);
        Ok(Subscription::new(move || {
            slot.active.set(false);
            if let Some(hub) = hub.upgrade() {
                hub.borrow_mut().listeners.retain(|s| s.id != slot.id);
            }
        }))
    }
}

/// A platform without the color-scheme capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSignal;

impl PlatformSignal for UnavailableSignal {
    fn prefers_dark(&self) -> Result<bool, ThemeError> {
        Err(ThemeError::PlatformSignalUnavailable)
    }

    fn subscribe(&self, _listener: SignalListener) -> Result<Subscription, ThemeError> {
        Err(ThemeError::PlatformSignalUnavailable)
    }
}

/// Asks the operating system once whether it prefers a dark scheme.
pub fn detect_os_prefers_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}
