//! Centralized application state for the portfolio viewer.
//!
//! Focused state components are composed here so panels can borrow the part
//! they need without holding the whole application.

use crate::state::{NavigationState, ThemeState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Theme controller and platform signal
    pub theme: ThemeState,

    /// Header navigation requests
    pub navigation: NavigationState,
}

impl AppState {
    /// Creates application state around an initialized theme state.
    pub fn new(theme: ThemeState) -> Self {
        Self {
            theme,
            navigation: NavigationState::new(),
        }
    }
}
