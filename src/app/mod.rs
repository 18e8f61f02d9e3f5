//! Application-level modules for the portfolio viewer.
//!
//! This module contains centralized state and the theme coordinator that
//! connects the theme controller to the egui host.

mod app_state;
mod theme_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;
