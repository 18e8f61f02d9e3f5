//! State management modules for the portfolio viewer.
//!
//! This module contains state-only logic (no UI concerns):
//! - Theme state (theme controller, platform signal hub)
//! - Navigation state (pending scroll targets)

mod navigation;
mod theme_state;

pub use navigation::NavigationState;
pub use theme_state::{ThemeState, OS_POLL_INTERVAL};
