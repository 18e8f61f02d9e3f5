//! UI panel rendering subsystem
//!
//! This module contains all panel rendering for the portfolio viewer:
//! - Header panel (site title, section navigation, theme toggle and picker)
//! - Sections (hero, about, skills, projects, experience, companies, contact, footer)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod sections;
pub mod panel_manager;
