//! Panel orchestration and layout management.
//!
//! Coordinates the header and the scrolling page body, and reports header
//! interactions back to the application.

use folio::Palette;

use crate::app::AppState;
use crate::ui::{header, sections};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// Scroll the page to a section
    NavigateTo(crate::content::Section),
    /// Flip the scheme currently shown
    ToggleTheme,
    /// Set an explicit theme preference
    SetPreference(folio::ThemePreference),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from the eframe::App::update() implementation, after the theme
    /// for this frame has been applied.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;
        let palette = Palette::for_scheme(state.theme.resolved_theme());

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::NavigateTo(section) => {
                        PanelInteraction::NavigateTo(section)
                    }
                    header::HeaderInteraction::ToggleTheme => PanelInteraction::ToggleTheme,
                    header::HeaderInteraction::PreferenceSelected(preference) => {
                        PanelInteraction::SetPreference(preference)
                    }
                });
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    egui::Frame::default()
                        .inner_margin(egui::Margin::symmetric(32, 16))
                        .show(ui, |ui| {
                            sections::render_sections(ui, &mut state.navigation, &palette);
                        });
                });
        });

        interaction
    }
}
