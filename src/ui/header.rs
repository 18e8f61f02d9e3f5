//! Header panel UI rendering
//!
//! Handles the top bar with the site title, section navigation and the theme
//! toggle and picker.

use eframe::egui;
use egui::RichText;
use folio::ThemePreference;

use crate::app::AppState;
use crate::content::{Section, PROFILE};

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User clicked a navigation entry
    NavigateTo(Section),
    /// User clicked the two-state theme toggle
    ToggleTheme,
    /// User picked a preference from the picker
    PreferenceSelected(ThemePreference),
}

/// Renders the application header
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;
    let resolved = state.theme.resolved_theme();

    ui.horizontal(|ui| {
        ui.label(RichText::new(PROFILE.name).strong().size(18.0));

        ui.separator();

        for section in Section::ALL {
            if ui.link(section.nav_label()).clicked() {
                interaction = Some(HeaderInteraction::NavigateTo(section));
            }
        }

        // Push theme controls to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle = ui
                .button(RichText::new(resolved.icon()).size(16.0))
                .on_hover_text(resolved.toggle_hint());
            if toggle.clicked() {
                interaction = Some(HeaderInteraction::ToggleTheme);
            }

            let current = state.theme.preference();
            let mut picked = current;
            egui::ComboBox::from_id_salt("theme_picker")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for preference in ThemePreference::ALL {
                        ui.selectable_value(&mut picked, preference, preference.label());
                    }
                });

            if picked != current {
                interaction = Some(HeaderInteraction::PreferenceSelected(picked));
            }

            ui.label("Theme:");
        });
    });

    interaction
}
