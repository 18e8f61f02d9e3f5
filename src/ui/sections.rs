//! Page section rendering
//!
//! Each section is static content drawn with the active palette.

use eframe::egui;
use egui::{RichText, Stroke};
use folio::{with_alpha, Palette};

use crate::content::{Section, COMPANIES, EXPERIENCE, FOOTER, PROFILE, PROJECTS, SKILLS};
use crate::state::NavigationState;

const SECTION_SPACING: f32 = 48.0;

/// Renders every section in order, honoring a pending scroll request.
pub fn render_sections(ui: &mut egui::Ui, navigation: &mut NavigationState, palette: &Palette) {
    for section in Section::ALL {
        let response = ui
            .vertical(|ui| render_section(ui, section, palette))
            .response;

        if navigation.take_scroll_for(section) {
            ui.scroll_to_rect(response.rect, Some(egui::Align::TOP));
        }

        ui.add_space(SECTION_SPACING);
    }

    render_footer(ui, palette);
}

fn render_section(ui: &mut egui::Ui, section: Section, palette: &Palette) {
    match section {
        Section::Hero => render_hero(ui, palette),
        Section::About => render_about(ui, palette),
        Section::Skills => render_skills(ui, palette),
        Section::Projects => render_projects(ui, palette),
        Section::Experience => render_experience(ui, palette),
        Section::Companies => render_companies(ui, palette),
        Section::Contact => render_contact(ui, palette),
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str, palette: &Palette) {
    ui.label(RichText::new(title).size(26.0).strong().color(palette.text));
    ui.add_space(12.0);
}

/// Bordered card used by projects and experience entries.
fn card(ui: &mut egui::Ui, palette: &Palette, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .fill(palette.card)
        .stroke(Stroke::new(1.0, palette.border))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn render_hero(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(24.0);
    ui.label(
        RichText::new(format!("● {}", PROFILE.availability))
            .color(palette.success)
            .background_color(with_alpha(palette.primary, 24)),
    );
    ui.add_space(8.0);
    ui.label(RichText::new(PROFILE.name).size(44.0).strong().color(palette.text));
    ui.label(RichText::new(PROFILE.headline).size(22.0).color(palette.primary));
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        for (label, url) in PROFILE.links {
            ui.hyperlink_to(*label, *url);
        }
    });
}

fn render_about(ui: &mut egui::Ui, palette: &Palette) {
    section_heading(ui, "About", palette);
    ui.label(RichText::new(PROFILE.summary).size(16.0).color(palette.text_muted));
}

fn render_skills(ui: &mut egui::Ui, palette: &Palette) {
    section_heading(ui, "Skills", palette);
    egui::Grid::new("skills_grid")
        .num_columns(3)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            for skill in SKILLS {
                ui.label(RichText::new(skill.name).color(palette.text));
                ui.label(RichText::new(skill.category).color(palette.text_muted));
                ui.add(
                    egui::ProgressBar::new(f32::from(skill.level) / 100.0)
                        .desired_width(200.0)
                        .fill(palette.primary)
                        .text(format!("{}%", skill.level)),
                );
                ui.end_row();
            }
        });
}

fn render_projects(ui: &mut egui::Ui, palette: &Palette) {
    section_heading(ui, "Projects", palette);
    for project in PROJECTS {
        card(ui, palette, |ui| {
            ui.label(RichText::new(project.title).size(18.0).strong().color(palette.text));
            ui.label(RichText::new(project.description).color(palette.text_muted));
            ui.horizontal_wrapped(|ui| {
                for tech in project.tech {
                    ui.label(RichText::new(*tech).small().color(palette.accent));
                }
            });
        });
        ui.add_space(8.0);
    }
}

fn render_experience(ui: &mut egui::Ui, palette: &Palette) {
    section_heading(ui, "Experience", palette);
    for role in EXPERIENCE {
        card(ui, palette, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(role.position).strong().color(palette.text));
                ui.label(RichText::new(format!("@ {}", role.company)).color(palette.primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(role.period).color(palette.text_muted));
                });
            });
            for highlight in role.highlights {
                ui.label(RichText::new(format!("• {highlight}")).color(palette.text_muted));
            }
        });
        ui.add_space(8.0);
    }
}

fn render_companies(ui: &mut egui::Ui, palette: &Palette) {
    section_heading(ui, "Companies", palette);
    ui.horizontal_wrapped(|ui| {
        for (name, role) in COMPANIES {
            egui::Frame::group(ui.style())
                .fill(palette.card)
                .stroke(Stroke::new(1.0, palette.border))
                .show(ui, |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(*name).strong().color(palette.text));
                        ui.label(RichText::new(*role).small().color(palette.text_muted));
                    });
                });
        }
    });
}

fn render_contact(ui: &mut egui::Ui, palette: &Palette) {
    section_heading(ui, "Contact", palette);
    ui.label(RichText::new("Have a project in mind? Get in touch.").color(palette.text_muted));
    ui.hyperlink_to(PROFILE.email, format!("mailto:{}", PROFILE.email));
}

fn render_footer(ui: &mut egui::Ui, palette: &Palette) {
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(FOOTER).small().color(palette.text_muted));
    });
    ui.add_space(16.0);
}
