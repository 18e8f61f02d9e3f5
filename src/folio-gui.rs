//! Portfolio Viewer GUI Application
//!
//! A single-page portfolio rendered with egui. The page features:
//! - Presentational sections (hero, about, skills, projects, experience, companies, contact)
//! - Header navigation that scrolls to a section
//! - A light/dark theme toggle and a light/dark/system picker, persisted across runs
//! - Live following of the OS color scheme while the preference is `system`

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and theme coordination
//! - `state/` - Focused state components (theme, navigation)
//! - `ui/` - Panel rendering
//! - `content` - Static page content
//!
//! Usage: `folio-gui [--config <path>]`

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use folio::AppConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod app;
mod content;
mod state;
mod ui;

use app::{AppState, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

/// Main application entry point that loads configuration and launches the window.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match parse_config_path(std::env::args().skip(1))? {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, &config)))),
    )
    .map_err(|err| anyhow!("{err}"))
    .context("Failed to run the portfolio window")
}

/// Reads `--config <path>` from the command line.
fn parse_config_path(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>> {
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let value = args.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                path = Some(PathBuf::from(value));
            }
            other => tracing::warn!("Unknown argument: {}", other),
        }
    }
    Ok(path)
}

/// The portfolio viewer application.
///
/// - `ThemeCoordinator` handles theme setup and the per-frame apply
/// - `PanelManager` handles panel layout and rendering
struct FolioApp {
    /// Centralized application state
    state: AppState,
}

impl FolioApp {
    /// Creates the viewer with the theme preference loaded from storage.
    fn new(cc: &eframe::CreationContext, config: &AppConfig) -> Self {
        let theme = ThemeCoordinator::create_theme_state(&cc.egui_ctx, config);
        Self {
            state: AppState::new(theme),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::NavigateTo(section) => {
                self.state.navigation.request_scroll(section);
            }
            PanelInteraction::ToggleTheme => self.state.theme.toggle(),
            PanelInteraction::SetPreference(preference) => {
                self.state.theme.set_preference(preference);
            }
        }
    }
}

impl eframe::App for FolioApp {
    /// Main update loop:
    /// 1. Sync the platform signal and apply the pending theme
    /// 2. Render all panels via PanelManager
    /// 3. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::begin_frame(ctx, &mut self.state.theme);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction);
        }
    }
}

impl Drop for FolioApp {
    fn drop(&mut self) {
        self.state.theme.controller_mut().teardown();
    }
}
