//! Visual Design Sidebar GUI Application
//!
//! A desktop rendition of a design-tool sidebar built with egui:
//! - Tab strip with Components, Pages, Assets and Layers panels
//! - Layer tree with expand/collapse and single selection
//! - Properties panel fed by layer selections over a channel
//! - Session-local extension settings
//! - Multiple themes with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `config` - Command-line flags
//! - `presentation/` - Badge and tag colors
//! - `ui/` - Panel rendering and interaction
//! - `rendering/` - Custom painting for layer rows
//! - `state/` - UI-only state components

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod presentation;
mod rendering;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator, ThemeCoordinator};
use config::Args;
use state::ThemeState;
use ui::panel_manager::PanelManager;

const APP_TITLE: &str = "Visual Design Sidebar";
const DEFAULT_LOG_FILTER: &str = "designbar=info,designbar_gui=info";

/// Parses flags, sets up logging and launches the sidebar window.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(?args, "starting {APP_TITLE}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DesignSidebarApp::new(cc, &args)))),
    )
    .map_err(|err| anyhow!("failed to run {APP_TITLE}: {err}"))
}

/// The main sidebar application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` applies launch options and panel interactions
/// - `ThemeCoordinator` handles theme persistence and application
/// - `SettingsCoordinator` persists panel widths
/// - `PanelManager` handles panel layout and rendering
struct DesignSidebarApp {
    state: AppState,
}

impl DesignSidebarApp {
    /// Restores saved preferences, then applies command-line overrides.
    fn new(cc: &eframe::CreationContext, args: &Args) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let layout = SettingsCoordinator::load_layout(cc.storage);

        let mut state = AppState::with_theme_and_layout(ThemeState::with_theme(&theme_name), layout);
        ApplicationCoordinator::apply_launch_options(&mut state, args);

        Self { state }
    }
}

impl eframe::App for DesignSidebarApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.name());
        SettingsCoordinator::save_layout(storage, &self.state.layout);
    }

    /// Main update loop:
    /// 1. Apply pending layer selections to the properties panel
    /// 2. Apply theme
    /// 3. Render all panels via PanelManager
    /// 4. Apply the frame's panel interaction
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.sync_selection();

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            ApplicationCoordinator::handle_interaction(&mut self.state, interaction);
            ctx.request_repaint();
        }
    }
}
