//! Application module
//!
//! Two screens over a fixed catalog of attractions:
//! - A scrollable list of cards, one per attraction
//! - A details screen with a "View on Map" button
//!
//! Escape (or the Android back key) returns to the list.

mod links;
pub(crate) mod settings;
mod state;
mod ui_panels;

use crate::app::settings::Settings;
use crate::app::state::{AppState, UiAction};
use eframe::egui;
use std::sync::Arc;
use travel_lib::{Catalog, Route};

/// Main application structure
pub struct TravelGuideApp {
    state: AppState,
}

impl TravelGuideApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::from_cli();

        let catalog = Catalog::builtin().unwrap_or_else(|e| {
            tracing::error!("Built-in attractions are invalid, starting empty: {}", e);
            Catalog::default()
        });
        tracing::info!("Loaded {} attractions", catalog.len());

        Self {
            state: AppState::new(Arc::new(catalog), &settings),
        }
    }
}

#[profiling::all_functions]
impl eframe::App for TravelGuideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::BrowserBack) {
                actions.push(UiAction::Back);
            }
            if i.key_pressed(egui::Key::F1) {
                actions.push(UiAction::ToggleAbout);
            }
        });

        actions.extend(ui_panels::top_bar(ctx, &self.state));

        if let Some(status) = &self.state.status {
            actions.extend(ui_panels::status_bar(ctx, status));
        }

        let screen_action = match self.state.current_route() {
            Route::List => ui_panels::attractions_list(ctx, self.state.catalog()),
            Route::Details(payload) => ui_panels::attraction_details(ctx, payload),
        };
        actions.extend(screen_action);

        if self.state.show_about {
            ui_panels::about_window(ctx, &mut self.state.show_about);
        }

        for action in actions {
            self.state.apply(action);
        }

        profiling::finish_frame!();
    }
}
