//! Travel Guide - Application Library
//!
//! Wires the attraction catalog and navigation from `travel-lib` into an egui
//! app and defines the entry points for every platform.

mod app;

pub use app::TravelGuideApp;

// Define all platform entry points using the unified macro
eframe_entrypoints::eframe_app!("Travel Guide", |cc| Box::new(TravelGuideApp::new(cc)));

/// Registers the app with the web runner when the wasm module loads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn register_web_app() {
    eframe_entrypoints::web::set_app_creator(create_egui_app);
}
