//! Web entry point for egui/eframe applications
//!
//! This module provides a reusable WebHandle for WASM builds. The application
//! registers its creator with [`set_app_creator`] (usually from a
//! `#[wasm_bindgen(start)]` function) and JavaScript drives the rest.

use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

type AppCreatorFn = fn(&eframe::CreationContext<'_>) -> Box<dyn eframe::App>;

static APP_CREATOR: OnceLock<AppCreatorFn> = OnceLock::new();

pub fn set_app_creator(creator: AppCreatorFn) {
    if APP_CREATOR.set(creator).is_err() {
        tracing::warn!("app_creator already set; ignoring subsequent set");
    }
}

fn log_level_from_env() -> tracing::Level {
    match super::cli::get_env::<String>("LOG_LEVEL")
        .map(|s| s.to_uppercase())
        .as_deref()
    {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(_) => tracing::Level::INFO,
        None if cfg!(debug_assertions) => tracing::Level::DEBUG,
        None => tracing::Level::INFO,
    }
}

/// Handle to the web app from JavaScript.
#[derive(Clone)]
#[wasm_bindgen]
pub struct WebHandle {
    runner: eframe::WebRunner,
}

#[wasm_bindgen]
impl WebHandle {
    /// Installs logging and a panic hook, then returns.
    #[allow(clippy::new_without_default)]
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Env values (e.g. LOG_LEVEL) must be known before logging starts.
        super::cli::parse_env();
        {
            use tracing_subscriber::layer::SubscriberExt;
            use tracing_subscriber::util::SubscriberInitExt;
            use tracing_wasm::WASMLayerConfigBuilder;

            let mut builder = WASMLayerConfigBuilder::new();
            builder.set_max_level(log_level_from_env());
            let _ = tracing_subscriber::registry()
                .with(tracing_wasm::WASMLayer::new(builder.build()))
                .try_init();
        }
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        Self {
            runner: eframe::WebRunner::new(),
        }
    }

    /// Call this once from JavaScript to start your app.
    #[wasm_bindgen]
    pub async fn start(
        &self,
        canvas: web_sys::HtmlCanvasElement,
    ) -> Result<(), wasm_bindgen::JsValue> {
        let Some(creator) = APP_CREATOR.get().copied() else {
            return Err(wasm_bindgen::JsValue::from_str("app_creator not set"));
        };

        self.runner
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(creator(cc))),
            )
            .await
    }

    /// Destroys the app and frees resources.
    #[wasm_bindgen]
    pub fn destroy(&self) {
        self.runner.destroy();
    }

    /// The JavaScript can check whether or not your app has crashed.
    #[wasm_bindgen]
    pub fn has_panicked(&self) -> bool {
        self.runner.has_panicked()
    }

    /// Returns the panic message if the app has panicked.
    #[wasm_bindgen]
    pub fn panic_message(&self) -> Option<String> {
        self.runner.panic_summary().map(|s| s.message())
    }
}
