//! Cross-platform entry points system for egui/eframe applications
//!
//! This crate provides reusable entry points for native (desktop/mobile) and web platforms,
//! along with utilities for CLI parsing, profiling, metadata display and opening links
//! in other applications.
//!
//! # Usage
//!
//! In your application's `lib.rs`, use the `eframe_app!` macro to define all entry points:
//!
//! ```ignore
//! eframe_entrypoints::eframe_app!(
//!     "My App Name",
//!     |cc| Box::new(MyApp::new(cc))
//! );
//! ```
//!
//! This generates:
//! - Web: `create_egui_app` function for WASM builds
//! - Android: `android_main` entry point
//! - Native: `run_native()` function to call from `main.rs`
//!
//! In your `main.rs`:
//!
//! ```ignore
//! fn main() {
//!     my_app::run_native();
//! }
//! ```

pub mod cli;
pub mod open_uri;
pub mod profiling;

// Re-export commonly used types
pub use cli::{get_env, parse_args};
pub use open_uri::{OpenUriError, open_in_app, open_in_browser};
pub use profiling::profiling_ui;

mod metadata;
pub use metadata::{log_version_info, short_version_info};

#[cfg(target_arch = "wasm32")]
pub mod web;
#[cfg(target_arch = "wasm32")]
pub use web::WebHandle;

// Re-export the framework crates the macro expands to
pub use eframe;
pub use eframe::CreationContext;
pub use winit;

/// Unified macro to define all platform entry points for an eframe application.
///
/// # Arguments
///
/// * `$app_name` - A string literal with the application name (used for window title, logging, etc.)
/// * `$app_creator` - A non-capturing closure that takes `&CreationContext` and returns `Box<dyn eframe::App>`
///
/// # Example
///
/// ```ignore
/// use eframe_entrypoints::eframe_app;
///
/// pub struct MyApp;
///
/// impl MyApp {
///     pub fn new(_cc: &eframe_entrypoints::CreationContext<'_>) -> Self {
///         Self
///     }
/// }
///
/// impl eframe::App for MyApp {
///     fn update(&mut self, _ctx: &egui::Context, _frame: &mut eframe::Frame) {}
/// }
///
/// eframe_app!("My Application", |cc| Box::new(MyApp::new(cc)));
/// ```
#[macro_export]
macro_rules! eframe_app {
    ($app_name:expr, $app_creator:expr) => {
        // ==========================================
        // Web (WASM) entry point
        // ==========================================
        #[cfg(target_arch = "wasm32")]
        #[unsafe(no_mangle)] // SAFETY: there is no other global function of this name
        pub fn create_egui_app(
            cc: &$crate::eframe::CreationContext<'_>,
        ) -> Box<dyn $crate::eframe::App> {
            let creator: fn(&$crate::eframe::CreationContext<'_>) -> Box<dyn $crate::eframe::App> =
                $app_creator;
            creator(cc)
        }

        // ==========================================
        // Android entry point
        // ==========================================
        #[cfg(target_os = "android")]
        #[unsafe(no_mangle)] // SAFETY: there is no other global function of this name
        pub fn android_main(app: $crate::winit::platform::android::activity::AndroidApp) {
            $crate::android_main_impl($app_name, app, $app_creator);
        }

        // ==========================================
        // Native entry point (called from main.rs)
        // ==========================================
        /// Run the application on native (desktop) platforms.
        #[cfg(not(target_arch = "wasm32"))]
        pub fn run_native() {
            $crate::native_main_impl($app_name, $app_creator);
        }
    };
}

/// Internal implementation for Android entry point.
/// Use the `eframe_app!` macro instead of calling this directly.
#[cfg(target_os = "android")]
#[doc(hidden)]
pub fn android_main_impl(
    app_name: &str,
    app: winit::platform::android::activity::AndroidApp,
    app_creator: impl FnOnce(&eframe::CreationContext<'_>) -> Box<dyn eframe::App> + 'static,
) {
    use winit::platform::android::EventLoopBuilderExtAndroid;

    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );
    log::info!("Starting {} on Android", app_name);

    unsafe {
        // Safe: single-threaded at startup
        std::env::set_var("RUST_BACKTRACE", "full");
    }

    log_version_info(app_name);

    // Intents are started through the activity, so keep a handle for JNI calls.
    open_uri::set_android_app(app.clone());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_title(app_name),
        event_loop_builder: Some(Box::new(move |builder| {
            builder.with_android_app(app);
        })),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        app_name,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc))),
    ) {
        log::error!("{} stopped with an error: {}", app_name, e);
    }
}

/// Internal implementation for native (desktop) entry point.
/// Use the `eframe_app!` macro instead of calling this directly.
#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn native_main_impl(
    app_name: &str,
    app_creator: impl FnOnce(&eframe::CreationContext<'_>) -> Box<dyn eframe::App>,
) {
    // Must run before any logging so fmt and chrome layers share one subscriber.
    profiling::setup_logging_and_profiling();

    log_version_info(app_name);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 820.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title(app_name),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        app_name,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc))),
    ) {
        tracing::error!("{} stopped with an error: {}", app_name, e);
    }
}
