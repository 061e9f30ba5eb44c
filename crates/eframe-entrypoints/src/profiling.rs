/*!
Profiling and logging integration for eframe-entrypoints.

This module exposes a consistent API regardless of whether the
profiling feature is compiled in. There are two implementations:

- real: compiled only when `feature = "profiling"` is set.
  A reloadable tracing-chrome layer that records to `trace-<unix time>.json`
  while enabled. Stopping flushes the file and logs its location
  (open it with <https://ui.perfetto.dev>).
- stub: compiled in all other configurations.
  No-op profiling functions and a logging-only initialization.

Top-level API (always available):
- `setup_logging_and_profiling()`
- `start_profiling()`
- `stop_profiling()`
- `is_profiling_enabled() -> bool`
- `profiling_ui(&mut egui::Ui)`
*/

/// Filter used when `RUST_LOG` is not set
fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,eframe::native=warn,egui::context=warn,egui_wgpu=info,wgpu_core=warn,wgpu_hal=warn,naga=warn"
    } else {
        "info,eframe=warn,egui::context=warn,wgpu_core=warn,wgpu_hal=warn"
    }
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter()))
}

#[cfg(feature = "profiling")]
mod inner {
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};

    use tracing_chrome::{ChromeLayer, ChromeLayerBuilder, FlushGuard};
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{Registry, reload};

    /// State used by the real profiling implementation.
    struct ProfilingState {
        /// Reload handle for the chrome layer
        reload_handle: reload::Handle<Option<ChromeLayer<Registry>>, Registry>,
        /// Guard which, when dropped, flushes the trace file
        guard: Option<FlushGuard>,
        /// Trace file being written (Some while recording)
        trace_file: Option<PathBuf>,
    }

    static PROFILING_STATE: Mutex<Option<ProfilingState>> = Mutex::new(None);

    fn profiling_state() -> MutexGuard<'static, Option<ProfilingState>> {
        PROFILING_STATE.lock().unwrap_or_else(|poisoned| {
            tracing::warn!("Profiling state mutex poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Initialize logging and the reloadable chrome layer (disabled until started).
    pub fn setup_logging_and_profiling() {
        let fmt_layer = tracing_subscriber::fmt::layer().with_filter(super::env_filter());

        let (reload_layer, reload_handle) = reload::Layer::new(None::<ChromeLayer<Registry>>);
        let registry = tracing_subscriber::registry()
            .with(reload_layer)
            .with(fmt_layer);

        *profiling_state() = Some(ProfilingState {
            reload_handle,
            guard: None,
            trace_file: None,
        });

        if registry.try_init().is_err() {
            tracing::warn!("A global tracing subscriber was already installed");
            return;
        }
        tracing::info!("Tracing initialized with reloadable chrome profiling layer");

        // Optional auto-start if environment variable set
        if std::env::var("ENABLE_PROFILING").is_ok() {
            tracing::info!("ENABLE_PROFILING set - starting profiling session at startup");
            start_profiling();
        }
    }

    fn new_trace_path() -> PathBuf {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        std::env::temp_dir().join(format!("trace-{}.json", secs))
    }

    /// Start a profiling session by enabling the chrome layer and creating a FlushGuard.
    pub fn start_profiling() {
        let mut state_opt = profiling_state();
        let Some(state) = state_opt.as_mut() else {
            tracing::error!("Profiling state not initialized");
            return;
        };

        if state.trace_file.is_some() {
            tracing::warn!("Profiling already enabled");
            return;
        }

        let trace_file = new_trace_path();
        let (chrome_layer, guard) = ChromeLayerBuilder::new()
            .file(&trace_file)
            .include_args(true)
            .build();

        if let Err(e) = state.reload_handle.reload(Some(chrome_layer)) {
            tracing::error!("Failed to enable chrome layer: {:?}", e);
            return;
        }

        state.guard = Some(guard);
        state.trace_file = Some(trace_file);
        tracing::info!("Profiling session started");
    }

    /// Stop profiling: disable the chrome layer and drop the guard to flush the file.
    pub fn stop_profiling() {
        let mut state_opt = profiling_state();
        let Some(state) = state_opt.as_mut() else {
            tracing::error!("Profiling state not initialized");
            return;
        };

        let Some(trace_file) = state.trace_file.take() else {
            tracing::warn!("Profiling not enabled");
            return;
        };

        if let Err(e) = state.reload_handle.reload(None::<ChromeLayer<Registry>>) {
            tracing::error!("Failed to disable chrome layer: {:?}", e);
        }
        state.guard = None;

        match std::fs::metadata(&trace_file) {
            Ok(md) => tracing::info!(
                "Trace written to {} ({} bytes), open it in https://ui.perfetto.dev",
                trace_file.display(),
                md.len()
            ),
            Err(e) => tracing::error!("Trace file {} missing: {}", trace_file.display(), e),
        }
    }

    pub fn is_profiling_enabled() -> bool {
        profiling_state()
            .as_ref()
            .is_some_and(|s| s.trace_file.is_some())
    }

    pub fn profiling_ui(ui: &mut egui::Ui) {
        egui::warn_if_debug_build(ui);

        let mut enabled = is_profiling_enabled();
        if ui.checkbox(&mut enabled, "Record profiling trace").changed() {
            if enabled {
                start_profiling();
            } else {
                stop_profiling();
            }
        }

        if enabled {
            ui.label("⏺ Recording active. Stop to write the trace file.");
        }
    }
}

#[cfg(not(feature = "profiling"))]
mod inner {
    use tracing_subscriber::prelude::*;

    /// Initialize logging with sensible defaults; profiling is a no-op here.
    pub fn setup_logging_and_profiling() {
        let fmt_layer = tracing_subscriber::fmt::layer().with_filter(super::env_filter());
        if tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .is_err()
        {
            tracing::warn!("A global tracing subscriber was already installed");
            return;
        }

        tracing::info!("Logging initialized (profiling disabled in this build)");
    }

    pub fn start_profiling() {
        tracing::info!("start_profiling() called but profiling is disabled in this build");
    }

    pub fn stop_profiling() {
        tracing::info!("stop_profiling() called but profiling is disabled in this build");
    }

    pub fn is_profiling_enabled() -> bool {
        false
    }

    pub fn profiling_ui(ui: &mut egui::Ui) {
        ui.label("Profiling feature not enabled in this build.");
    }
}

// Re-export a stable API surface regardless of which `inner` module was compiled.
pub use inner::{
    is_profiling_enabled, profiling_ui, setup_logging_and_profiling, start_profiling,
    stop_profiling,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let filter = tracing_subscriber::EnvFilter::try_new(default_log_filter());
        assert!(filter.is_ok());
    }

    #[test]
    fn test_profiling_disabled_until_started() {
        assert!(!is_profiling_enabled());
        // Stopping without a session is harmless.
        stop_profiling();
        assert!(!is_profiling_enabled());
    }
}
