//! Platform handlers behind the "View on Map" button

use crate::app::settings::Settings;
use eframe_entrypoints::{OpenUriError, open_in_app, open_in_browser};
use travel_lib::launcher::LaunchResult;
use travel_lib::{ExternalLinkLauncher, LaunchError, UriHandler};

fn launch_error(handler: &str, e: OpenUriError) -> LaunchError {
    match e {
        OpenUriError::NoHandler(uri) => LaunchError::NoHandler {
            handler: handler.to_string(),
            uri,
        },
        OpenUriError::Failed(message) => LaunchError::Platform {
            handler: handler.to_string(),
            message,
        },
    }
}

/// The dedicated maps application: an Android package or a desktop program
pub struct MapsAppHandler {
    target: Option<String>,
}

impl MapsAppHandler {
    pub fn new(target: Option<String>) -> Self {
        Self { target }
    }
}

impl UriHandler for MapsAppHandler {
    fn name(&self) -> &str {
        "maps app"
    }

    fn view(&self, uri: &str) -> LaunchResult<()> {
        let Some(app) = self.target.as_deref() else {
            return Err(LaunchError::NoHandler {
                handler: self.name().to_string(),
                uri: uri.to_string(),
            });
        };
        open_in_app(uri, app).map_err(|e| launch_error(self.name(), e))
    }
}

/// Whatever the platform uses to display web links
pub struct BrowserHandler;

impl UriHandler for BrowserHandler {
    fn name(&self) -> &str {
        "browser"
    }

    fn view(&self, uri: &str) -> LaunchResult<()> {
        open_in_browser(uri).map_err(|e| launch_error(self.name(), e))
    }
}

/// Maps app first, browser as the fallback
pub fn platform_launcher(settings: &Settings) -> ExternalLinkLauncher {
    let target = settings.maps_target();
    match &target {
        Some(app) => tracing::info!("Map links open with {}", app),
        None => tracing::info!("No maps app configured, map links open in the browser"),
    }
    ExternalLinkLauncher::new(
        Box::new(MapsAppHandler::new(target)),
        Box::new(BrowserHandler),
    )
}
