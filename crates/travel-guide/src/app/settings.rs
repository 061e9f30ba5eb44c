use clap::Parser;
use eframe_entrypoints::parse_args;
use travel_lib::RouteTransport;

/// Package of the Google Maps app, targeted first on Android
pub const DEFAULT_MAPS_PACKAGE: &str = "com.google.android.apps.maps";

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Travel Guide - A cross-platform list of tourist attractions with links to their maps
pub struct Settings {
    /// Desktop program used to display map links (e.g. `gnome-maps`). Without it links open in the browser.
    #[clap(long, value_name = "APP")]
    pub maps_app: Option<String>,

    /// Android package asked to display map links before falling back to the browser
    #[clap(long, value_name = "PACKAGE", default_value = DEFAULT_MAPS_PACKAGE)]
    pub maps_package: String,

    /// Pass the selected attraction to the details screen as a percent-encoded route path
    #[clap(long, default_value = "false")]
    pub encoded_routes: bool,
}

impl Settings {
    /// Parse settings from the command line (GET parameters on web)
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => {
                #[cfg(not(target_arch = "wasm32"))]
                e.exit();
                #[cfg(target_arch = "wasm32")]
                {
                    let user_msg = format!(
                        "Error parsing CLI:\n{}\n
    You should change the GET params, using the cli prefix.\n
    Starting anyway without args.",
                        e
                    );
                    if let Some(window) = web_sys::window() {
                        window.alert_with_message(&user_msg).unwrap_or(());
                    } else {
                        tracing::error!(user_msg);
                    }
                    Settings::parse_from(["travel-guide"]) // Default args on web if parsing fails
                }
            }
        }
    }

    pub fn route_transport(&self) -> RouteTransport {
        if self.encoded_routes {
            RouteTransport::Encoded
        } else {
            RouteTransport::Typed
        }
    }

    /// Application the primary handler targets on this platform, if any
    pub fn maps_target(&self) -> Option<String> {
        if cfg!(target_os = "android") {
            Some(self.maps_package.clone()).filter(|p| !p.is_empty())
        } else {
            self.maps_app.clone().filter(|a| !a.is_empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::parse_from(["travel-guide"]);
        assert_eq!(settings.maps_app, None);
        assert_eq!(settings.maps_package, DEFAULT_MAPS_PACKAGE);
        assert_eq!(settings.route_transport(), RouteTransport::Typed);
    }

    #[test]
    fn test_flags() {
        let settings = Settings::parse_from([
            "travel-guide",
            "--maps-app",
            "gnome-maps",
            "--maps-package",
            "net.osmand",
            "--encoded-routes",
        ]);
        assert_eq!(settings.maps_app.as_deref(), Some("gnome-maps"));
        assert_eq!(settings.maps_package, "net.osmand");
        assert_eq!(settings.route_transport(), RouteTransport::Encoded);
    }

    #[test]
    #[cfg(not(target_os = "android"))]
    fn test_maps_target_on_desktop() {
        let mut settings = Settings::parse_from(["travel-guide"]);
        assert_eq!(settings.maps_target(), None);
        settings.maps_app = Some("gnome-maps".to_string());
        assert_eq!(settings.maps_target().as_deref(), Some("gnome-maps"));
        settings.maps_app = Some(String::new());
        assert_eq!(settings.maps_target(), None);
    }
}
