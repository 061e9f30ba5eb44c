//! Application state management
//!
//! Holds the injected catalog, the navigation stack and the link launcher.
//! Screens never mutate this directly: they return a [`UiAction`] which is
//! applied once per frame.

use crate::app::links;
use crate::app::settings::Settings;
use std::sync::Arc;
use travel_lib::{Catalog, ExternalLinkLauncher, Launched, Navigator, Route, RouteTransport};

/// Something the user asked for during the last frame
#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    /// Open the details screen for the attraction at this catalog index
    Select(usize),
    /// Return to the list
    Back,
    /// Display this link in a maps app or the browser
    OpenMap(String),
    ToggleAbout,
    DismissStatus,
}

/// Message shown in the status bar
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Main application state
pub struct AppState {
    /// Read-only list of attractions, shared with the screens
    catalog: Arc<Catalog>,

    /// List/details back stack
    pub navigator: Navigator,

    /// How the selection travels to the details screen
    pub transport: RouteTransport,

    launcher: ExternalLinkLauncher,

    /// Last outcome worth telling the user about
    pub status: Option<StatusMessage>,

    /// Whether the About window is open
    pub show_about: bool,
}

impl AppState {
    /// Create new application state from CLI settings
    pub fn new(catalog: Arc<Catalog>, settings: &Settings) -> Self {
        Self::with_launcher(
            catalog,
            settings.route_transport(),
            links::platform_launcher(settings),
        )
    }

    pub fn with_launcher(
        catalog: Arc<Catalog>,
        transport: RouteTransport,
        launcher: ExternalLinkLauncher,
    ) -> Self {
        Self {
            catalog,
            navigator: Navigator::new(),
            transport,
            launcher,
            status: None,
            show_about: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Select(index) => self.select(index),
            UiAction::Back => {
                self.back();
            }
            UiAction::OpenMap(uri) => self.open_map(&uri),
            UiAction::ToggleAbout => self.show_about = !self.show_about,
            UiAction::DismissStatus => self.status = None,
        }
    }

    /// Navigate from the list to the attraction at `index`
    pub fn select(&mut self, index: usize) {
        match self.navigator.select(&self.catalog, index, self.transport) {
            Ok(payload) => {
                tracing::debug!("Showing details for {:?}", payload.name);
                self.status = None;
            }
            Err(e) => {
                tracing::error!("Could not open attraction {}: {}", index, e);
                self.status = Some(StatusMessage::error(e.to_string()));
            }
        }
    }

    /// Return to the list. Returns `false` if already there.
    pub fn back(&mut self) -> bool {
        let moved = self.navigator.back();
        if moved {
            self.status = None;
        }
        moved
    }

    /// Display `uri` in the maps app, or the browser when no maps app is available
    pub fn open_map(&mut self, uri: &str) {
        self.status = match self.launcher.launch(uri) {
            Ok(Launched::Primary) => None,
            Ok(Launched::Fallback) => Some(StatusMessage::info(format!(
                "No {} found, opened in the {}",
                self.launcher.primary_name(),
                self.launcher.fallback_name()
            ))),
            Err(e) => {
                tracing::error!("Could not open map link {}: {}", uri, e);
                Some(StatusMessage::error(format!("Could not open map: {}", e)))
            }
        };
    }
}
