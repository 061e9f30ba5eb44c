//! Travel Library - Core types for the Travel Guide app
//!
//! Everything here is independent from the UI so it can be tested without a window.
//!
//! # Architecture
//!
//! - **[`Attraction`]**: Immutable record describing one tourist site
//! - **[`Catalog`]**: Validated, ordered list of attractions injected into the app at startup
//! - **[`Route`]**: The two navigation destinations and their percent-encoded path form
//! - **[`Navigator`]**: One-level back stack between the list and the details view
//! - **[`ExternalLinkLauncher`]**: Opens map links with a single "no handler" fallback

mod attraction;
mod catalog;
pub mod launcher;
mod navigator;
pub mod route;

// Public API exports
pub use attraction::{Attraction, ImageRef};
pub use catalog::Catalog;
pub use launcher::{ExternalLinkLauncher, LaunchError, Launched, UriHandler};
pub use navigator::{Navigator, RouteTransport};
pub use route::{DetailsPayload, Route};

/// Error types for catalog validation and navigation
#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("Invalid map URL for {name:?}: {url:?} ({source})")]
    InvalidMapUrl {
        name: String,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unknown route destination: {0:?}")]
    UnknownDestination(String),

    #[error("Unexpected route segments after {destination:?}: {extra}")]
    UnexpectedSegments { destination: String, extra: usize },

    #[error("Invalid image reference in route: {0:?}")]
    InvalidImageRef(String),

    #[error("Cannot navigate from {from} to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("No attraction at index {index} (catalog has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let _: fn() -> Navigator = Navigator::new;
        let _: fn(Vec<Attraction>) -> Result<Catalog> = Catalog::new;
        let _: fn(&str) -> Result<Route> = Route::parse;
    }

    #[test]
    fn test_error_messages() {
        let err = GuideError::IndexOutOfRange { index: 12, len: 10 };
        assert_eq!(err.to_string(), "No attraction at index 12 (catalog has 10)");

        let err = GuideError::InvalidTransition {
            from: "details",
            to: "details",
        };
        assert_eq!(err.to_string(), "Cannot navigate from details to details");
    }
}
