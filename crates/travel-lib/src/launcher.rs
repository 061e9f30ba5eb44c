//! Opening map links in another application
//!
//! The launcher asks a primary [`UriHandler`] (a maps app) to display the link.
//! Only [`LaunchError::NoHandler`] triggers the single retry through the
//! fallback handler (a browser); every other error goes back to the caller.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    #[error("{handler}: no application can display {uri}")]
    NoHandler { handler: String, uri: String },

    #[error("{handler}: {message}")]
    Platform { handler: String, message: String },
}

pub type LaunchResult<T> = Result<T, LaunchError>;

/// Something that can display a URI, usually by starting another application
pub trait UriHandler {
    /// Human readable name used in logs and errors
    fn name(&self) -> &str;

    /// Ask the platform to display `uri`
    fn view(&self, uri: &str) -> LaunchResult<()>;
}

/// Which handler ended up displaying the link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Launched {
    Primary,
    Fallback,
}

pub struct ExternalLinkLauncher {
    primary: Box<dyn UriHandler>,
    fallback: Box<dyn UriHandler>,
}

impl ExternalLinkLauncher {
    pub fn new(primary: Box<dyn UriHandler>, fallback: Box<dyn UriHandler>) -> Self {
        Self { primary, fallback }
    }

    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    pub fn fallback_name(&self) -> &str {
        self.fallback.name()
    }

    /// Display `uri` with the primary handler, or the fallback when no primary app exists
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn launch(&self, uri: &str) -> LaunchResult<Launched> {
        match self.primary.view(uri) {
            Ok(()) => {
                tracing::info!("Opened {} with {}", uri, self.primary.name());
                Ok(Launched::Primary)
            }
            Err(LaunchError::NoHandler { handler, .. }) => {
                tracing::warn!("{handler}: maps app not found, opening in browser");
                self.fallback.view(uri)?;
                tracing::info!("Opened {} with {}", uri, self.fallback.name());
                Ok(Launched::Fallback)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records every call and answers with a canned result
    struct RecordingHandler {
        name: &'static str,
        outcome: LaunchResult<()>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingHandler {
        fn new(name: &'static str, outcome: LaunchResult<()>) -> (Self, Arc<Mutex<Vec<String>>>) {
            let calls = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    name,
                    outcome,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    impl UriHandler for RecordingHandler {
        fn name(&self) -> &str {
            self.name
        }

        fn view(&self, uri: &str) -> LaunchResult<()> {
            self.calls.lock().unwrap().push(uri.to_string());
            self.outcome.clone()
        }
    }

    fn no_handler(name: &str) -> LaunchResult<()> {
        Err(LaunchError::NoHandler {
            handler: name.to_string(),
            uri: String::new(),
        })
    }

    const URL: &str = "https://maps.app.goo.gl/aL6ucUkdbkWVCQyN6";

    #[test]
    fn test_primary_success_skips_fallback() {
        let (maps, maps_calls) = RecordingHandler::new("maps", Ok(()));
        let (browser, browser_calls) = RecordingHandler::new("browser", Ok(()));
        let launcher = ExternalLinkLauncher::new(Box::new(maps), Box::new(browser));

        assert_eq!(launcher.launch(URL), Ok(Launched::Primary));
        assert_eq!(*maps_calls.lock().unwrap(), vec![URL.to_string()]);
        assert!(browser_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_maps_app_falls_back_once_with_same_url() {
        let (maps, maps_calls) = RecordingHandler::new("maps", no_handler("maps"));
        let (browser, browser_calls) = RecordingHandler::new("browser", Ok(()));
        let launcher = ExternalLinkLauncher::new(Box::new(maps), Box::new(browser));

        assert_eq!(launcher.launch(URL), Ok(Launched::Fallback));
        assert_eq!(maps_calls.lock().unwrap().len(), 1);
        assert_eq!(*browser_calls.lock().unwrap(), vec![URL.to_string()]);
    }

    #[test]
    fn test_other_failures_are_not_retried() {
        let failure = Err(LaunchError::Platform {
            handler: "maps".to_string(),
            message: "security exception".to_string(),
        });
        let (maps, _) = RecordingHandler::new("maps", failure.clone());
        let (browser, browser_calls) = RecordingHandler::new("browser", Ok(()));
        let launcher = ExternalLinkLauncher::new(Box::new(maps), Box::new(browser));

        assert_eq!(launcher.launch(URL), failure.map(|_| Launched::Primary));
        assert!(browser_calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fallback_failure_propagates() {
        let (maps, _) = RecordingHandler::new("maps", no_handler("maps"));
        let (browser, browser_calls) = RecordingHandler::new("browser", no_handler("browser"));
        let launcher = ExternalLinkLauncher::new(Box::new(maps), Box::new(browser));

        let err = launcher.launch(URL).unwrap_err();
        assert!(matches!(err, LaunchError::NoHandler { ref handler, .. } if handler == "browser"));
        assert_eq!(browser_calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_handler_names() {
        let (maps, _) = RecordingHandler::new("maps", Ok(()));
        let (browser, _) = RecordingHandler::new("browser", Ok(()));
        let launcher = ExternalLinkLauncher::new(Box::new(maps), Box::new(browser));
        assert_eq!(launcher.primary_name(), "maps");
        assert_eq!(launcher.fallback_name(), "browser");
    }
}
