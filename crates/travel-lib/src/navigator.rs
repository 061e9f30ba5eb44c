//! Two-screen navigation state
//!
//! The back stack always starts at [`Route::List`] and holds at most one
//! details entry on top of it.

use crate::{Catalog, DetailsPayload, GuideError, Result, Route};

/// How the selected attraction travels from the list to the details screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteTransport {
    /// Hand the [`DetailsPayload`] over in memory
    #[default]
    Typed,
    /// Serialize to the percent-encoded path and parse it back on arrival
    Encoded,
}

#[derive(Debug)]
pub struct Navigator {
    back_stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Navigator {
    pub fn new() -> Self {
        Self {
            back_stack: vec![Route::List],
        }
    }

    pub fn current(&self) -> &Route {
        // The root entry is never popped.
        self.back_stack.last().unwrap_or(&Route::List)
    }

    pub fn is_at_root(&self) -> bool {
        self.back_stack.len() <= 1
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Move to `route`.
    ///
    /// Details is only reachable from the list; going to the list pops back to the root.
    pub fn navigate(&mut self, route: Route) -> Result<()> {
        match route {
            Route::List => {
                self.back();
                Ok(())
            }
            Route::Details(_) if self.is_at_root() => {
                tracing::debug!("Navigate: {}", route.to_path());
                self.back_stack.push(route);
                Ok(())
            }
            Route::Details(_) => Err(GuideError::InvalidTransition {
                from: self.current().kind(),
                to: route.kind(),
            }),
        }
    }

    /// Decode a path produced by [`Route::to_path`] and navigate to it
    pub fn navigate_to_path(&mut self, path: &str) -> Result<()> {
        let route = Route::parse(path)?;
        self.navigate(route)
    }

    /// Open the details screen for the attraction at `index` in `catalog`
    pub fn select(
        &mut self,
        catalog: &Catalog,
        index: usize,
        transport: RouteTransport,
    ) -> Result<&DetailsPayload> {
        let attraction = catalog.try_get(index)?;
        let route = Route::details(attraction);
        match transport {
            RouteTransport::Typed => self.navigate(route)?,
            RouteTransport::Encoded => self.navigate_to_path(&route.to_path())?,
        }
        self.current()
            .payload()
            .ok_or(GuideError::InvalidTransition {
                from: "list",
                to: "details",
            })
    }

    /// Pop back to the list. Returns `false` if already there.
    pub fn back(&mut self) -> bool {
        if self.is_at_root() {
            return false;
        }
        if let Some(left) = self.back_stack.pop() {
            tracing::debug!("Back from {}", left.kind());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attraction, ImageRef};

    fn tricky_catalog() -> Catalog {
        Catalog::new(vec![
            Attraction::new("Plain", "p", "plain", ImageRef(1), "https://a.example"),
            Attraction::new(
                "Slash / and % and 日月潭",
                "50% off? #1 & more",
                "Line one\nLine two, with 'quotes' and \"doubles\"",
                ImageRef(u32::MAX),
                "https://maps.example/path/to?q=sun moon&lang=zh#top",
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_starts_at_list() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), &Route::List);
        assert!(navigator.is_at_root());
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn test_select_taipei_101() {
        let catalog = Catalog::builtin().unwrap();
        let mut navigator = Navigator::new();

        let payload = navigator
            .select(&catalog, 3, RouteTransport::Typed)
            .unwrap();
        assert_eq!(payload.name, "Taipei 101");
        assert_eq!(payload.short_description, "Landmark");
        assert_eq!(navigator.depth(), 2);
    }

    #[test]
    fn test_every_selection_matches_source_both_transports() {
        for catalog in [Catalog::builtin().unwrap(), tricky_catalog()] {
            for transport in [RouteTransport::Typed, RouteTransport::Encoded] {
                for (index, attraction) in catalog.iter().enumerate() {
                    let mut navigator = Navigator::new();
                    let payload = navigator.select(&catalog, index, transport).unwrap();
                    assert_eq!(payload, &DetailsPayload::from(attraction));
                }
            }
        }
    }

    #[test]
    fn test_back_returns_to_list() {
        let catalog = Catalog::builtin().unwrap();
        let mut navigator = Navigator::new();
        navigator
            .select(&catalog, 0, RouteTransport::Encoded)
            .unwrap();

        assert!(navigator.back());
        assert_eq!(navigator.current(), &Route::List);
        assert!(!navigator.back());
        assert_eq!(navigator.depth(), 1);
    }

    #[test]
    fn test_details_only_from_list() {
        let catalog = Catalog::builtin().unwrap();
        let mut navigator = Navigator::new();
        navigator.select(&catalog, 1, RouteTransport::Typed).unwrap();

        let err = navigator
            .select(&catalog, 2, RouteTransport::Typed)
            .unwrap_err();
        assert!(matches!(err, GuideError::InvalidTransition { .. }));
        // Still on the first selection.
        assert_eq!(navigator.current().payload().unwrap().name, "Ximen");
    }

    #[test]
    fn test_navigate_to_list_acts_as_back() {
        let catalog = Catalog::builtin().unwrap();
        let mut navigator = Navigator::new();
        navigator.navigate(Route::List).unwrap();
        assert_eq!(navigator.depth(), 1);

        navigator.select(&catalog, 4, RouteTransport::Typed).unwrap();
        navigator.navigate_to_path("attractions_list").unwrap();
        assert!(navigator.is_at_root());
    }

    #[test]
    fn test_navigate_to_path_with_missing_params() {
        let mut navigator = Navigator::new();
        navigator
            .navigate_to_path("attraction_details/Only%20a%20name")
            .unwrap();
        let payload = navigator.current().payload().unwrap();
        assert_eq!(payload.name, "Only a name");
        assert_eq!(payload.short_description, "");
        assert_eq!(payload.image, ImageRef::NONE);
    }

    #[test]
    fn test_select_out_of_range() {
        let catalog = Catalog::builtin().unwrap();
        let mut navigator = Navigator::new();
        assert!(matches!(
            navigator.select(&catalog, 10, RouteTransport::Typed),
            Err(GuideError::IndexOutOfRange { index: 10, len: 10 })
        ));
        assert!(navigator.is_at_root());
    }
}
