//! The attraction record shown on both screens

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Opaque identifier of an attraction picture.
///
/// Travels through routes as an integer parameter; `0` means "no image".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageRef(pub u32);

impl ImageRef {
    pub const NONE: ImageRef = ImageRef(0);

    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImageRef {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(ImageRef)
    }
}

/// A tourist site. Created once when the catalog is built and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attraction {
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub image: ImageRef,
    pub map_url: String,
}

impl Attraction {
    pub fn new(
        name: impl Into<String>,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
        image: ImageRef,
        map_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            short_description: short_description.into(),
            long_description: long_description.into(),
            image,
            map_url: map_url.into(),
        }
    }

    /// Parse the map link, failing on anything that is not an absolute URI
    pub fn map_uri(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.map_url)
    }
}
