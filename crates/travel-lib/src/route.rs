//! Navigation destinations and their path encoding
//!
//! Screens normally exchange a typed [`DetailsPayload`]. The path form below
//! exists for the cases where a route has to become a string, e.g. logging or
//! the `--encoded-routes` transport:
//!
//! ```text
//! attractions_list
//! attraction_details/{attractionName}/{shortDescription}/{longDescription}/{attractionImageResId}/{mapUrl}
//! ```
//!
//! Every text parameter is percent-encoded on its own, so it never contains `/`.

use crate::{Attraction, GuideError, ImageRef, Result};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::fmt;
use std::str::FromStr;

pub const LIST_DESTINATION: &str = "attractions_list";
pub const DETAILS_DESTINATION: &str = "attraction_details";
pub const DETAILS_TEMPLATE: &str = "attraction_details/{attractionName}/{shortDescription}/{longDescription}/{attractionImageResId}/{mapUrl}";

/// Bytes left untouched: ASCII alphanumerics plus `_-!.~'()*`
const ROUTE_PARAM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'!')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Percent-encode one route parameter
pub fn encode_param(text: &str) -> String {
    utf8_percent_encode(text, ROUTE_PARAM).to_string()
}

/// Decode one route parameter. Invalid UTF-8 becomes U+FFFD instead of failing.
pub fn decode_param(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}

/// Everything the details screen shows, handed over from the list screen
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsPayload {
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub image: ImageRef,
    pub map_url: String,
}

impl From<&Attraction> for DetailsPayload {
    fn from(attraction: &Attraction) -> Self {
        Self {
            name: attraction.name.clone(),
            short_description: attraction.short_description.clone(),
            long_description: attraction.long_description.clone(),
            image: attraction.image,
            map_url: attraction.map_url.clone(),
        }
    }
}

/// A navigation destination
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    List,
    Details(DetailsPayload),
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Route {
    pub fn details(attraction: &Attraction) -> Self {
        Route::Details(attraction.into())
    }

    /// Short destination name, used in logs and errors
    pub fn kind(&self) -> &'static str {
        match self {
            Route::List => "list",
            Route::Details(_) => "details",
        }
    }

    pub fn payload(&self) -> Option<&DetailsPayload> {
        match self {
            Route::List => None,
            Route::Details(payload) => Some(payload),
        }
    }

    /// Serialize to the path form, encoding each parameter individually
    pub fn to_path(&self) -> String {
        match self {
            Route::List => LIST_DESTINATION.to_string(),
            Route::Details(p) => format!(
                "{}/{}/{}/{}/{}/{}",
                DETAILS_DESTINATION,
                encode_param(&p.name),
                encode_param(&p.short_description),
                encode_param(&p.long_description),
                p.image,
                encode_param(&p.map_url),
            ),
        }
    }

    /// Parse the path form.
    ///
    /// Missing trailing parameters default to `""` and [`ImageRef::NONE`].
    /// A leading `/` and trailing empty segments are ignored.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let mut segments = path.split('/');
        let destination = segments.next().unwrap_or_default();

        let route = match destination {
            LIST_DESTINATION => Route::List,
            DETAILS_DESTINATION => {
                let name = text_param(segments.next());
                let short_description = text_param(segments.next());
                let long_description = text_param(segments.next());
                let image = image_param(segments.next())?;
                let map_url = text_param(segments.next());
                Route::Details(DetailsPayload {
                    name,
                    short_description,
                    long_description,
                    image,
                    map_url,
                })
            }
            other => return Err(GuideError::UnknownDestination(other.to_string())),
        };

        let extra = segments.filter(|s| !s.is_empty()).count();
        if extra > 0 {
            return Err(GuideError::UnexpectedSegments {
                destination: destination.to_string(),
                extra,
            });
        }
        Ok(route)
    }
}

fn text_param(segment: Option<&str>) -> String {
    segment.map(decode_param).unwrap_or_default()
}

fn image_param(segment: Option<&str>) -> Result<ImageRef> {
    match segment {
        None | Some("") => Ok(ImageRef::NONE),
        Some(raw) => decode_param(raw)
            .parse()
            .map_err(|_| GuideError::InvalidImageRef(raw.to_string())),
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Route {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_payload() -> DetailsPayload {
        DetailsPayload {
            name: "Taipei 101".to_string(),
            short_description: "Landmark".to_string(),
            long_description: "Tall/thin, 508 m & \"iconic\" (台北)".to_string(),
            image: ImageRef(4),
            map_url: "https://maps.app.goo.gl/aL6ucUkdbkWVCQyN6?q=a b&x=1#frag".to_string(),
        }
    }

    #[test]
    fn test_encode_param_escapes_reserved() {
        assert_eq!(encode_param("Taipei 101"), "Taipei%20101");
        assert_eq!(encode_param("a/b?c#d&e"), "a%2Fb%3Fc%23d%26e");
        assert_eq!(encode_param("keep-_.!~*'()"), "keep-_.!~*'()");
        assert_eq!(encode_param("台"), "%E5%8F%B0");
    }

    #[test]
    fn test_decode_param_is_lossy_not_failing() {
        assert_eq!(decode_param("%E5%8F%B0"), "台");
        assert_eq!(decode_param("%FF"), "\u{FFFD}");
        assert_eq!(decode_param("100%"), "100%");
    }

    #[test]
    fn test_list_path() {
        assert_eq!(Route::List.to_path(), "attractions_list");
        assert_eq!(Route::parse("attractions_list").unwrap(), Route::List);
        assert_eq!(Route::parse("/attractions_list/").unwrap(), Route::List);
    }

    #[test]
    fn test_details_path_shape() {
        let path = Route::Details(sample_payload()).to_path();
        assert!(path.starts_with("attraction_details/Taipei%20101/Landmark/"));
        assert_eq!(path.split('/').count(), 6);
        assert_eq!(path.split('/').nth(4), Some("4"));
    }

    #[test]
    fn test_details_round_trip() {
        let route = Route::Details(sample_payload());
        let parsed: Route = route.to_string().parse().unwrap();
        assert_eq!(parsed, route);
    }

    #[test]
    fn test_missing_params_default() {
        let route = Route::parse("attraction_details/Jiufen").unwrap();
        assert_eq!(
            route,
            Route::Details(DetailsPayload {
                name: "Jiufen".to_string(),
                ..Default::default()
            })
        );

        let route = Route::parse("attraction_details").unwrap();
        assert_eq!(route, Route::Details(DetailsPayload::default()));
    }

    #[test]
    fn test_empty_fields_survive() {
        let route = Route::Details(DetailsPayload {
            map_url: "https://example.com".to_string(),
            ..Default::default()
        });
        assert_eq!(Route::parse(&route.to_path()).unwrap(), route);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Route::parse("settings"),
            Err(GuideError::UnknownDestination(d)) if d == "settings"
        ));
        assert!(matches!(
            Route::parse("attractions_list/extra"),
            Err(GuideError::UnexpectedSegments { extra: 1, .. })
        ));
        assert!(matches!(
            Route::parse("attraction_details/a/b/c/1/d/e/f"),
            Err(GuideError::UnexpectedSegments { extra: 2, .. })
        ));
        assert!(matches!(
            Route::parse("attraction_details/a/b/c/four/d"),
            Err(GuideError::InvalidImageRef(raw)) if raw == "four"
        ));
    }

    #[test]
    fn test_from_attraction() {
        let attraction = Attraction::new("n", "s", "l", ImageRef(7), "https://x.y");
        let route = Route::details(&attraction);
        let payload = route.payload().unwrap();
        assert_eq!(payload.name, attraction.name);
        assert_eq!(payload.short_description, attraction.short_description);
        assert_eq!(payload.long_description, attraction.long_description);
        assert_eq!(payload.image, attraction.image);
        assert_eq!(payload.map_url, attraction.map_url);
        assert_eq!(route.kind(), "details");
        assert_eq!(Route::List.kind(), "list");
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(text in any::<String>()) {
            prop_assert_eq!(decode_param(&encode_param(&text)), text);
        }

        #[test]
        fn prop_encode_inverts_decode_on_encoded(text in any::<String>()) {
            let encoded = encode_param(&text);
            prop_assert_eq!(encode_param(&decode_param(&encoded)), encoded.clone());
            prop_assert!(!encoded.contains('/'));
        }

        #[test]
        fn prop_details_route_round_trip(
            name in any::<String>(),
            short_description in any::<String>(),
            long_description in ".*",
            image in any::<u32>(),
            map_url in "https://[a-z]{1,12}\\.[a-z]{2,3}/[ -~]{0,30}",
        ) {
            let route = Route::Details(DetailsPayload {
                name,
                short_description,
                long_description,
                image: ImageRef(image),
                map_url,
            });
            prop_assert_eq!(Route::parse(&route.to_path()).unwrap(), route);
        }
    }
}
