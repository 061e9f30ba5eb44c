//! The ordered, read-only list of attractions
//!
//! The catalog is built once at startup and handed to the UI layer; there is
//! no global instance.

use crate::{Attraction, GuideError, ImageRef, Result};

/// Validated, immutable list of attractions in display order
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    attractions: Vec<Attraction>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Catalog {
    /// Build a catalog, rejecting it if any map link is not a valid URI
    pub fn new(attractions: Vec<Attraction>) -> Result<Self> {
        for attraction in &attractions {
            attraction
                .map_uri()
                .map_err(|source| GuideError::InvalidMapUrl {
                    name: attraction.name.clone(),
                    url: attraction.map_url.clone(),
                    source,
                })?;
        }
        tracing::debug!("Catalog built with {} attractions", attractions.len());
        Ok(Self { attractions })
    }

    /// The attractions bundled with the app
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_attractions())
    }

    pub fn len(&self) -> usize {
        self.attractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Attraction> {
        self.attractions.get(index)
    }

    /// Like [`Catalog::get`], with an error naming the catalog size
    pub fn try_get(&self, index: usize) -> Result<&Attraction> {
        self.get(index).ok_or(GuideError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Attraction> {
        self.attractions.iter()
    }

    /// Index of the first attraction with this exact name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.attractions.iter().position(|a| a.name == name)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Attraction;
    type IntoIter = std::slice::Iter<'a, Attraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.attractions.iter()
    }
}

fn builtin_attractions() -> Vec<Attraction> {
    vec![
        Attraction::new(
            "Shifen",
            "The Waterfall of Taiwan",
            "Shifen Waterfall is a stunning natural wonder located in Pingxi District. It's a popular spot for viewing the beautiful cascade and lighting sky lanterns.",
            ImageRef(1),
            "https://maps.app.goo.gl/gVWE7szb452rKqnZA",
        ),
        Attraction::new(
            "Ximen",
            "Shopping district",
            "Ximen is a bustling shopping district in Taipei, famous for its vibrant street life, trendy shops, and entertainment options. It's a hub for youth culture and fashion.",
            ImageRef(2),
            "https://maps.app.goo.gl/oN6GxbBCD1PFtgZP8",
        ),
        Attraction::new(
            "Chiang Kai Shek Memorial Hall",
            "History",
            "This historical landmark in Taipei honors Chiang Kai-shek. The memorial hall is surrounded by a large plaza and traditional Chinese gardens.",
            ImageRef(3),
            "https://maps.app.goo.gl/V2tz2MGGwXGYbjCx8",
        ),
        Attraction::new(
            "Taipei 101",
            "Landmark",
            "Taipei 101 is an iconic skyscraper in Taipei and one of the tallest buildings in the world. It features a high-speed elevator and an observation deck offering breathtaking views of the city.",
            ImageRef(4),
            "https://maps.app.goo.gl/aL6ucUkdbkWVCQyN6",
        ),
        Attraction::new(
            "Longshan Temple",
            "Temple",
            "Longshan Temple is a historic and culturally significant temple located in Wanhua District, Taipei. It's a place of worship and a testament to Taiwanese religious practices and architecture.",
            ImageRef(5),
            "https://maps.app.goo.gl/H1fNF23KEAHyohBv8",
        ),
        Attraction::new(
            "Jiufen",
            "Taiwan Old Street",
            "Jiufen is a charming old street in Ruifang District, known for its narrow alleyways, traditional teahouses, and beautiful views of the surrounding mountains and ocean.",
            ImageRef(6),
            "https://maps.app.goo.gl/Jd8rKsEwQcDSHoRY7",
        ),
        Attraction::new(
            "Taroko National Park",
            "Best natural attraction in Hualien",
            "Located in Hualien, Taroko National Park is renowned for its stunning natural landscapes, including marble canyons, lush forests, and picturesque trails.",
            ImageRef(7),
            "https://maps.app.goo.gl/zcSC6W8XxKyifua3A",
        ),
        Attraction::new(
            "Shilin Night Market",
            "One of the best night market in Taiwan",
            "Shilin Night Market is one of the most famous night markets in Taiwan, offering a wide variety of delicious street food, souvenirs, and entertainment.",
            ImageRef(8),
            "https://maps.app.goo.gl/xbqiPq883tNBB2qT6",
        ),
        Attraction::new(
            "YangMingShan National Park",
            "Places where we can observe the beauty of mountains",
            "Yangmingshan National Park is located near Taipei and is known for its hot springs, volcanic landscapes, and beautiful mountain scenery. It's a great place for hiking and nature observation.",
            ImageRef(9),
            // Same link as Taroko in the shipped data set.
            "https://maps.app.goo.gl/zcSC6W8XxKyifua3A",
        ),
        Attraction::new(
            "Sun Moon Lake",
            "One of the best lake in Taichung",
            "Sun Moon Lake, located in Taichung, is the largest body of water in Taiwan. It's famous for its picturesque views, boating activities, and the surrounding scenic trails.",
            ImageRef(10),
            "https://maps.app.goo.gl/KfaJ6iGka6Je861D9",
        ),
    ]
}
