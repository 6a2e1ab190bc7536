//! Remote business records
//!
//! [`Business`] mirrors the record shape returned by the remote restaurant
//! search API. The engine treats these as read-only; every field is
//! defensively defaulted so that partial payloads deserialize cleanly.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// One business as returned by the remote search API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: BusinessLocation,
    #[serde(default)]
    pub categories: Vec<CategoryTag>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub rating_img_url: String,
    #[serde(default)]
    pub rating_img_url_small: String,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub display_phone: String,
    /// Desktop detail page
    #[serde(default)]
    pub url: String,
    /// Mobile detail page
    #[serde(default)]
    pub mobile_url: String,
    /// True when the business is permanently out of business. This does NOT
    /// refer to the restaurant's opening hours; the remote API exposes no
    /// open-right-now signal on this record.
    #[serde(default)]
    pub is_closed: bool,
    /// Distance from the search center, in meters
    #[serde(default)]
    pub distance: f64,
}

impl Business {
    /// Position of the business on the map
    pub fn coordinate(&self) -> LatLng {
        LatLng::new(
            self.location.coordinate.latitude,
            self.location.coordinate.longitude,
        )
    }
}

/// Street-level location of a business
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BusinessLocation {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub coordinate: Coordinate,
}

/// Raw coordinate pair as the remote API encodes it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Category pair: display name plus the remote API alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTag(pub String, pub String);

impl CategoryTag {
    pub fn new(display: impl Into<String>, alias: impl Into<String>) -> Self {
        Self(display.into(), alias.into())
    }

    pub fn display_name(&self) -> &str {
        &self.0
    }

    pub fn alias(&self) -> &str {
        &self.1
    }
}
