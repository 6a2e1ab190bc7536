//! Configuration for the engine and the offered search criteria
//!
//! The sets of categories, radii, and sort orders are domain configuration,
//! not engine logic: hosts inject a [`CriteriaCatalog`] describing what their
//! UI offers, and [`SearchCriteria`](crate::core::criteria::SearchCriteria)
//! validates every mutation against it.

use crate::core::criteria::SortOrder;
use serde::{Deserialize, Serialize};

/// One selectable restaurant category, identified by its remote API tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// One selectable search radius, in meters from the map center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadiusOption {
    pub meters: u32,
}

impl RadiusOption {
    pub fn new(meters: u32) -> Self {
        Self { meters }
    }

    /// User-facing label ("500m", "2km")
    pub fn label(&self) -> String {
        if self.meters >= 1000 && self.meters % 1000 == 0 {
            format!("{}km", self.meters / 1000)
        } else {
            format!("{}m", self.meters)
        }
    }
}

/// The full set of criteria values a host offers, plus their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaCatalog {
    pub categories: Vec<CategoryOption>,
    pub radii: Vec<RadiusOption>,
    pub sorts: Vec<SortOrder>,
    pub default_category: String,
    pub default_radius: u32,
    pub default_sort: SortOrder,
}

impl CriteriaCatalog {
    pub fn contains_category(&self, id: &str) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    pub fn contains_radius(&self, meters: u32) -> bool {
        self.radii.iter().any(|r| r.meters == meters)
    }

    pub fn contains_sort(&self, sort: SortOrder) -> bool {
        self.sorts.contains(&sort)
    }

    /// Display label for a category id, if the catalog offers it
    pub fn category_label(&self, id: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.label.as_str())
    }
}

impl Default for CriteriaCatalog {
    /// Subset of remote-API compatible restaurant categories (there are
    /// hundreds), radii from pedestrian range up to driving range, and the
    /// three sort orders the remote search API understands.
    fn default() -> Self {
        Self {
            categories: vec![
                CategoryOption::new("restaurants", "Restaurants"),
                CategoryOption::new("gluten_free", "Gluten free"),
                CategoryOption::new("italian", "Italian"),
                CategoryOption::new("japanese", "Japanese"),
                CategoryOption::new("korean", "Korean"),
                CategoryOption::new("pizza", "Pizza"),
                CategoryOption::new("poutineries", "Poutinerie"),
                CategoryOption::new("sushi", "Sushi bars"),
                CategoryOption::new("thai", "Thai"),
                CategoryOption::new("vegan", "Vegan"),
                CategoryOption::new("vegetarian", "Vegetarian"),
            ],
            radii: vec![
                RadiusOption::new(100),
                RadiusOption::new(250),
                RadiusOption::new(500),
                RadiusOption::new(1000),
                RadiusOption::new(2000),
                RadiusOption::new(5000),
                RadiusOption::new(10000),
                RadiusOption::new(15000),
                RadiusOption::new(20000),
                RadiusOption::new(25000),
            ],
            sorts: vec![
                SortOrder::BestMatch,
                SortOrder::Closest,
                SortOrder::HighestRated,
            ],
            default_category: "restaurants".to_string(),
            default_radius: 500,
            default_sort: SortOrder::HighestRated,
        }
    }
}

/// Icon URLs used for the two marker visual states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerIcons {
    pub default_icon: String,
    pub active_icon: String,
}

impl Default for MarkerIcons {
    fn default() -> Self {
        Self {
            default_icon: "http://google.com/mapfiles/ms/micons/red-dot.png".to_string(),
            active_icon: "http://google.com/mapfiles/ms/micons/yellow-dot.png".to_string(),
        }
    }
}

/// Client device class, used to pick mobile vs desktop detail links.
/// Detection (e.g. user-agent sniffing) is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

/// Engine-level configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub icons: MarkerIcons,
    pub device: DeviceClass,
}
