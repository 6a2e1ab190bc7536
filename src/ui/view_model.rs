//! Structured view models for the list view and the shared popup
//!
//! The engine hands these to the list-panel and map-surface collaborators
//! instead of pre-rendered markup; how they are templated into widgets or
//! HTML is the host's concern.

use crate::{core::config::DeviceClass, data::business::Business, ui::format};

/// One entry in the result list view
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// One-based display index, shared with the matching map marker
    pub index: usize,
    pub name: String,
    pub categories: String,
    pub rating: f32,
    pub rating_img_url: String,
    pub review_count: u32,
    pub address: String,
    pub distance_m: u64,
}

impl ListEntry {
    pub fn from_business(business: &Business, display_index: usize) -> Self {
        Self {
            index: display_index,
            name: business.name.clone(),
            categories: format::category_list(business),
            rating: business.rating,
            rating_img_url: business.rating_img_url_small.clone(),
            review_count: business.review_count,
            address: format::display_address(business),
            distance_m: format::display_distance(business.distance),
        }
    }
}

/// Content for the single shared info popup
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub name: String,
    /// Detail link, already resolved for the client device class
    pub url: String,
    pub categories: String,
    pub rating: f32,
    pub rating_img_url: String,
    pub review_count: u32,
    pub address: String,
    pub distance_m: u64,
    pub phone: String,
}

impl PopupContent {
    pub fn from_business(business: &Business, device: DeviceClass) -> Self {
        Self {
            name: business.name.clone(),
            url: format::detail_url(business, device).to_string(),
            categories: format::category_list(business),
            rating: business.rating,
            rating_img_url: business.rating_img_url.clone(),
            review_count: business.review_count,
            address: format::display_address(business),
            distance_m: format::display_distance(business.distance),
            phone: business.display_phone.clone(),
        }
    }
}
