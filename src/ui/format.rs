//! Pure formatting helpers
//!
//! List entries and popup content both derive their displayed values through
//! these helpers, so the two renderings always agree for the same business.
//! Absent fields fall back to empty strings / zero.

use crate::{core::config::DeviceClass, data::business::Business};

/// Composes a display address from street and city, eliding absent parts
pub fn display_address(business: &Business) -> String {
    let street = business.location.address.trim();
    let city = business.location.city.trim();

    match (street.is_empty(), city.is_empty()) {
        (false, false) => format!("{}, {}", street, city),
        (false, true) => street.to_string(),
        (true, false) => city.to_string(),
        (true, true) => String::new(),
    }
}

/// Detail link appropriate for the client device class
pub fn detail_url(business: &Business, device: DeviceClass) -> &str {
    match device {
        DeviceClass::Mobile => &business.mobile_url,
        DeviceClass::Desktop => &business.url,
    }
}

/// Comma-separated category display names; empty string when none
pub fn category_list(business: &Business) -> String {
    business
        .categories
        .iter()
        .map(|tag| tag.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Distance for display: rounded down to the nearest whole meter
pub fn display_distance(meters: f64) -> u64 {
    if meters.is_finite() && meters > 0.0 {
        meters.floor() as u64
    } else {
        0
    }
}
