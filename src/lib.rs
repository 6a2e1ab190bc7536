//! # Nearbite
//!
//! A Rust-native interaction engine for map-based restaurant finders.
//!
//! This library provides the core logic that sits between a map rendering
//! surface and a remote restaurant search API: a reactive search-criteria
//! component, an asynchronous search-and-render pipeline, and the
//! marker/infowindow state machine that keeps exactly one marker active
//! across overlapping hover and click events.

pub mod core;
pub mod data;
pub mod input;
pub mod prelude;
pub mod search;
pub mod traits;
pub mod ui;

// Re-export public API
pub use crate::core::{
    builder::MapEngineBuilder,
    config::{CriteriaCatalog, DeviceClass, EngineConfig, MarkerIcons},
    criteria::{SearchCriteria, SortOrder},
    engine::MapEngine,
    geo::LatLng,
    marker::{Marker, MarkerId, MarkerSet, MarkerState},
};

pub use data::business::Business;

pub use input::events::MarkerEvent;

pub use search::{
    http::HttpSearchProvider,
    provider::{SearchError, SearchProvider, SearchQuery, SearchTicket},
};

pub use traits::{ListPanel, MapSurface, Notifier};

pub use ui::view_model::{ListEntry, PopupContent};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, EngineError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid criteria: {0}")]
    Criteria(String),

    #[error("builder error: {0}")]
    Builder(String),

    #[error("search error: {0}")]
    Search(#[from] search::provider::SearchError),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = EngineError;
