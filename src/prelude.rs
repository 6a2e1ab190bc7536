//! Prelude module for common nearbite types and traits
//!
//! Re-exports the most commonly used types, traits, and functions
//! for easy importing with `use nearbite::prelude::*;`

pub use crate::core::{
    builder::MapEngineBuilder,
    config::{CriteriaCatalog, DeviceClass, EngineConfig, MarkerIcons},
    criteria::{SearchCriteria, SortOrder},
    engine::MapEngine,
    geo::LatLng,
    marker::{Marker, MarkerId, MarkerSet, MarkerState},
};

pub use crate::data::business::{Business, BusinessLocation, CategoryTag};

pub use crate::input::events::MarkerEvent;

pub use crate::search::{
    http::HttpSearchProvider,
    provider::{SearchError, SearchProvider, SearchQuery, SearchTicket},
};

pub use crate::traits::{ListPanel, MapSurface, Notifier};

pub use crate::ui::{
    format,
    view_model::{ListEntry, PopupContent},
};

pub use crate::{Error as EngineError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
