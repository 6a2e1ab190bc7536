//! Reactive search criteria
//!
//! [`SearchCriteria`] holds the live category/radius/sort selection. Every
//! mutation is validated against the injected
//! [`CriteriaCatalog`](crate::core::config::CriteriaCatalog); every effective
//! change dispatches exactly one [`SearchQuery`] carrying the full current
//! tuple, since the remote API requires the complete parameter set even when
//! a single field changed. Setting a field to its current value dispatches
//! nothing.

use crate::{
    core::config::CriteriaCatalog,
    search::provider::SearchQuery,
    EngineError, Result,
};
use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};

/// Sort orders understood by the remote search API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    BestMatch,
    Closest,
    HighestRated,
}

impl SortOrder {
    /// Wire code expected by the remote search API
    pub fn api_code(&self) -> u8 {
        match self {
            SortOrder::BestMatch => 0,
            SortOrder::Closest => 1,
            SortOrder::HighestRated => 2,
        }
    }

    /// User-friendly description, e.g. for a list-view heading
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::BestMatch => "Best matched",
            SortOrder::Closest => "Closest",
            SortOrder::HighestRated => "Highest rated",
        }
    }
}

/// The live criteria selection, dispatching a search request on every change.
///
/// There is one live instance per session. Requests go out over a
/// fire-and-forget channel; the receiving side decides when and how to run
/// them (see [`MapEngine::search`](crate::core::engine::MapEngine::search)).
pub struct SearchCriteria {
    catalog: CriteriaCatalog,
    category: String,
    radius: u32,
    sort: SortOrder,
    requests: Sender<SearchQuery>,
}

impl SearchCriteria {
    /// Creates the criteria set at the catalog defaults and dispatches the
    /// initial search request.
    pub fn new(catalog: CriteriaCatalog, requests: Sender<SearchQuery>) -> Self {
        let criteria = Self {
            category: catalog.default_category.clone(),
            radius: catalog.default_radius,
            sort: catalog.default_sort,
            catalog,
            requests,
        };
        criteria.dispatch();
        criteria
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn catalog(&self) -> &CriteriaCatalog {
        &self.catalog
    }

    /// User-friendly description of the current sort order
    pub fn sort_description(&self) -> &'static str {
        self.sort.label()
    }

    /// The full current tuple as a dispatchable query
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            category: self.category.clone(),
            radius: self.radius,
            sort: self.sort,
        }
    }

    /// Selects a new category. Unknown categories are rejected without any
    /// state change or dispatch.
    pub fn set_category(&mut self, id: &str) -> Result<()> {
        if !self.catalog.contains_category(id) {
            return Err(EngineError::Criteria(format!(
                "unsupported category '{}'",
                id
            )));
        }
        if self.category == id {
            return Ok(());
        }
        self.category = id.to_string();
        self.dispatch();
        Ok(())
    }

    /// Selects a new radius, in meters from the map center.
    pub fn set_radius(&mut self, meters: u32) -> Result<()> {
        if !self.catalog.contains_radius(meters) {
            return Err(EngineError::Criteria(format!(
                "unsupported radius {}m",
                meters
            )));
        }
        if self.radius == meters {
            return Ok(());
        }
        self.radius = meters;
        self.dispatch();
        Ok(())
    }

    /// Selects a new sort order.
    pub fn set_sort(&mut self, sort: SortOrder) -> Result<()> {
        if !self.catalog.contains_sort(sort) {
            return Err(EngineError::Criteria(format!(
                "unsupported sort order {:?}",
                sort
            )));
        }
        if self.sort == sort {
            return Ok(());
        }
        self.sort = sort;
        self.dispatch();
        Ok(())
    }

    fn dispatch(&self) {
        log::debug!(
            "dispatch search request: category={} radius={}m sort={:?}",
            self.category,
            self.radius,
            self.sort
        );
        if self.requests.send(self.query()).is_err() {
            log::warn!("search request dropped: receiver disconnected");
        }
    }
}
