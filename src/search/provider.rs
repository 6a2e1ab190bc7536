//! Remote search collaborator seam
//!
//! The engine talks to the remote restaurant search API through the
//! [`SearchProvider`] trait so that hosts and tests can swap in their own
//! transport. The shipped HTTP binding lives in
//! [`http`](crate::search::http).

use crate::{
    core::{criteria::SortOrder, geo::LatLng},
    data::business::Business,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Full criteria tuple for one search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub category: String,
    pub radius: u32,
    pub sort: SortOrder,
}

/// One issued search: the query, the map center it was issued from, and the
/// generation it belongs to.
///
/// The generation is a monotonically increasing token bumped on every
/// `begin_search`; a response whose ticket generation is no longer current
/// is stale and must not be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: SearchQuery,
    pub center: LatLng,
}

/// Transport-level search failure: status (when the transport produced one)
/// plus a message
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("search failed{}: {message}", .status.map(|s| format!(" ({})", s)).unwrap_or_default())]
pub struct SearchError {
    pub status: Option<u16>,
    pub message: String,
}

impl SearchError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Outcome of one remote search call
pub type SearchOutcome = std::result::Result<Vec<Business>, SearchError>;

/// Asynchronous remote search collaborator.
///
/// Implementations own the wire encoding and authentication entirely; the
/// engine only sees an ordered list of businesses or a transport error.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, ticket: &SearchTicket) -> SearchOutcome;
}
