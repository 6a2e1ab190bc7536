//! HTTP binding for the remote search collaborator

use super::provider::{SearchError, SearchOutcome, SearchProvider, SearchTicket};
use crate::data::business::Business;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Shared HTTP client with a custom User-Agent. Building the client once
/// avoids the cost of TLS and connection pool setup for every search.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("nearbite/0.1 (+https://github.com/PoHsuanLai/nearbite)")
        .build()
        .expect("failed to build reqwest client")
});

/// Wire shape of a successful search response
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    businesses: Vec<Business>,
}

/// Provider that issues one JSON GET per search against a configurable
/// endpoint.
///
/// Authentication is the endpoint owner's concern; hosts that need static
/// auth parameters (tokens, app keys) attach them via [`with_param`].
///
/// [`with_param`]: HttpSearchProvider::with_param
pub struct HttpSearchProvider {
    endpoint: String,
    extra_params: Vec<(String, String)>,
    deadline: Option<Duration>,
}

impl HttpSearchProvider {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            extra_params: Vec::new(),
            deadline: None,
        }
    }

    /// Attach a static query parameter to every request
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((key.into(), value.into()));
        self
    }

    /// Fail searches that take longer than `deadline`
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn query_params(&self, ticket: &SearchTicket) -> Vec<(String, String)> {
        let mut params = vec![
            ("category_filter".to_string(), ticket.query.category.clone()),
            ("radius_filter".to_string(), ticket.query.radius.to_string()),
            ("sort".to_string(), ticket.query.sort.api_code().to_string()),
            ("ll".to_string(), ticket.center.to_string()),
        ];
        params.extend(self.extra_params.iter().cloned());
        params
    }
}

#[async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn search(&self, ticket: &SearchTicket) -> SearchOutcome {
        log::debug!(
            "search GET {} category={} radius={}m",
            self.endpoint,
            ticket.query.category,
            ticket.query.radius
        );

        let request = HTTP_CLIENT
            .get(&self.endpoint)
            .query(&self.query_params(ticket))
            .send();

        let sent = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, request)
                .await
                .map_err(|_| {
                    SearchError::new(
                        None,
                        format!("timed out after {}ms", deadline.as_millis()),
                    )
                })?,
            None => request.await,
        };
        let response =
            sent.map_err(|e| SearchError::new(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            log::warn!("search endpoint returned {}", status);
            return Err(SearchError::new(Some(status.as_u16()), reason));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SearchError::new(Some(status.as_u16()), e.to_string()))?;

        let payload: SearchResponse = serde_json::from_slice(&bytes)
            .map_err(|e| SearchError::new(Some(status.as_u16()), format!("malformed payload: {}", e)))?;

        log::info!("search returned {} businesses", payload.businesses.len());
        Ok(payload.businesses)
    }
}
