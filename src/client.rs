//! HTTP client for a running travel journal server.
//!
//! Fetches a collection's card endpoint and turns the body into a
//! [`CardsView`], the same way the collection pages are built.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::cards::CardsView;
use crate::models::TravelKind;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to create HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Client for the card JSON endpoints.
#[derive(Clone)]
pub struct CardClient {
    client: Client,
    base_url: String,
}

impl CardClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(concat!("travel-journal/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of a collection's card endpoint.
    pub fn cards_url(&self, kind: TravelKind) -> String {
        format!("{}{}", self.base_url, kind.cards_path())
    }

    /// Fetch a collection and build its view.
    ///
    /// Transport failures and error statuses are errors. A body that isn't a
    /// travel list is not: it yields the empty state.
    pub async fn fetch(&self, kind: TravelKind) -> Result<CardsView, ClientError> {
        let url = self.cards_url(kind);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        Ok(CardsView::from_body(kind, &body))
    }
}
