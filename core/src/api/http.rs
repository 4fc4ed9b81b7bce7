//! Reqwest-backed dashboard client
//!
//! One HTTP client serves all three resources; endpoints are
//! `{base}/friends`, `{base}/cards` and `{base}/transfers`, each returning
//! a JSON array of records.

use anyhow::Context;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::api::{ApiError, CardsClient, FriendsClient, TransfersClient};
use crate::domain::{Card, Friend, Transfer};

pub struct DashboardApi {
    http: HttpClient,
    base_url: String,
}

impl DashboardApi {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent("paydash/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, "dashboard api request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "dashboard api non-success");
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl FriendsClient for DashboardApi {
    async fn fetch_friends(&self) -> Result<Vec<Friend>, ApiError> {
        self.get_json("friends").await
    }
}

#[async_trait::async_trait]
impl CardsClient for DashboardApi {
    async fn fetch_cards(&self) -> Result<Vec<Card>, ApiError> {
        self.get_json("cards").await
    }
}

#[async_trait::async_trait]
impl TransfersClient for DashboardApi {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>, ApiError> {
        self.get_json("transfers").await
    }
}
