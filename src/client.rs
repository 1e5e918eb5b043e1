//! HTTP client for the data items API
//!
//! Mirrors the server's route table. The server registers no update route,
//! so there is no update call.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::{DataItem, HealthResponse, MessageResponse, NewDataItem};
use crate::routes;

/// Client-side errors
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Resource not found: {endpoint}")]
    NotFound { endpoint: String },

    #[error("Request failed: {status} - {body}")]
    RequestFailed { status: StatusCode, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Thin async client over `reqwest`
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(base_url, Client::new())
    }

    /// Reuse an existing `reqwest::Client` (connection pool, timeouts)
    pub fn with_http_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    fn item_endpoint(id: i64) -> String {
        routes::DATA_ITEM.replace("{id}", &id.to_string())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
        expected: StatusCode,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status != expected {
            if status == StatusCode::NOT_FOUND {
                return Err(ClientError::NotFound {
                    endpoint: endpoint.to_string(),
                });
            }
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, endpoint, "Unexpected response status");
            return Err(ClientError::RequestFailed { status, body });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn health_check(&self) -> Result<HealthResponse, ClientError> {
        let endpoint = routes::HEALTH;
        self.execute(self.client.get(self.url(endpoint)), endpoint, StatusCode::OK)
            .await
    }

    pub async fn create_data(
        &self,
        name: impl Into<String>,
        value: f64,
    ) -> Result<DataItem, ClientError> {
        let endpoint = routes::DATA_LIST;
        let payload = NewDataItem {
            name: name.into(),
            value,
        };
        self.execute(
            self.client.post(self.url(endpoint)).json(&payload),
            endpoint,
            StatusCode::CREATED,
        )
        .await
    }

    pub async fn list_data(&self) -> Result<Vec<DataItem>, ClientError> {
        let endpoint = routes::DATA_LIST;
        self.execute(self.client.get(self.url(endpoint)), endpoint, StatusCode::OK)
            .await
    }

    pub async fn get_data(&self, id: i64) -> Result<DataItem, ClientError> {
        let endpoint = Self::item_endpoint(id);
        self.execute(self.client.get(self.url(&endpoint)), &endpoint, StatusCode::OK)
            .await
    }

    pub async fn delete_data(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let endpoint = Self::item_endpoint(id);
        self.execute(self.client.delete(self.url(&endpoint)), &endpoint, StatusCode::OK)
            .await
    }
}
