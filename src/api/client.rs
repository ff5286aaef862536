use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::error::{parse_detail, ApiError};
use crate::api::types::{CatFact, NewFact, RandomFact};
use crate::config::ApiConfig;

/// Backend operations the fact store depends on.
///
/// [`CatFactsClient`] is the HTTP implementation; tests substitute their own.
#[async_trait]
pub trait CatFactsApi: Send + Sync {
    /// `GET /catfacts`
    async fn list_facts(&self) -> Result<Vec<CatFact>, ApiError>;

    /// `POST /catfacts` with a URL-encoded `fact` field.
    async fn create_fact(&self, text: &str) -> Result<CatFact, ApiError>;

    /// `GET /catfacts/random`
    async fn random_fact(&self) -> Result<RandomFact, ApiError>;
}

/// reqwest-backed client for the cat facts backend.
#[derive(Clone)]
pub struct CatFactsClient {
    client: Client,
    base_url: String,
}

impl CatFactsClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Connection {
            url: url.to_string(),
            source: e,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Error bodies are best-effort; a missing or odd body just loses the detail.
        let body = response.bytes().await.unwrap_or_default();
        let detail = parse_detail(&body);
        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or(""),
            "Backend rejected request"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}

#[async_trait]
impl CatFactsApi for CatFactsClient {
    async fn list_facts(&self) -> Result<Vec<CatFact>, ApiError> {
        let url = self.endpoint("/catfacts");
        let response = self.send(&url, self.client.get(&url)).await?;
        Self::decode(&url, response).await
    }

    async fn create_fact(&self, text: &str) -> Result<CatFact, ApiError> {
        let url = self.endpoint("/catfacts");
        let request = self.client.post(&url).form(&NewFact { fact: text });
        let response = self.send(&url, request).await?;
        Self::decode(&url, response).await
    }

    async fn random_fact(&self) -> Result<RandomFact, ApiError> {
        let url = self.endpoint("/catfacts/random");
        let response = self.send(&url, self.client.get(&url)).await?;
        Self::decode(&url, response).await
    }
}
