use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::warn;

use crate::application::RemoteRepositoryService;
use crate::domain::{DomainError, Record, RecordDraft};

/// Default target: the catalog service running locally on its standard port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
const REPOSITORIES_PATH: &str = "/repositories";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Like responses may echo the whole record; only `likes` is authoritative,
/// so nothing else is read from the body.
#[derive(Deserialize)]
struct LikeResponse {
    likes: u64,
}

/// HTTP client for the repository catalog API.
///
/// Implements [`RemoteRepositoryService`] so the store stays decoupled from
/// transport and serialization details.
///
/// Targets `http://localhost:3333` by default; override via the
/// `REPOLIST_API_URL` environment variable or [`HttpRepositoryService::new`].
/// Timeouts live here, in the transport: requests are capped at 30 s and the
/// store above imposes none of its own.
pub struct HttpRepositoryService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRepositoryService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    /// Construct from `REPOLIST_API_URL`, defaulting to the local dev server.
    pub fn from_env() -> Self {
        let base =
            std::env::var("REPOLIST_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    /// Return the configured base URL (for logging purposes).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, REPOSITORIES_PATH)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, REPOSITORIES_PATH, id)
    }

    /// Map a non-2xx response onto the error taxonomy, reading the body as
    /// the server-supplied detail.
    async fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, DomainError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response.text().await.unwrap_or_default();
        warn!("Catalog API returned {status}: {detail}");

        if status == StatusCode::NOT_FOUND {
            let msg = if detail.is_empty() {
                status.to_string()
            } else {
                detail
            };
            return Err(DomainError::not_found(msg));
        }
        Err(DomainError::server(status.as_u16(), detail))
    }
}

fn transport_error(e: reqwest::Error) -> DomainError {
    DomainError::transport(e.to_string())
}

fn decode_error(e: reqwest::Error) -> DomainError {
    DomainError::decode(e.to_string())
}

#[async_trait]
impl RemoteRepositoryService for HttpRepositoryService {
    async fn list(&self) -> Result<Vec<Record>, DomainError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport_error)?;

        self.check(response).await?.json().await.map_err(decode_error)
    }

    async fn create(&self, draft: &RecordDraft) -> Result<Record, DomainError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        self.check(response).await?.json().await.map_err(decode_error)
    }

    async fn like(&self, id: &str) -> Result<u64, DomainError> {
        let url = format!("{}/like", self.record_url(id));
        let response = self.client.post(url).send().await.map_err(transport_error)?;

        let body: LikeResponse = self.check(response).await?.json().await.map_err(decode_error)?;
        Ok(body.likes)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(transport_error)?;

        self.check(response).await?;
        Ok(())
    }
}
