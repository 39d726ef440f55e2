//! wajik-anime-api client.
//!
//! One GET per call with a fixed transport timeout. No retries and no rate
//! limiting: each navigation maps to exactly one request.

use super::error::{ApiError, ApiResult};
use super::types::*;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Transport timeout applied to every request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the otakudesu endpoints of wajik-anime-api
#[derive(Debug, Clone)]
pub struct WajikClient {
    /// HTTP client
    client: Client,
    /// Base URL of the deployment
    base_url: Url,
}

impl WajikClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .user_agent(concat!("otakudesu-catalog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one
    pub fn endpoint_url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Make a GET request and decode the JSON body
    async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = self.endpoint_url(segments)?;

        debug!(url = %url, "Making API request");

        let response = self.client.get(url.clone()).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(url = %url, status = %status, "Request failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(url = %url, error = %e, "Failed to parse response");
            ApiError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// `GET /otakudesu/home`
    pub async fn home(&self) -> ApiResult<HomeResponseRaw> {
        self.get(&["otakudesu", "home"], &[]).await
    }

    /// `GET /otakudesu/ongoing?page={page}`
    pub async fn ongoing(&self, page: u32) -> ApiResult<OngoingResponseRaw> {
        self.get(&["otakudesu", "ongoing"], &[("page", page.to_string())])
            .await
    }

    /// `GET /otakudesu/completed?page={page}`
    pub async fn completed(&self, page: u32) -> ApiResult<CompletedResponseRaw> {
        self.get(&["otakudesu", "completed"], &[("page", page.to_string())])
            .await
    }

    /// `GET /otakudesu/search?q={query}`
    pub async fn search(&self, query: &str) -> ApiResult<SearchResponseRaw> {
        self.get(&["otakudesu", "search"], &[("q", query.to_string())])
            .await
    }

    /// `GET /otakudesu/anime/{slug}`
    pub async fn anime(&self, slug: &str) -> ApiResult<AnimeDetailResponseRaw> {
        self.get(&["otakudesu", "anime", slug], &[]).await
    }

    /// `GET /otakudesu/episode/{slug}`
    pub async fn episode(&self, slug: &str) -> ApiResult<EpisodeDetailResponseRaw> {
        self.get(&["otakudesu", "episode", slug], &[]).await
    }

    /// `GET /otakudesu/server/{serverId}`
    pub async fn server(&self, server_id: &str) -> ApiResult<ServerResponseRaw> {
        self.get(&["otakudesu", "server", server_id], &[]).await
    }
}

fn parse_base_url(base_url: &str) -> ApiResult<Url> {
    let trimmed = base_url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BaseUrl(
            "base URL is empty (set api.base_url or WAJIK_API_URL)".to_string(),
        ));
    }

    let url = Url::parse(trimmed).map_err(|e| ApiError::BaseUrl(format!("{}: {}", trimmed, e)))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::BaseUrl(trimmed.to_string()));
    }

    Ok(url)
}
