use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::ZoneManagerError;

/// Base URL of the Cloudflare v4 API
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// Represents a Cloudflare API response
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<CloudflareError>,
    #[serde(default)]
    pub result: Option<T>,
}

/// Represents a Cloudflare API error
#[derive(Debug, Deserialize)]
pub struct CloudflareError {
    pub code: i32,
    pub message: String,
}

/// Represents a Cloudflare DNS zone
#[derive(Debug, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// Represents the development mode setting of a zone
#[derive(Debug, Default, Deserialize)]
pub struct DevelopmentModeSetting {
    pub value: String,
    pub time_remaining: u64,
}

/// Request body for a full cache purge
#[derive(Debug, Serialize)]
struct PurgeCacheRequest {
    purge_everything: bool,
}

/// Request body for a development mode update
#[derive(Debug, Serialize)]
struct DevelopmentModeUpdate {
    value: String,
}

/// Client for interacting with Cloudflare's API
///
/// Holds a reqwest transport configured once at construction with the API
/// base URL and the `Content-Type`/`Authorization` default headers. The
/// client has no mutable state after construction and can be shared freely.
pub struct CloudflareClient {
    client: ReqwestClient,
    base_url: String,
}

impl CloudflareClient {
    /// Creates a new Cloudflare client with default settings
    pub fn new(api_token: impl Into<String>) -> Result<Self, ZoneManagerError> {
        Self::builder(api_token).build()
    }

    /// Start building a Cloudflare client
    pub fn builder(api_token: impl Into<String>) -> CloudflareClientBuilder {
        CloudflareClientBuilder {
            api_token: api_token.into(),
            base_url: CLOUDFLARE_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Lists the zones matching a domain name
    pub async fn list_zones(
        &self,
        domain: &str,
    ) -> Result<CloudflareResponse<Vec<Zone>>, ZoneManagerError> {
        let url = format!("{}/zones?name={}", self.base_url, domain);
        debug!(%domain, "querying zone list");

        let response = self.client.get(&url).send().await?.json().await?;

        Ok(response)
    }

    /// Purges the entire cache of a zone
    pub async fn purge_cache(
        &self,
        zone_id: &str,
    ) -> Result<CloudflareResponse<serde_json::Value>, ZoneManagerError> {
        let url = format!("{}/zones/{}/purge_cache", self.base_url, zone_id);
        debug!(%zone_id, "purging zone cache");

        let response = self.client
            .post(&url)
            .json(&PurgeCacheRequest {
                purge_everything: true,
            })
            .send()
            .await?
            .json()
            .await?;

        Ok(response)
    }

    /// Fetches the current development mode setting of a zone
    pub async fn get_development_mode(
        &self,
        zone_id: &str,
    ) -> Result<CloudflareResponse<DevelopmentModeSetting>, ZoneManagerError> {
        let url = format!("{}/zones/{}/settings/development_mode", self.base_url, zone_id);
        debug!(%zone_id, "querying development mode");

        let response = self.client.get(&url).send().await?.json().await?;

        Ok(response)
    }

    /// Updates the development mode setting of a zone
    pub async fn set_development_mode(
        &self,
        zone_id: &str,
        value: &str,
    ) -> Result<CloudflareResponse<DevelopmentModeSetting>, ZoneManagerError> {
        let url = format!("{}/zones/{}/settings/development_mode", self.base_url, zone_id);
        debug!(%zone_id, %value, "updating development mode");

        let response = self.client
            .patch(&url)
            .json(&DevelopmentModeUpdate {
                value: value.to_string(),
            })
            .send()
            .await?
            .json()
            .await?;

        Ok(response)
    }
}

/// Builder for [`CloudflareClient`]
#[derive(Debug)]
pub struct CloudflareClientBuilder {
    api_token: String,
    base_url: String,
    timeout: Duration,
}

impl CloudflareClientBuilder {
    /// Overrides the API base URL, e.g. to point at a mock server
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the request timeout (passed through to the transport)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<CloudflareClient, ZoneManagerError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_token))
            .map_err(|e| ZoneManagerError::Configuration(e.to_string()))?;
        headers.insert(AUTHORIZATION, bearer);

        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .default_headers(headers)
            .build()?;

        Ok(CloudflareClient {
            client,
            base_url: self.base_url,
        })
    }
}
