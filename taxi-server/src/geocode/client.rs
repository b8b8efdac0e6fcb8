//! LocationIQ HTTP client.
//!
//! Queries the autocomplete endpoint, biased toward the service area by a
//! bounding box and country code. Throttling by the provider surfaces as
//! [`GeocodeError::RateLimited`]; repeated lookups are absorbed by the cache
//! in front of this client.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use super::Geocoder;
use super::error::GeocodeError;
use super::types::{GeocodeHit, PlaceDto};

/// Default base URL for LocationIQ.
const DEFAULT_BASE_URL: &str = "https://api.locationiq.com/v1";

/// Bounding box around Addis Ababa: min lon, min lat, max lon, max lat.
const DEFAULT_VIEWBOX: &str = "38.6,8.8,39.0,9.2";

const DEFAULT_COUNTRY_CODES: &str = "et";

const DEFAULT_USER_AGENT: &str = "TaxiTera-App/1.0 (contact@TaxiTera.com)";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// LocationIQ access token
    pub api_key: String,
    /// Base URL for the API (defaults to production LocationIQ)
    pub base_url: String,
    /// Bounding box results are restricted to
    pub viewbox: String,
    /// Comma-separated ISO country codes
    pub country_codes: String,
    /// Sent as the `User-Agent` header
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            viewbox: DEFAULT_VIEWBOX.to_string(),
            country_codes: DEFAULT_COUNTRY_CODES.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 5,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Restrict results to a different bounding box.
    pub fn with_viewbox(mut self, viewbox: impl Into<String>) -> Self {
        self.viewbox = viewbox.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// LocationIQ autocomplete client.
#[derive(Debug, Clone)]
pub struct LocationIqClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    viewbox: String,
    country_codes: String,
}

impl LocationIqClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| GeocodeError::Api {
                status: 0,
                message: "Invalid User-Agent format".to_string(),
            })?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            viewbox: config.viewbox,
            country_codes: config.country_codes,
        })
    }

    /// Look up a place, returning provider results best-first.
    ///
    /// "No results" is an empty vector, not an error. LocationIQ signals it
    /// with a 404, which is mapped accordingly.
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<GeocodeHit>, GeocodeError> {
        let url = format!("{}/autocomplete", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("limit", "1"),
                ("countrycodes", self.country_codes.as_str()),
                ("viewbox", self.viewbox.as_str()),
                ("bounded", "1"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!(query, "geocoder reported no match");
            return Ok(Vec::new());
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(GeocodeError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let places: Vec<PlaceDto> =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        places.into_iter().map(GeocodeHit::try_from).collect()
    }
}

impl Geocoder for LocationIqClient {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>, GeocodeError> {
        self.autocomplete(query).await
    }
}
