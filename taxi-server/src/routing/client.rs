//! OSRM HTTP client.

use std::time::Duration;

use crate::domain::GeoPoint;

use super::RoutingEngine;
use super::error::RoutingError;
use super::types::{RouteLeg, RouteResponse, TravelProfile};

/// Default base URL: the OSRM public demo server.
const DEFAULT_BASE_URL: &str = "http://router.project-osrm.org";

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL for the engine
    pub base_url: String,
    /// Request timeout in seconds, a backstop behind the caller's own limit
    pub timeout_secs: u64,
}

impl OsrmConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 8,
        }
    }
}

/// OSRM route service client.
///
/// Holds no request-limiting state; callers bound their own fan-out.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for a route query. OSRM takes coordinates as `lng,lat`.
    fn route_url(&self, from: GeoPoint, to: GeoPoint, profile: TravelProfile) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            profile.as_str(),
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude(),
        )
    }

    /// Fetch the best route between two points.
    ///
    /// Returns `Ok(None)` when the engine answers but has no route.
    pub async fn best_route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        profile: TravelProfile,
    ) -> Result<Option<RouteLeg>, RoutingError> {
        let url = self.route_url(from, to, profile);

        let response = self
            .http
            .get(&url)
            .query(&[("overview", "false")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        let body = response.text().await?;

        // OSRM reports "NoRoute" and friends as 400 with a JSON body
        let parsed: Result<RouteResponse, _> = serde_json::from_str(&body);

        match parsed {
            Ok(route) if status.is_success() || status == reqwest::StatusCode::BAD_REQUEST => {
                Ok(route.best_leg())
            }
            Ok(route) => Err(RoutingError::Api {
                status: status.as_u16(),
                message: route.message.unwrap_or(route.code),
            }),
            Err(_) if !status.is_success() => Err(RoutingError::Api {
                status: status.as_u16(),
                message: body,
            }),
            Err(e) => Err(RoutingError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            }),
        }
    }
}

impl RoutingEngine for OsrmClient {
    async fn route(
        &self,
        from: GeoPoint,
        to: GeoPoint,
        profile: TravelProfile,
    ) -> Result<Option<RouteLeg>, RoutingError> {
        self.best_route(from, to, profile).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn client(url: String) -> OsrmClient {
        OsrmClient::new(OsrmConfig::default().with_base_url(url)).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = OsrmConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 8);
    }

    #[test]
    fn route_url_uses_lng_lat_order() {
        let client = client("http://osrm.local/".to_string());
        let url = client.route_url(point(9.0, 38.74), point(9.01, 38.75), TravelProfile::Driving);
        assert_eq!(url, "http://osrm.local/route/v1/driving/38.74,9;38.75,9.01");
    }

    #[tokio::test]
    async fn parses_best_route() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/route/v1/driving/38.74,9;38.75,9.01")
            .match_query(Matcher::UrlEncoded("overview".into(), "false".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":"Ok","routes":[{"distance":1534.2,"duration":301.0}]}"#)
            .create_async()
            .await;

        let leg = client(server.url())
            .route(point(9.0, 38.74), point(9.01, 38.75), TravelProfile::Driving)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            leg,
            Some(RouteLeg {
                distance_m: 1534.2,
                duration_s: 301.0
            })
        );
    }

    #[tokio::test]
    async fn no_route_is_none() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex("^/route/v1/driving/".into()))
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"code":"NoRoute","message":"Impossible route between points"}"#)
            .create_async()
            .await;

        let leg = client(server.url())
            .route(point(9.0, 38.74), point(9.01, 38.75), TravelProfile::Driving)
            .await
            .unwrap();
        assert_eq!(leg, None);
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex("^/route/v1/".into()))
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let err = client(server.url())
            .route(point(9.0, 38.74), point(9.01, 38.75), TravelProfile::Driving)
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn rate_limit_is_distinguished() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", Matcher::Regex("^/route/v1/".into()))
            .match_query(Matcher::Any)
            .with_status(429)
            .create_async()
            .await;

        let err = client(server.url())
            .route(point(9.0, 38.74), point(9.01, 38.75), TravelProfile::Walking)
            .await
            .unwrap_err();
        assert!(matches!(err, RoutingError::RateLimited));
    }
}
