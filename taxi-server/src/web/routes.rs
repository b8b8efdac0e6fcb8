//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::search::{SearchError, SearchRequest};

use super::dto::*;
use super::state::AppState;

/// Default number of name suggestions.
const DEFAULT_SUGGEST_LIMIT: usize = 8;

/// Upper bound on name suggestions.
const MAX_SUGGEST_LIMIT: usize = 50;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/terminals/search", post(search_terminals))
        .route("/api/terminals/suggest", get(suggest_terminals))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Find and rank terminals near an origin.
async fn search_terminals(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SearchResponseDto>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let dto: SearchRequestDto = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid search request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let request = SearchRequest::from(dto);
    let response = state.search.search(&request).await?;

    Ok(Json(SearchResponseDto::from(response)))
}

/// Terminal names matching a partial query, for type-ahead.
async fn suggest_terminals(
    State(state): State<AppState>,
    Query(req): Query<SuggestRequest>,
) -> Json<SuggestResponse> {
    let limit = req
        .limit
        .unwrap_or(DEFAULT_SUGGEST_LIMIT)
        .min(MAX_SUGGEST_LIMIT);
    let names = state.catalog.suggest(&req.q, limit).await;

    Json(SuggestResponse { names })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
    },
    NotFound {
        message: String,
        suggestion: Option<String>,
    },
    Internal {
        message: String,
    },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::OriginRequired
            | SearchError::InvalidCoordinates(_)
            | SearchError::InvalidRadius(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            SearchError::PlaceNotFound(_) => AppError::NotFound {
                message: e.to_string(),
                suggestion: Some(
                    "Try a more specific place name, such as a nearby landmark or neighbourhood"
                        .to_string(),
                ),
            },
            SearchError::Catalog(inner) => {
                error!(error = %inner, "terminal catalog query failed");
                AppError::Internal {
                    message: "Failed to search terminals".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, suggestion) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound {
                message,
                suggestion,
            } => (StatusCode::NOT_FOUND, message, suggestion),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        if status.is_server_error() {
            error!(%status, error = %error, "request failed");
        } else {
            warn!(%status, error = %error, "request rejected");
        }

        let body = Json(ErrorResponse::new(error, suggestion));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, CachedGeocoder};
    use crate::catalog::{CatalogError, TerminalCatalog};
    use crate::domain::{GeoPoint, InvalidPoint, Terminal, TerminalId};
    use crate::geocode::{GeocodeConfig, LocationIqClient};
    use crate::routing::{OsrmClient, OsrmConfig};
    use crate::search::{PlaceNotFound, SearchConfig, SearchOrchestrator};
    use mockito::Matcher;
    use serde_json::Value;

    fn catalog() -> TerminalCatalog {
        TerminalCatalog::from_terminals(vec![
            Terminal {
                id: TerminalId::new("megenagna"),
                name: "Megenagna Terminal".to_string(),
                point: GeoPoint::new(9.01, 38.74).unwrap(),
                routes: vec!["Bole".to_string()],
                price: Some(15.0),
            },
            Terminal {
                id: TerminalId::new("mexico"),
                name: "Mexico Square".to_string(),
                point: GeoPoint::new(9.005, 38.74).unwrap(),
                routes: vec!["Lideta".to_string()],
                price: None,
            },
        ])
    }

    /// Serve the router on an ephemeral port, backed by the given provider URLs.
    async fn serve(geocode_url: String, osrm_url: String) -> String {
        let geocoder = LocationIqClient::new(GeocodeConfig::new("test-key").with_base_url(geocode_url)).unwrap();
        let engine = OsrmClient::new(OsrmConfig::default().with_base_url(osrm_url)).unwrap();
        let search = SearchOrchestrator::new(
            CachedGeocoder::new(geocoder, &CacheConfig::default()),
            catalog(),
            engine,
            SearchConfig::default(),
        );

        let app = create_router(AppState::new(search));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}")
    }

    async fn post_search(base: &str, body: &str) -> (StatusCode, Value) {
        let response = reqwest::Client::new()
            .post(format!("{base}/api/terminals/search"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .unwrap();
        let status = StatusCode::from_u16(response.status().as_u16()).unwrap();
        (status, response.json().await.unwrap())
    }

    #[test]
    fn search_errors_map_to_status() {
        let bad = AppError::from(SearchError::OriginRequired);
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let invalid: InvalidPoint = GeoPoint::new(91.0, 0.0).unwrap_err();
        let bad = AppError::from(SearchError::InvalidCoordinates(invalid));
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let bad = AppError::from(SearchError::InvalidRadius(-1.0));
        assert!(matches!(bad, AppError::BadRequest { .. }));

        let missing = AppError::from(SearchError::PlaceNotFound(PlaceNotFound {
            place: "Atlantis".into(),
        }));
        assert!(matches!(
            missing,
            AppError::NotFound {
                suggestion: Some(_),
                ..
            }
        ));

        let internal = AppError::from(SearchError::Catalog(CatalogError::Unavailable(
            "secret detail".into(),
        )));
        match internal {
            AppError::Internal { message } => assert!(!message.contains("secret")),
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn error_response_status() {
        let response = AppError::BadRequest {
            message: "x".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::Internal {
            message: "x".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_is_ok() {
        let base = serve("http://127.0.0.1:1".into(), "http://127.0.0.1:1".into()).await;
        let body: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn search_from_coordinates() {
        let mut osrm = mockito::Server::new_async().await;
        osrm.mock("GET", Matcher::Regex("^/route/v1/driving/".into()))
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code":"Ok","routes":[{"distance":1234.0,"duration":300.0}]}"#)
            .expect(2)
            .create_async()
            .await;

        let base = serve("http://127.0.0.1:1".into(), osrm.url()).await;
        let (status, body) = post_search(&base, r#"{"latitude":9.0,"longitude":38.74}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["resolvedLocation"]["fromName"], "Current Location");
        assert_eq!(body["results"].as_array().unwrap().len(), 2);
        assert_eq!(body["results"][0]["id"], "mexico");
        assert_eq!(body["results"][0]["realDistanceKm"], 1.2);
        assert_eq!(body["results"][0]["realDurationMin"], 5);
        assert_eq!(body["results"][0]["enrichmentSource"], "routed");

        // equal travel figures, so the unpriced terminal ranks first
        assert_eq!(body["options"][0]["terminal"]["id"], "mexico");
        assert_eq!(body["options"][0]["type"], "Best Route");
        assert_eq!(body["options"][0]["estimatedCost"], "Est. 20–50 ETB");
        assert_eq!(body["options"][1]["type"], "Nearest Terminal");
        assert_eq!(body["options"][1]["estimatedCost"], "15 ETB");
    }

    #[tokio::test]
    async fn unknown_place_is_404_with_suggestion() {
        let mut geocoder = mockito::Server::new_async().await;
        geocoder
            .mock("GET", "/autocomplete")
            .match_query(Matcher::UrlEncoded(
                "q".into(),
                "Atlantis, Addis Ababa, Ethiopia".into(),
            ))
            .with_status(404)
            .with_body(r#"{"error":"Unable to geocode"}"#)
            .create_async()
            .await;

        let base = serve(geocoder.url(), "http://127.0.0.1:1".into()).await;
        let (status, body) = post_search(&base, r#"{"from":"Atlantis"}"#).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Atlantis"));
        assert_eq!(body["message"], body["error"]);
        assert!(body["suggestion"].is_string());
    }

    #[tokio::test]
    async fn validation_failures_are_400() {
        let base = serve("http://127.0.0.1:1".into(), "http://127.0.0.1:1".into()).await;

        let (status, _) = post_search(&base, "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = post_search(&base, r#"{"latitude":9.0,"longitude":200.0}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            post_search(&base, r#"{"latitude":9.0,"longitude":38.74,"maxDistanceMeters":0}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) =
            post_search(&base, r#"{"latitude":9.0,"longitude":38.74,"maxDistance":-5}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_search(&base, "not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn suggest_names() {
        let base = serve("http://127.0.0.1:1".into(), "http://127.0.0.1:1".into()).await;

        let body: Value = reqwest::get(format!("{base}/api/terminals/suggest?q=mex"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, serde_json::json!({"names": ["Mexico Square"]}));

        let body: Value = reqwest::get(format!("{base}/api/terminals/suggest?q=e&limit=1"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["names"], serde_json::json!([]));
    }
}
