// District Profile - Web routes (Axum)
// Pages, JSON API and static images over a shared, read-only ProfileStore

use crate::html::{render_not_found, render_page};
use crate::store::ProfileStore;
use crate::view::ProfileView;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub const IMAGE_ROUTE: &str = "/images";

/// Shared application state. The store is never written after load, so no lock.
#[derive(Clone)]
pub struct AppState {
    store: Arc<ProfileStore>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(message: String) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    districts: usize,
    influencers: usize,
    loaded_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct DistrictEntry {
    name: String,
    href: String,
}

#[derive(Deserialize)]
struct PageQuery {
    district: Option<String>,
}

// ============================================================================
// Page Handlers
// ============================================================================

/// GET /?district=<name> - Profile page, first district by default
async fn serve_profile(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Response {
    let store = &state.store;
    let selection = query
        .district
        .or_else(|| store.first_district().map(str::to_string))
        .unwrap_or_default();
    let background = store.images().background();

    match store.view(&selection) {
        Ok(view) => Html(render_page(
            store.district_names(),
            &view,
            background.as_ref(),
            IMAGE_ROUTE,
        ))
        .into_response(),
        Err(e) => {
            warn!("Profile page for '{}' failed: {}", selection, e);
            (
                StatusCode::NOT_FOUND,
                Html(render_not_found(
                    store.district_names(),
                    &selection,
                    background.as_ref(),
                    IMAGE_ROUTE,
                )),
            )
                .into_response()
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "OK",
        districts: state.store.district_count(),
        influencers: state.store.influencer_count(),
        loaded_at: state.store.loaded_at(),
    }))
}

/// GET /api/districts - Selector entries
async fn list_districts(State(state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<DistrictEntry> = state
        .store
        .district_names()
        .iter()
        .map(|name| DistrictEntry {
            name: name.clone(),
            href: format!("/?district={}", urlencoding::encode(name)),
        })
        .collect();

    Json(ApiResponse::ok(entries))
}

/// GET /api/districts/:name - Profile view as JSON
async fn get_district(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.store.view(&name) {
        Ok(view) => (StatusCode::OK, Json(ApiResponse::<ProfileView>::ok(view))).into_response(),
        Err(e) => {
            let status = if e.is_not_found() {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(ApiResponse::error(e.to_string()))).into_response()
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(store: Arc<ProfileStore>) -> Router {
    let image_dir = store.images().dir().to_path_buf();
    let state = AppState { store };

    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/districts", get(list_districts))
        .route("/districts/:name", get(get_district))
        .with_state(state.clone());

    Router::new()
        .route("/", get(serve_profile))
        .with_state(state)
        .nest("/api", api_routes)
        .nest_service(IMAGE_ROUTE, ServeDir::new(image_dir))
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{default_image_keys, ImageCatalog, BACKGROUND_IMAGE};
    use crate::records::fixtures::{district_table, influencer_table};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use std::path::Path as FsPath;
    use tower::ServiceExt;

    fn app(image_dir: &FsPath) -> Router {
        let images = ImageCatalog::new(image_dir, default_image_keys(), BACKGROUND_IMAGE);
        let store = ProfileStore::new(district_table(), influencer_table(), images);
        router(Arc::new(store))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_defaults_to_first_district() {
        let dir = tempfile::tempdir().unwrap();
        let (status, body) = get(app(dir.path()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2 style='text-align:center'>सीहोर</h2>"));
        assert!(body.contains("<option value=\"सीहोर\" selected>"));
    }

    #[tokio::test]
    async fn test_index_with_selection() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(BACKGROUND_IMAGE), b"png").unwrap();
        let uri = format!("/?district={}", urlencoding::encode("भोपाल"));
        let (status, body) = get(app(dir.path()), &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h2 style='text-align:center'>भोपाल</h2>"));
        assert!(body.contains("background-image: url(\"/images/BJP_BG.png\")"));
    }

    #[tokio::test]
    async fn test_unknown_district_page_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let uri = format!("/?district={}", urlencoding::encode("इंदौर"));
        let (status, body) = get(app(dir.path()), &uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("District not found: इंदौर"));
    }

    #[tokio::test]
    async fn test_api_districts_and_health() {
        let dir = tempfile::tempdir().unwrap();

        let (status, body) = get(app(dir.path()), "/api/districts").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"][0]["name"], "सीहोर");
        assert_eq!(json["data"][1]["name"], "भोपाल");

        let (status, body) = get(app(dir.path()), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["districts"], 2);
        assert_eq!(json["data"]["influencers"], 3);
    }

    #[tokio::test]
    async fn test_api_district_view() {
        let dir = tempfile::tempdir().unwrap();
        let uri = format!("/api/districts/{}", urlencoding::encode("सीहोर"));
        let (status, body) = get(app(dir.path()), &uri).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"]["district"], "सीहोर");
        assert_eq!(json["data"]["blocks"][0]["kind"], "title");
        assert_eq!(json["data"]["blocks"][1]["division"], "संभाग : भोपाल");
    }

    #[tokio::test]
    async fn test_api_unknown_district_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let uri = format!("/api/districts/{}", urlencoding::encode("इंदौर"));
        let (status, body) = get(app(dir.path()), &uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_images_are_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Sehore.png"), b"png-bytes").unwrap();

        let (status, body) = get(app(dir.path()), "/images/Sehore.png").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "png-bytes");
    }
}
