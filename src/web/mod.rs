//! Web server for the Catalyst directory.
//!
//! Serves the server-rendered pages, a small JSON API over the cached
//! catalog, and the embedded static assets.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/apps` - Whole catalog (`{categories, apps}`), with ETag
//! - `GET /api/apps/{id}` - One app
//! - `GET /api/categories` - Categories with app counts
//! - `GET /api/categories/{id}/apps` - Apps in one category
//! - `GET /api/search?q=&selected=&key=` - Search modal state
//! - `GET /`, `/app/{id}`, `/about`, `/submit-tool` - Pages
//! - `POST /submit-tool` - Submission form (acknowledged, not stored)
//! - `GET /static/{*path}` - Embedded assets

pub mod pages;
pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::Config;
use crate::models::{App, AppsData, Category};
use crate::search::{SearchAction, SearchHit, SearchKey, SearchSession};
use crate::services::CatalogStore;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Catalog cache (loaded on first request)
    store: Arc<CatalogStore>,
    /// Brand name shown in page headers
    site_name: Arc<str>,
}

impl AppState {
    /// Creates application state from configuration.
    ///
    /// The data file is not read here; the first request loads it.
    pub fn new(config: &Config) -> Self {
        Self::with_store(CatalogStore::new(&config.data.path), &config.site.name)
    }

    /// Creates application state around an existing store.
    pub fn with_store(store: CatalogStore, site_name: &str) -> Self {
        Self {
            store: Arc::new(store),
            site_name: Arc::from(site_name),
        }
    }

    /// Returns the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Returns the site name.
    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Category list response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    /// Categories in catalog order.
    pub categories: Vec<CategoryInfo>,
}

/// Category with its app count.
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Number of apps listed under this category.
    pub app_count: usize,
}

impl CategoryInfo {
    fn new(data: &AppsData, category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            app_count: data.app_count(&category.id),
        }
    }
}

/// Apps of one category.
#[derive(Debug, Serialize)]
pub struct CategoryAppsResponse {
    /// The category.
    pub category: Category,
    /// Its apps in catalog order.
    pub apps: Vec<App>,
}

/// Query parameters for the search modal.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Query text as typed.
    #[serde(default)]
    pub q: String,
    /// Selection index before the key press.
    #[serde(default)]
    pub selected: usize,
    /// Key pressed (DOM key name), if any.
    pub key: Option<String>,
}

/// Search modal state after applying the query and key press.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Query text.
    pub query: String,
    /// Up to eight matching apps.
    pub results: Vec<SearchHit>,
    /// Selection index.
    pub selected: usize,
    /// True when a non-blank query matched nothing.
    pub no_results: bool,
    /// Page to open, set when Enter picked a result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigate_to: Option<String>,
    /// True when the modal should close.
    pub close: bool,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

/// Strong ETag over a response body.
fn etag_for(body: &[u8]) -> String {
    format!("\"{:x}\"", Sha256::digest(body))
}

/// Returns true if `If-None-Match` lists `etag` (or `*`).
///
/// Uses weak comparison: a `W/` prefix on a candidate is ignored.
fn etag_matches(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| {
            v.split(',')
                .map(str::trim)
                .map(|candidate| candidate.strip_prefix("W/").unwrap_or(candidate))
                .any(|candidate| candidate == etag || candidate == "*")
        })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/apps - The whole catalog.
async fn get_apps_data(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let data = state.store.apps_data().await;

    let body = match serde_json::to_vec(&*data) {
        Ok(body) => body,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details(
                    "Failed to fetch apps data",
                    e.to_string(),
                )),
            )
                .into_response();
        }
    };

    let etag = etag_for(&body);
    if etag_matches(&headers, &etag) {
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, etag)]).into_response();
    }

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::ETAG, etag),
        ],
        body,
    )
        .into_response()
}

/// GET /api/apps/{id} - One app.
async fn get_app(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<App>> {
    let data = state.store.apps_data().await;

    data.app(&id).cloned().map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("App not found: {id}"))),
        )
    })
}

/// GET /api/categories - Categories with app counts.
async fn list_categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let data = state.store.apps_data().await;

    let categories = data
        .categories
        .iter()
        .map(|cat| CategoryInfo::new(&data, cat))
        .collect();

    Json(CategoryListResponse { categories })
}

/// GET /api/categories/{id}/apps - Apps in one category.
async fn list_category_apps(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CategoryAppsResponse>> {
    let data = state.store.apps_data().await;

    let category = data.category(&id).cloned().ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ApiError::new(format!("Category not found: {id}"))),
        )
    })?;
    let apps = data.apps_in_category(&id).cloned().collect();

    Ok(Json(CategoryAppsResponse { category, apps }))
}

/// GET /api/search - Runs the query, then applies the key press if any.
async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let key = query
        .key
        .as_deref()
        .map(str::parse::<SearchKey>)
        .transpose()
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(ApiError::new(e))))?;

    let data = state.store.apps_data().await;
    let mut session = SearchSession::new(&data);
    session.set_query(query.q);
    session.select(query.selected);

    let action = key.map_or(SearchAction::None, |key| session.handle_key(key));
    let (navigate_to, close) = match action {
        SearchAction::None => (None, false),
        SearchAction::Close => (None, true),
        SearchAction::Navigate(path) => (Some(path), true),
    };

    Ok(Json(SearchResponse {
        query: session.query().to_string(),
        results: session.hits(),
        selected: session.selected(),
        no_results: session.is_no_results(),
        navigate_to,
        close,
    }))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all pages and API endpoints.
pub fn create_router(state: AppState) -> Router {
    // The JSON API is public and read-only
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Catalog API
        .route("/api/apps", get(get_apps_data))
        .route("/api/apps/{id}", get(get_app))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{id}/apps", get(list_category_apps))
        .route("/api/search", get(search))
        // Pages
        .route("/", get(pages::home))
        .route("/app/{id}", get(pages::app_detail))
        .route("/about", get(pages::about))
        .route(
            "/submit-tool",
            get(pages::submit_form).post(pages::submit_tool),
        )
        // Assets
        .route("/static/{*path}", get(static_files::serve_static))
        .fallback(pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `config` - Application configuration
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(&config);

    // Warm the cache so a broken data file shows up in the log at startup
    if let Err(e) = state.store.try_apps_data().await {
        error!("Error loading apps data: {e:#}");
    }

    let app = create_router(state);

    info!("Starting {} on http://{}", config.site.name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
