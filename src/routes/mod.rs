//! Routers de la API
//!
//! Composición del router principal: página del dashboard, health check
//! y los dos subsistemas bajo /api.

pub mod directory_routes;
pub mod whereabout_routes;

use axum::{response::Html, routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Página estática del dashboard que consume la API
const DASHBOARD_HTML: &str = include_str!("../../static/dashboard.html");

/// Crear el router principal de la aplicación
pub fn create_app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard))
        .route("/health", get(health))
        .nest("/api/directory", directory_routes::create_directory_router())
        .nest(
            "/api/whereabout",
            whereabout_routes::create_whereabout_router(),
        )
        .layer(TraceLayer::new_for_http())
}

async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-visibility",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
