pub mod auth_routes;
pub mod driver_routes;
pub mod expense_routes;
pub mod maintenance_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Ensamblar el router de la API agrupado por recurso
pub fn create_api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router(state.clone()))
        .nest("/drivers", driver_routes::create_driver_router(state.clone()))
        .nest("/trips", trip_routes::create_trip_router(state.clone()))
        .nest(
            "/maintenance",
            maintenance_routes::create_maintenance_router(state.clone()),
        )
        .nest("/expenses", expense_routes::create_expense_router(state))
}

/// Construir la aplicación completa, lista para servir
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .merge(create_api_router(state.clone()))
        .fallback(not_found)
        .layer(cors_middleware())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint de prueba simple
async fn ping() -> Json<serde_json::Value> {
    Json(json!({
        "message": "🚛 FleetFlow API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
