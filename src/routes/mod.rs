pub mod customer_routes;
pub mod rental_routes;
pub mod tracker_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la API, listo para servir
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/veiculos", vehicle_routes::create_vehicle_router())
        .nest("/api/clientes", customer_routes::create_customer_router())
        .nest("/api/locacoes", rental_routes::create_rental_router())
        .nest("/api/rastreador", tracker_routes::create_tracker_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Local::now().to_rfc3339(),
    }))
}
