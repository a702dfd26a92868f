//! API routes

use crate::handlers;
use crate::state::AppState;
use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the CORS layer from a `*` or comma-separated origin list
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let allow_origin = match origins {
        Some("*") => AllowOrigin::any(),
        Some(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            AllowOrigin::list(allowed)
        }
        // Default: allow localhost origins for development
        None => AllowOrigin::list([
            HeaderValue::from_static("http://localhost:3000"),
            HeaderValue::from_static("http://localhost:5000"),
            HeaderValue::from_static("http://127.0.0.1:3000"),
            HeaderValue::from_static("http://127.0.0.1:5000"),
        ]),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router with the default CORS policy
pub fn create_router(state: AppState) -> Router {
    create_router_with_cors(state, cors_layer(None))
}

/// Create the application router
pub fn create_router_with_cors(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::get_store))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
