//! Route definitions and router construction.

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the main router with all API routes.
pub fn create_router(ctx: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Auth API
        .route("/me", get(handlers::auth::me))
        // Session API
        .route(
            "/session/{key}",
            get(handlers::session::get)
                .put(handlers::session::set)
                .delete(handlers::session::remove),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(cors)
        .with_state(ctx)
}

/// Liveness probe.
async fn health() -> &'static str {
    "OK"
}
