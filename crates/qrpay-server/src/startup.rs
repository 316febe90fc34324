//! Router construction

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{
    create_payment_intent, get_payment_intent, health_check, public_config,
};
use crate::state::AppState;

/// Build the application router
///
/// Unknown paths fall back to the frontend's `index.html` so that
/// `/payment/{id}` and `/payment/success` load the single-page app.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        // Health & info
        .route("/health", get(health_check))
        .route("/api/config", get(public_config))

        // Payments
        .route("/api/create-payment-intent", post(create_payment_intent))
        .route("/api/payment-intent/{id}", get(get_payment_intent))

        // Static files (WASM frontend)
        .fallback_service(frontend)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
