use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_url_handler, health_handler, redirect_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the public HTTP surface.
    ///
    /// - `POST /api/url` - shorten a URL
    /// - `GET /{short_id}` - permanent redirect to the stored URL
    /// - `GET /health` - liveness probe
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/url", post(create_url_handler))
            .route("/{short_id}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
