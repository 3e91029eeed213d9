pub mod activity;
pub mod cards;
pub mod extension;
pub mod feedback;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use feedback_relay::FeedbackRelay;
use story_search_client::StorySearchClient;

pub struct AppState {
    pub search: StorySearchClient,
    pub relay: FeedbackRelay,
    pub detail_base_url: String,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Messaging extension invocations from Teams
        .route("/api/extension", post(extension::api_extension))
        // Change-feed delivery of new feedback records
        .route("/api/feedback", post(feedback::api_feedback))
        .with_state(state)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
