use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use feedback_relay::FeedbackRecord;

use crate::AppState;

/// Boundary for the change-feed delivery: one POST per batch of newly
/// observed feedback records. Fire-and-forget — the trigger source never
/// sees delivery failures, so this always answers 202.
pub async fn api_feedback(
    State(state): State<Arc<AppState>>,
    Json(records): Json<Vec<FeedbackRecord>>,
) -> impl IntoResponse {
    if !records.is_empty() {
        info!(
            count = records.len(),
            first_customer = %records[0].customer_name,
            "Feedback batch received"
        );
        state.relay.relay(&records).await;
    }
    StatusCode::ACCEPTED
}
