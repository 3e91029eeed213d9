use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::{info, warn};

use crate::activity::{Activity, Invocation};
use crate::cards::{build_attachments, ExtensionResponse, ExtensionResult};
use crate::AppState;

/// Diagnostic returned on the catch-all path. This is the handler's sole
/// error surface; search failures degrade to zero results instead.
pub const INVALID_REQUEST_MESSAGE: &str =
    "Invalid request! This API supports only messaging extension requests. Check your query and try again";

pub async fn api_extension(
    State(state): State<Arc<AppState>>,
    Json(activity): Json<Activity>,
) -> impl IntoResponse {
    let query = match Invocation::resolve(&activity) {
        Invocation::ExtensionQuery(query) => query,
        Invocation::Malformed => {
            warn!(
                activity_type = %activity.activity_type,
                activity_name = ?activity.name,
                "Rejected non-extension invocation"
            );
            return (StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE).into_response();
        }
    };

    let keyword = query.effective_keyword();
    info!(command_id = ?query.command_id, keyword, "Extension query received");

    let stories = state.search.search(&keyword).await;
    let attachments = build_attachments(&stories, &state.detail_base_url);
    info!(count = attachments.len(), "Returning story attachments");

    Json(ExtensionResponse {
        compose_extension: ExtensionResult::list(attachments),
    })
    .into_response()
}
