use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedback_relay::{FeedbackRelay, WebhookTargets};
use story_search_client::StorySearchClient;
use storybridge_common::Config;
use storybridge_server::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("storybridge=info".parse()?))
        .init();

    let config = Config::from_env();
    let timeout = Duration::from_secs(config.search_timeout_secs);

    let state = Arc::new(AppState {
        search: StorySearchClient::new(&config.search_endpoint, timeout),
        relay: FeedbackRelay::new(
            WebhookTargets {
                repair_url: config.repair_webhook_url,
                general_url: config.feedback_webhook_url,
            },
            timeout,
        ),
        detail_base_url: config.story_detail_base_url,
    });

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Storybridge starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
