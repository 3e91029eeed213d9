use std::env;

use story_search_client::DEFAULT_SEARCH_ENDPOINT;

/// Base URL for the canonical story detail pages; the story id is appended.
pub const DEFAULT_STORY_DETAIL_BASE_URL: &str = "https://customers.microsoft.com/en-us/story/";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Story catalog
    pub search_endpoint: String,
    pub story_detail_base_url: String,
    pub search_timeout_secs: u64,

    // Feedback webhooks
    pub repair_webhook_url: String,
    pub feedback_webhook_url: String,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            search_endpoint: env::var("SEARCH_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_SEARCH_ENDPOINT.to_string()),
            story_detail_base_url: env::var("STORY_DETAIL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_STORY_DETAIL_BASE_URL.to_string()),
            search_timeout_secs: env::var("SEARCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("SEARCH_TIMEOUT_SECS must be a number"),
            repair_webhook_url: required_env("REPAIR_WEBHOOK_URL"),
            feedback_webhook_url: required_env("FEEDBACK_WEBHOOK_URL"),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
