pub mod error;

pub use error::{RelayError, Result};

use std::time::Duration;

use serde::Deserialize;

/// Intent value that routes a record to the repair channel. Any other value
/// goes to the general feedback channel.
pub const REPAIR_INTENT: &str = "repair";

/// One user feedback record as it arrives from the change feed.
/// Missing fields deserialize to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackRecord {
    #[serde(rename = "customerName", default)]
    pub customer_name: String,
    #[serde(rename = "customerPhone", default)]
    pub customer_phone: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub intent: String,
}

/// The two configured incoming-webhook URLs, keyed by intent.
#[derive(Debug, Clone)]
pub struct WebhookTargets {
    pub repair_url: String,
    pub general_url: String,
}

impl WebhookTargets {
    pub fn url_for_intent(&self, intent: &str) -> &str {
        if intent == REPAIR_INTENT {
            &self.repair_url
        } else {
            &self.general_url
        }
    }
}

/// Render the channel message for one record. All four fields are embedded
/// verbatim; the webhook renders plain text.
pub fn format_message(record: &FeedbackRecord) -> String {
    format!(
        "New feedback from {} ({})\nCategory: {}\n{}",
        record.customer_name, record.customer_phone, record.category, record.description
    )
}

pub struct FeedbackRelay {
    client: reqwest::Client,
    targets: WebhookTargets,
}

impl FeedbackRelay {
    pub fn new(targets: WebhookTargets, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, targets }
    }

    /// Forward a batch of newly observed records. Only the first record is
    /// relayed (the feed delivers bursts of duplicates for one submission).
    /// Fire-and-forget: delivery failures are logged and dropped.
    pub async fn relay(&self, records: &[FeedbackRecord]) {
        let Some(first) = records.first() else {
            return;
        };

        tracing::info!(
            count = records.len(),
            customer = %first.customer_name,
            intent = %first.intent,
            "Relaying feedback record"
        );

        let url = self.targets.url_for_intent(&first.intent);
        if let Err(e) = self.post_text(url, &format_message(first)).await {
            tracing::warn!(error = %e, "Feedback webhook delivery failed");
        }
    }

    async fn post_text(&self, url: &str, text: &str) -> Result<()> {
        let body = serde_json::json!({ "text": text });

        let resp = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(RelayError::Webhook {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(intent: &str) -> FeedbackRecord {
        FeedbackRecord {
            customer_name: "A".to_string(),
            customer_phone: "555".to_string(),
            category: "pipe".to_string(),
            description: "leak".to_string(),
            intent: intent.to_string(),
        }
    }

    #[test]
    fn repair_intent_selects_repair_url() {
        let targets = WebhookTargets {
            repair_url: "http://hook/repair".to_string(),
            general_url: "http://hook/general".to_string(),
        };
        assert_eq!(targets.url_for_intent(REPAIR_INTENT), "http://hook/repair");
    }

    #[test]
    fn any_other_intent_selects_general_url() {
        let targets = WebhookTargets {
            repair_url: "http://hook/repair".to_string(),
            general_url: "http://hook/general".to_string(),
        };
        assert_eq!(targets.url_for_intent("praise"), "http://hook/general");
        assert_eq!(targets.url_for_intent(""), "http://hook/general");
    }

    #[test]
    fn message_embeds_all_fields() {
        let msg = format_message(&record("repair"));
        assert!(msg.contains("A"));
        assert!(msg.contains("555"));
        assert!(msg.contains("pipe"));
        assert!(msg.contains("leak"));
    }

    #[test]
    fn record_parses_wire_names_and_defaults() {
        let r: FeedbackRecord = serde_json::from_str(
            r#"{"customerName":"Bo","customerPhone":"1","category":"c","description":"d","intent":"repair"}"#,
        )
        .unwrap();
        assert_eq!(r.customer_name, "Bo");
        assert_eq!(r.intent, "repair");

        let sparse: FeedbackRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(sparse.customer_name, "");
        assert_eq!(sparse.intent, "");
    }
}
