//! Card construction and the composeExtension result envelope.
//!
//! Each story document becomes one attachment: a hero card as primary
//! content plus a thumbnail card as its preview. Output order mirrors
//! input order and no document is ever skipped.

use serde::Serialize;
use story_search_client::StoryDocument;

pub const HERO_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.hero";
pub const THUMBNAIL_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.thumbnail";

const OPEN_URL_ACTION: &str = "openUrl";
const DETAIL_BUTTON_TITLE: &str = "Detail";

#[derive(Debug, Clone, Serialize)]
pub struct CardImage {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardAction {
    #[serde(rename = "type")]
    pub action_type: &'static str,
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroCard {
    pub title: String,
    pub subtitle: String,
    pub text: String,
    pub images: Vec<CardImage>,
    pub buttons: Vec<CardAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThumbnailCard {
    pub title: String,
    pub subtitle: String,
    pub images: Vec<CardImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewAttachment {
    #[serde(rename = "contentType")]
    pub content_type: &'static str,
    pub content: ThumbnailCard,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtensionAttachment {
    #[serde(rename = "contentType")]
    pub content_type: &'static str,
    pub content: HeroCard,
    pub preview: PreviewAttachment,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtensionResult {
    #[serde(rename = "attachmentLayout")]
    pub attachment_layout: &'static str,
    #[serde(rename = "type")]
    pub result_type: &'static str,
    pub attachments: Vec<ExtensionAttachment>,
}

impl ExtensionResult {
    /// The only layout/type combination this extension produces.
    pub fn list(attachments: Vec<ExtensionAttachment>) -> Self {
        Self {
            attachment_layout: "list",
            result_type: "result",
            attachments,
        }
    }
}

/// Envelope returned to the chat client.
#[derive(Debug, Clone, Serialize)]
pub struct ExtensionResponse {
    #[serde(rename = "composeExtension")]
    pub compose_extension: ExtensionResult,
}

fn first_or_empty(names: &[String]) -> String {
    names.first().cloned().unwrap_or_default()
}

fn hero_card(story: &StoryDocument, detail_base_url: &str) -> HeroCard {
    HeroCard {
        title: first_or_empty(&story.customer_names),
        subtitle: first_or_empty(&story.industry_names),
        text: story.headline.clone(),
        images: vec![CardImage {
            url: story.image_url.clone(),
        }],
        buttons: vec![CardAction {
            action_type: OPEN_URL_ACTION,
            title: DETAIL_BUTTON_TITLE,
            value: format!("{}{}", detail_base_url, story.id),
        }],
    }
}

fn thumbnail_card(story: &StoryDocument) -> ThumbnailCard {
    ThumbnailCard {
        title: first_or_empty(&story.customer_names),
        subtitle: first_or_empty(&story.industry_names),
        images: vec![CardImage {
            url: story.image_url.clone(),
        }],
    }
}

/// Build one attachment per story, order-preserving.
pub fn build_attachments(
    stories: &[StoryDocument],
    detail_base_url: &str,
) -> Vec<ExtensionAttachment> {
    stories
        .iter()
        .map(|story| ExtensionAttachment {
            content_type: HERO_CARD_CONTENT_TYPE,
            content: hero_card(story, detail_base_url),
            preview: PreviewAttachment {
                content_type: THUMBNAIL_CARD_CONTENT_TYPE,
                content: thumbnail_card(story),
            },
        })
        .collect()
}
