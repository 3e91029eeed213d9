use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query payload for the catalog search endpoint. Everything except `text`
/// is fixed; the catalog rejects requests missing these fields.
#[derive(Debug, Clone, Serialize)]
pub struct StorySearchRequest {
    #[serde(rename = "facet_filters")]
    pub facet_filters: Vec<Value>,
    #[serde(rename = "related_documents")]
    pub related_documents: Vec<Value>,
    #[serde(rename = "featured_sections")]
    pub featured_sections: Option<Value>,
    #[serde(rename = "page_id")]
    pub page_id: String,
    #[serde(rename = "sort_mode")]
    pub sort_mode: String,
    pub text: String,
}

impl StorySearchRequest {
    pub fn with_text(text: &str) -> Self {
        Self {
            facet_filters: Vec::new(),
            related_documents: Vec::new(),
            featured_sections: None,
            page_id: "0".to_string(),
            sort_mode: "cam_rank desc".to_string(),
            text: text.to_string(),
        }
    }
}

/// One customer case study as returned by the catalog search.
/// Missing fields deserialize to empty rather than failing the whole result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryDocument {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "story_customer_name", default)]
    pub customer_names: Vec<String>,
    #[serde(rename = "story_industry_friendlyname", default)]
    pub industry_names: Vec<String>,
    #[serde(rename = "story_search_results_image", default)]
    pub image_url: String,
    #[serde(rename = "story_headline", default)]
    pub headline: String,
}

/// A search hit: relevance score plus the matched document.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredDocument {
    #[serde(rename = "Score", default)]
    pub score: f64,
    #[serde(rename = "Document")]
    pub document: StoryDocument,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    /// Absent when no document matched. Absent and empty are equivalent.
    #[serde(rename = "Results")]
    pub results: Option<Vec<ScoredDocument>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorySearchResponse {
    #[serde(rename = "search_result", default)]
    pub search_result: SearchResults,
}
