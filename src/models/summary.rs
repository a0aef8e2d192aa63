use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Summary {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub subject: Option<String>,
    pub source: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Envelope returned by the summary list and search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SummariesResponse {
    pub success: Option<bool>,
    #[serde(default)]
    pub summaries: Vec<Summary>,
}
