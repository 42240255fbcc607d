use serde::{Deserialize, Serialize};

/// Body of `POST /templates/generate/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub template_id: i64,
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /folders/{id}/batch-generate/`.
///
/// `folder_id` is accepted for compatibility with clients that echo it; the
/// id in the path wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGenerateRequest {
    #[serde(default)]
    pub folder_id: Option<i64>,
    #[serde(default)]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

/// Body of `PUT /templates/{id}/move`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MoveTemplateRequest {
    #[serde(default)]
    pub folder_id: Option<i64>,
}

/// Query string of `GET /templates/filter/`.
///
/// Accepts both the Korean parameter names used by the web client and
/// English aliases.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateFilter {
    #[serde(default, rename = "용도", alias = "purpose")]
    pub purpose: Option<String>,
    #[serde(default, rename = "회기", alias = "session")]
    pub session: Option<String>,
    #[serde(default, rename = "아동유형", alias = "child_type")]
    pub child_type: Option<String>,
    #[serde(default, rename = "검색어", alias = "search")]
    pub search_term: Option<String>,
}

/// Query string of `GET /content/search/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentSearch {
    #[serde(default, rename = "검색어", alias = "search")]
    pub search_term: Option<String>,
    #[serde(default, rename = "카테고리", alias = "category")]
    pub category: Option<String>,
}

/// Body of the `/ai/*` generation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiGenerationRequest {
    pub keyword: String,
    /// Echoed by the web client; the endpoint decides the actual type.
    #[serde(default)]
    pub generation_type: Option<String>,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_count() -> u32 {
    10
}
