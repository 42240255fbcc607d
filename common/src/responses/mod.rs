use crate::model::generation::GenerationType;
use crate::model::placeholder::CommonVariable;
use serde::{Deserialize, Serialize};

/// Result of substituting bindings into one template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    pub template_id: i64,
    pub template_name: String,
    pub final_prompt: String,
    /// The bindings as received.
    pub variables_used: serde_json::Map<String, serde_json::Value>,
    /// Placeholders found in the template, in occurrence order.
    pub found_variables: Vec<String>,
    /// Binding keys that matched at least one placeholder.
    pub applied_variables: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchGenerateResponse {
    pub folder_id: i64,
    pub folder_name: String,
    pub total_templates: usize,
    pub results: Vec<GenerateResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonVariablesResponse {
    pub folder_id: i64,
    pub folder_name: String,
    pub total_templates: usize,
    pub common_variables: Vec<CommonVariable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiGenerationResponse {
    pub keyword: String,
    pub generation_type: GenerationType,
    pub generated_sentences: Vec<String>,
    pub created_at: String,
}
