use serde::{Deserialize, Serialize};

/// Usage of one placeholder across the templates of a folder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommonVariable {
    pub name: String,
    /// Number of templates whose content contains the placeholder.
    pub usage_count: usize,
    /// `usage_count` relative to the folder size, 0-100 with one decimal.
    pub percentage: f64,
    /// Set only when a single template uses the placeholder.
    pub template_name: Option<String>,
}
