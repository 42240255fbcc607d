use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tag key for the purpose of a script (check-in, education, ...).
pub const TAG_PURPOSE: &str = "용도";
/// Tag key for the counseling session number.
pub const TAG_SESSION: &str = "회기";
/// Tag key for the child type the script is written for.
pub const TAG_CHILD_TYPE: &str = "아동유형";

/// The three tag keys the filter and tag-listing endpoints understand.
pub const RECOGNIZED_TAG_KEYS: [&str; 3] = [TAG_PURPOSE, TAG_SESSION, TAG_CHILD_TYPE];

/// A counselor conversation script.
///
/// `fixed_content` holds the script text with `{{{name}}}` placeholders.
/// `variables` is stored verbatim for clients and is not interpreted by the
/// backend. `tags` maps the recognized tag keys to their values; values are
/// usually strings but older clients stored numbers too.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub fixed_content: String,
    pub variables: Map<String, Value>,
    pub tags: Map<String, Value>,
    pub folder_id: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

impl Template {
    /// Text of the value stored under a tag key: strings as they are, other
    /// values as JSON text. `null` counts as absent.
    pub fn tag(&self, key: &str) -> Option<String> {
        match self.tags.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Writable fields of a template, used both for creation and full updates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplatePayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub fixed_content: String,
    #[serde(default)]
    pub variables: Map<String, Value>,
    #[serde(default)]
    pub tags: Map<String, Value>,
    #[serde(default)]
    pub folder_id: Option<i64>,
}
