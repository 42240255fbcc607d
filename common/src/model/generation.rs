use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of text requested from the language model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GenerationType {
    /// Sentences a 5-7 year old might say about a keyword.
    SamplePhrase,
    /// Statements describing a child's experience with a keyword.
    Experience,
    /// Hints for a guessing game whose answer is the keyword.
    Hint,
}

impl GenerationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationType::SamplePhrase => "sample_phrase",
            GenerationType::Experience => "experience",
            GenerationType::Hint => "hint",
        }
    }
}

impl fmt::Display for GenerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenerationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sample_phrase" => Ok(GenerationType::SamplePhrase),
            "experience" => Ok(GenerationType::Experience),
            "hint" => Ok(GenerationType::Hint),
            other => Err(format!("unknown generation type '{}'", other)),
        }
    }
}

/// One generated sentence as stored in the history table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRecord {
    pub id: i64,
    pub keyword: String,
    pub generation_type: GenerationType,
    pub generated_text: String,
    pub created_at: String,
}
