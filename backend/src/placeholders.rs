//! `{{{name}}}` placeholder handling for template content.
//!
//! There is no escaping: any `{{{...}}}` run in the content is a placeholder.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\{([^}]+)\}\}\}").expect("placeholder regex is valid"));

/// Names of every placeholder in `content`, in occurrence order.
/// A name used twice is returned twice.
pub fn extract_placeholders(content: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Like [`extract_placeholders`] but keeps only the first occurrence of each name.
pub fn distinct_placeholders(content: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in extract_placeholders(content) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// Replaces `{{{key}}}` with the bound value for every key in `bindings`,
/// in the mapping's iteration order. Placeholders without a binding stay as
/// they are.
pub fn substitute(content: &str, bindings: &Map<String, Value>) -> String {
    let mut result = content.to_string();
    for (key, value) in bindings {
        let token = format!("{{{{{{{key}}}}}}}");
        result = result.replace(&token, &value_text(value));
    }
    result
}

/// String form of a bound value: JSON strings without quotes, everything
/// else as JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bindings(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn extracts_in_order_with_duplicates() {
        let content = "{{{아동이름}}}아, {{{놀이}}} 할래? {{{아동이름}}}는 {{{놀이}}}를 좋아해.";
        assert_eq!(
            extract_placeholders(content),
            vec!["아동이름", "놀이", "아동이름", "놀이"]
        );
        assert_eq!(distinct_placeholders(content), vec!["아동이름", "놀이"]);
    }

    #[test]
    fn ignores_double_braces_and_empty_names() {
        assert!(extract_placeholders("{{name}} and {{{}}} and {name}").is_empty());
    }

    #[test]
    fn substitutes_known_bindings() {
        let content = "Hello {{{name}}}, today is {{{date}}}.";
        let result = substitute(content, &bindings(json!({"name": "Sam", "date": "Monday"})));
        assert_eq!(result, "Hello Sam, today is Monday.");
        assert_eq!(extract_placeholders(content), vec!["name", "date"]);
    }

    #[test]
    fn empty_bindings_leave_content_unchanged() {
        let content = "안녕하세요 {{{이름}}}님! 오늘은 {{{날짜}}}입니다.";
        assert_eq!(substitute(content, &Map::new()), content);
    }

    #[test]
    fn unbound_placeholders_survive() {
        let result = substitute("{{{a}}} and {{{b}}}", &bindings(json!({"a": "x"})));
        assert_eq!(result, "x and {{{b}}}");
    }

    #[test]
    fn non_string_values_use_json_text() {
        let result = substitute(
            "{{{회기}}}회기, 완료: {{{done}}}",
            &bindings(json!({"회기": 3, "done": true})),
        );
        assert_eq!(result, "3회기, 완료: true");
    }

    #[test]
    fn substitution_is_idempotent() {
        let b = bindings(json!({"name": "Sam"}));
        let once = substitute("Hi {{{name}}} {{{other}}}", &b);
        assert_eq!(substitute(&once, &b), once);
    }
}
