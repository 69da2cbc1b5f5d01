//! Recovery of a JSON payload from free-form model output.
//!
//! Models wrap JSON in markdown fences or prose despite being told not to.
//! Extraction runs in two tiers: strip fences and parse, then fall back to the
//! outermost bracket span of the untouched text. The span scan is greedy and
//! does not balance brackets, so brackets inside string values may select the
//! wrong span; that output then fails to parse and surfaces as an error.

use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::generation::errors::GenerationError;

const FENCE_WITH_LANGUAGE: &str = "```json";
const FENCE: &str = "```";

/// Top-level JSON value the caller expects from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Array,
    Object,
}

impl PayloadKind {
    fn delimiters(self) -> (char, char) {
        match self {
            PayloadKind::Array => ('[', ']'),
            PayloadKind::Object => ('{', '}'),
        }
    }
}

pub fn extract_json(raw: &str, kind: PayloadKind) -> Result<Value, GenerationError> {
    let cleaned = strip_code_fences(raw.trim());

    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => Ok(value),
        Err(e) => {
            debug!("Direct JSON parse failed ({}), scanning for {:?} span", e, kind);

            greedy_span(raw, kind)
                .and_then(|span| serde_json::from_str::<Value>(span).ok())
                .ok_or_else(|| {
                    warn!("No JSON payload recoverable from model response: {}", raw);
                    GenerationError::Extraction {
                        raw: raw.to_string(),
                    }
                })
        }
    }
}

fn strip_code_fences(text: &str) -> String {
    text.replace(FENCE_WITH_LANGUAGE, "")
        .replace(FENCE, "")
        .trim()
        .to_string()
}

/// First opening delimiter through last closing delimiter, inclusive.
fn greedy_span(text: &str, kind: PayloadKind) -> Option<&str> {
    let (open, close) = kind.delimiters();
    let start = text.find(open)?;
    let end = text.rfind(close)?;

    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_clean_json_directly() {
        let value = extract_json(r#"[{"name":"A"}]"#, PayloadKind::Array).unwrap();
        assert_eq!(value, json!([{"name": "A"}]));
    }

    #[test]
    fn fenced_array_matches_unfenced_array() {
        let body = "[\n  {\n    \"name\": \"Pancakes\",\n    \"servings\": 2\n  }\n]";
        let fenced = format!("```json\n{body}\n```");

        let from_fenced = extract_json(&fenced, PayloadKind::Array).unwrap();
        let from_plain = extract_json(body, PayloadKind::Array).unwrap();

        assert_eq!(from_fenced, from_plain);
    }

    #[test]
    fn bare_fence_without_language_is_stripped() {
        let value = extract_json("```\n{\"mealPlan\": []}\n```", PayloadKind::Object).unwrap();
        assert_eq!(value, json!({"mealPlan": []}));
    }

    #[test]
    fn falls_back_to_greedy_bracket_scan() {
        let raw = "Here is your data: [{\"name\":\"A\"}] Hope it helps!";
        let value = extract_json(raw, PayloadKind::Array).unwrap();
        assert_eq!(value, json!([{"name": "A"}]));
    }

    #[test]
    fn object_scan_spans_outermost_braces() {
        let raw = "Sure! {\"summary\": {\"totalDays\": 1}, \"mealPlan\": [{\"day\": 1}]} Enjoy.";
        let value = extract_json(raw, PayloadKind::Object).unwrap();
        assert_eq!(value["mealPlan"][0]["day"], json!(1));
    }

    #[test]
    fn prose_without_json_is_an_extraction_error() {
        let raw = "Sorry, I cannot help with that.";
        match extract_json(raw, PayloadKind::Array) {
            Err(GenerationError::Extraction { raw: kept }) => assert_eq!(kept, raw),
            other => panic!("expected extraction error, got {other:?}"),
        }
    }

    #[test]
    fn reversed_brackets_are_not_a_span() {
        let raw = "] nothing here [";
        assert!(matches!(
            extract_json(raw, PayloadKind::Array),
            Err(GenerationError::Extraction { .. })
        ));
    }

    #[test]
    fn truncated_output_is_an_extraction_error() {
        let raw = "[{\"name\": \"A\"}, {\"name\": \"B\"";
        assert!(matches!(
            extract_json(raw, PayloadKind::Array),
            Err(GenerationError::Extraction { .. })
        ));
    }

    #[test]
    fn extraction_is_idempotent() {
        let raw = "Intro text [1, 2, {\"x\": [3]}] trailing";
        let first = extract_json(raw, PayloadKind::Array).unwrap();
        let second = extract_json(raw, PayloadKind::Array).unwrap();
        assert_eq!(first, second);
    }
}
