//! Normalization and parsing of raw model output

use serde_json::{Map, Value};

use crate::types::{QuizResult, MISSING_SUMMARY};
use crate::QuizError;

const OPENING_FENCE: &str = "```json";
const CLOSING_FENCE: &str = "```";

/// Trim the response and drop a leading "```json" and a trailing "```".
///
/// The model sometimes wraps its JSON in a markdown code block even when told
/// not to.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let mut body = raw.trim();
    if let Some(rest) = body.strip_prefix(OPENING_FENCE) {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix(CLOSING_FENCE) {
        body = rest;
    }
    body
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a raw model response into a [`QuizResult`].
///
/// `summary` and `questions` are taken as-is; a missing summary becomes
/// [`MISSING_SUMMARY`] and missing questions become an empty list.
///
/// # Errors
/// Returns an error if the body is not JSON or is not a JSON object.
pub fn parse_quiz_response(raw: &str) -> Result<QuizResult, QuizError> {
    let value: Value = serde_json::from_str(strip_code_fence(raw))?;

    let mut object = match value {
        Value::Object(object) => object,
        other => return Err(QuizError::NotAnObject(json_type(&other))),
    };

    Ok(QuizResult {
        summary: take_summary(&mut object),
        questions: take_questions(&mut object),
    })
}

fn take_summary(object: &mut Map<String, Value>) -> String {
    match object.remove("summary") {
        Some(Value::String(summary)) => summary,
        None | Some(Value::Null) => MISSING_SUMMARY.to_string(),
        Some(other) => other.to_string(),
    }
}

fn take_questions(object: &mut Map<String, Value>) -> Value {
    match object.remove("questions") {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(questions) => questions,
    }
}
